// Tokens dropped before counting, in canonical (uppercase) form.
pub const STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

// Number of pairs printed in the report.
pub const TOP_N: usize = 10;

// Corpus, resolved relative to the working directory. Order is identity.
pub const BOOK_PATHS: &[&str] = &[
    "Cats by Moncrif.txt",
    "Foxes Book of Martyrs Part 1.txt",
    "Foxes Book of Martyrs Part 2.txt",
    "Foxes Book of Martyrs Part 3.txt",
    "Foxes Book of Martyrs Part 4.txt",
    "Foxes Book of Martyrs Part 5.txt",
    "Foxes Book of Martyrs Part 6.txt",
    "Gerards Herbal Vol. 1.txt",
    "Gerards Herbal Vol. 2.txt",
    "Gerards Herbal Vol. 3.txt",
    "Gerards Herbal Vol.4.txt",
    "Gil Blas.txt",
    "Gossip in a Library.txt",
    "Hudibras.txt",
    "King of the Beggars.txt",
    "Knocknagow.txt",
    "Les Chats par Moncrif.txt",
    "Lives and Anecdotes of Misers.txt",
    "Love and Madness - Herbert Croft.txt",
    "Memoirs of Laetitia Pilkington V 1.txt",
    "Memoirs of Laetitia Pilkington V 2.txt",
    "Memoirs of Laetitia Pilkington V 3.txt",
    "Memoirs of Mrs Margaret Leeson - Peg Plunkett.txt",
    "Monro his Expedition.txt",
    "Mrs Beetons Book of Household Management.txt",
    "Out of the Hurly-Burly.txt",
    "Percys Reliques.txt",
    "Pompey The Little.txt",
    "Radical Pamphlets from the English Civil War.txt",
    "Scepsis Scientifica.txt",
    "The Anatomy of Melancholy Part 1.txt",
    "The Anatomy of Melancholy Part 2.txt",
    "The Anatomy of Melancholy Part 3.txt",
    "The Complete Cony-catching.txt",
    "The Consolation of Philosophy.txt",
    "The Devil on Two Sticks.txt",
    "The Diary of a Lover of Literature.txt",
    "The History Of Ireland - Geoffrey Keating.txt",
    "The History of the Human Heart.txt",
    "The Ingoldsby Legends.txt",
    "The Life of Beau Nash.txt",
    "The Life of John Buncle by Thomas Amory.txt",
    "The Life of King Richard III.txt",
    "The Life of Pico della Mirandola.txt",
    "The Martyrdom of Man.txt",
    "The Masterpiece of Aristotle.txt",
    "The Memoirs of Count Boruwlaski.txt",
    "The Metamorphosis of Ajax.txt",
    "The Newgate Calendar - Supplement 3.txt",
    "The Newgate Calendar Supplement.txt",
    "The Newgate Calendar V 1.txt",
    "The Newgate Calendar V 2.txt",
    "The Newgate Calendar V 3.txt",
    "The Newgate Calendar V 4.txt",
    "The Newgate Calendar V 5.txt",
    "The Newgate Calendar V 6.txt",
    "The Poems of Ossian.txt",
    "The Poetical Works of John Skelton.txt",
    "The Protestant Reformation.txt",
    "The Real Story of John Carteret Pilkington.txt",
    "The Rowley Poems.txt",
    "The Silver Fox.txt",
];
