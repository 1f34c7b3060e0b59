use std::cmp::Ordering;
use std::io::{self, Write};

/// Score of one unordered document pair, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    pub score: f64,
    pub first: usize,
    pub second: usize,
}
impl SimilarityScore {
    pub fn new(score: f64, first: usize, second: usize) -> Self {
        SimilarityScore {
            score,
            first,
            second,
        }
    }
}

/// Highest score first. Equal scores fall back to ascending `first`, then
/// ascending `second`, which keeps the output deterministic.
pub fn rank_order(a: &SimilarityScore, b: &SimilarityScore) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(a.first.cmp(&b.first))
        .then(a.second.cmp(&b.second))
}

pub fn sort_scores(scores: &mut [SimilarityScore]) {
    scores.sort_by(rank_order);
}

/// The first `top_n` entries of already ranked scores, or all of them when
/// there are fewer.
pub fn top_pairs(ranked: &[SimilarityScore], top_n: usize) -> &[SimilarityScore] {
    &ranked[..top_n.min(ranked.len())]
}

/// Writes the header followed by one line per pair among the first `top_n`
/// ranked scores. `names` is indexed by the pair indices; a pair whose index
/// has no name fails with `InvalidInput` instead of panicking.
pub fn write_top_pairs<W: Write>(
    out: &mut W,
    ranked: &[SimilarityScore],
    names: &[&str],
    top_n: usize,
) -> io::Result<()> {
    writeln!(out, "Top {} Similar Book Pairs:", top_n)?;
    for pair in top_pairs(ranked, top_n) {
        let first = name_at(names, pair.first)?;
        let second = name_at(names, pair.second)?;
        writeln!(out, "{} and {} - Similarity: {}", first, second, pair.score)?;
    }
    Ok(())
}

fn name_at<'a>(names: &[&'a str], index: usize) -> io::Result<&'a str> {
    names.get(index).copied().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no document name for index {} ({} names)", index, names.len()),
        )
    })
}
