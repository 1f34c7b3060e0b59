use crate::lexer::count_tokens;
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Width passed to the HTML renderer for epub chapters. Line wrapping does
/// not matter here since the text is split on whitespace afterwards.
const EPUB_TEXT_WIDTH: usize = 120;

/// Token and relative frequency, highest frequency first.
pub type NormalizedFrequencies = Vec<(String, f64)>;

#[derive(Debug, Clone)]
pub struct Document {
    filename: String,
    word_counts: HashMap<String, usize>,
}
impl Document {
    pub fn from_text(filename: &str, text: &str) -> Self {
        Document {
            filename: filename.to_string(),
            word_counts: count_tokens(text),
        }
    }

    /// A document with no tokens, standing in for one that could not be read.
    pub fn empty(filename: &str) -> Self {
        Document {
            filename: filename.to_string(),
            word_counts: HashMap::new(),
        }
    }

    /// Reads and tokenizes the file at `path`. A file that cannot be read
    /// produces an empty document; the failure is only logged.
    pub fn load(path: &Path) -> Self {
        let filename = path.to_string_lossy().into_owned();
        match read_contents(path) {
            Ok(text) => {
                let document = Document::from_text(&filename, &text);
                debug!(
                    "read {}: {} tokens, {} distinct",
                    filename,
                    document.total_tokens(),
                    document.distinct_tokens()
                );
                document
            }
            Err(e) => {
                warn!("could not read {}, treating it as empty: {}", filename, e);
                Document::empty(&filename)
            }
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn word_counts(&self) -> &HashMap<String, usize> {
        &self.word_counts
    }

    pub fn total_tokens(&self) -> usize {
        self.word_counts.values().sum()
    }

    pub fn distinct_tokens(&self) -> usize {
        self.word_counts.len()
    }

    /// Each token's count divided by the document's total count, sorted by
    /// frequency descending and then by token. Empty when the document has
    /// no tokens.
    pub fn normalized_frequencies(&self) -> NormalizedFrequencies {
        let total = self.total_tokens();
        if total == 0 {
            return Vec::new();
        }
        let total = total as f64;
        let mut frequencies: NormalizedFrequencies = self
            .word_counts
            .iter()
            .map(|(token, &count)| (token.clone(), count as f64 / total))
            .collect();
        frequencies.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            ordering => ordering,
        });
        frequencies
    }
}

/// Plain text of the file at `path`, extracted according to its extension.
/// Anything that is not a pdf or epub is read as (lossy) UTF-8 text.
pub fn read_contents(path: &Path) -> Result<String, io::Error> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => read_pdf(path),
        "epub" => read_epub(path),
        _ => read_txt(path),
    }
}
fn read_pdf(path: &Path) -> Result<String, io::Error> {
    pdf_extract::extract_text(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
fn read_epub(path: &Path) -> Result<String, io::Error> {
    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut content = String::new();
    loop {
        if let Some((chapter, _)) = doc.get_current_str() {
            content.push_str(&html2text::from_read(chapter.as_bytes(), EPUB_TEXT_WIDTH));
            content.push('\n');
        }
        if !doc.go_next() {
            break;
        }
    }
    Ok(content)
}
fn read_txt(path: &Path) -> Result<String, io::Error> {
    let raw_contents = fs::read(path)?;
    Ok(String::from_utf8_lossy(&raw_contents).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text_counts() {
        let doc = Document::from_text("doc1", "The cat sat");
        assert_eq!(doc.filename(), "doc1");
        assert_eq!(doc.total_tokens(), 2);
        assert_eq!(doc.word_counts().get("CAT"), Some(&1));
        assert_eq!(doc.word_counts().get("SAT"), Some(&1));
        assert_eq!(doc.word_counts().get("THE"), None);
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        let doc = Document::from_text(
            "doc",
            "It was the best of times, it was the worst of times; it was the age of wisdom.",
        );
        let sum: f64 = doc.normalized_frequencies().iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9, "frequencies should sum to 1.0, got {sum}");
    }

    #[test]
    fn test_frequencies_sorted_descending_then_by_token() {
        let doc = Document::from_text("doc", "pear apple pear fig apple pear banana");
        let frequencies = doc.normalized_frequencies();
        let tokens: Vec<&str> = frequencies.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["PEAR", "APPLE", "BANANA", "FIG"]);
        assert!((frequencies[0].1 - 3.0 / 7.0).abs() < 1e-12);
        assert!((frequencies[1].1 - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_tokens_gives_empty_frequencies() {
        let doc = Document::from_text("doc", "the a an of in and --");
        assert_eq!(doc.total_tokens(), 0);
        assert!(doc.normalized_frequencies().is_empty());
        assert!(Document::empty("missing").normalized_frequencies().is_empty());
    }

    #[test]
    fn test_load_txt_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "A cat ran.\nThe cat\tsat!").unwrap();
        let doc = Document::load(file.path());
        assert_eq!(doc.filename(), file.path().to_string_lossy());
        assert_eq!(doc.word_counts().get("CAT"), Some(&2));
        assert_eq!(doc.total_tokens(), 4);
    }

    #[test]
    fn test_load_invalid_utf8_is_lossy() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"caf\xe9 latte").unwrap();
        let doc = Document::load(file.path());
        assert_eq!(doc.word_counts().get("LATTE"), Some(&1));
        assert_eq!(doc.word_counts().get("CAF"), Some(&1));
    }

    #[test]
    fn test_load_broken_pdf_and_epub_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["broken.pdf", "broken.epub", "BROKEN.PDF"] {
            let path = dir.path().join(name);
            fs::write(&path, "plain words, not a container").unwrap();
            assert!(read_contents(&path).is_err(), "{name} should fail to extract");
            let doc = Document::load(&path);
            assert_eq!(doc.filename(), path.to_string_lossy());
            assert_eq!(doc.total_tokens(), 0, "{name} should load as an empty document");
            assert!(doc.normalized_frequencies().is_empty());
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does not exist.txt");
        let doc = Document::load(&path);
        assert_eq!(doc.total_tokens(), 0);
        assert!(doc.normalized_frequencies().is_empty());
        assert!(read_contents(&path).is_err());
    }
}
