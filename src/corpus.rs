use crate::document::{Document, NormalizedFrequencies};
use crate::ranking::{sort_scores, SimilarityScore};
use crate::similarity::compute_similarity;
use log::{debug, info};
use rayon::prelude::*;
use std::path::Path;

/// Fixed, ordered set of documents. A document's position is its identity in
/// every score produced from the corpus.
pub struct Corpus {
    documents: Vec<Document>,
    frequencies: Vec<NormalizedFrequencies>,
}
impl Corpus {
    /// Loads every path in order. Unreadable files become empty documents.
    pub fn load<P: AsRef<Path> + Sync>(paths: &[P]) -> Self {
        info!("reading {} documents", paths.len());
        let documents: Vec<Document> = paths
            .par_iter()
            .map(|path| Document::load(path.as_ref()))
            .collect();
        Corpus::from_documents(documents)
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        let frequencies = documents
            .par_iter()
            .map(Document::normalized_frequencies)
            .collect();
        Corpus {
            documents,
            frequencies,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn names(&self) -> Vec<&str> {
        self.documents.iter().map(Document::filename).collect()
    }

    /// One score per unordered pair of distinct documents, in index order.
    pub fn pair_scores(&self) -> Vec<SimilarityScore> {
        let n = self.documents.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        debug!("scoring {} pairs", pairs.len());
        pairs
            .into_par_iter()
            .map(|(i, j)| {
                let score = compute_similarity(&self.frequencies[i], &self.frequencies[j]);
                SimilarityScore::new(score, i, j)
            })
            .collect()
    }

    /// Pair scores, highest first.
    pub fn ranked_pairs(&self) -> Vec<SimilarityScore> {
        let mut scores = self.pair_scores();
        sort_scores(&mut scores);
        scores
    }
}
