use std::collections::HashMap;

use crate::text::{term_frequencies, TermFrequencies};

/// Tokenized corpus with document frequencies
#[derive(Debug, Default)]
pub struct Corpus {
    pub(super) docs: Vec<(String, TermFrequencies)>,
    pub(super) positions: HashMap<String, usize>,
    pub(super) term_df: HashMap<String, usize>,
    pub(super) total_docs: usize,
}

impl Corpus {
    /// Tokenize every `(id, content)` pair. A repeated id keeps its last content.
    pub fn build<'a>(docs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut corpus = Corpus::default();

        for (id, content) in docs {
            let terms = term_frequencies(content);
            match corpus.positions.get(id) {
                Some(&pos) => corpus.docs[pos].1 = terms,
                None => {
                    corpus.positions.insert(id.to_string(), corpus.docs.len());
                    corpus.docs.push((id.to_string(), terms));
                }
            }
        }

        for (_, terms) in &corpus.docs {
            for term in terms.keys() {
                *corpus.term_df.entry(term.clone()).or_insert(0) += 1;
            }
        }
        corpus.total_docs = corpus.docs.len().max(1);
        corpus
    }

    pub fn terms(&self, id: &str) -> Option<&TermFrequencies> {
        self.positions.get(id).map(|&pos| &self.docs[pos].1)
    }

    /// Smoothed inverse document frequency: `ln((N + 1) / (df + 1)) + 1`
    pub fn idf(&self, term: &str) -> f64 {
        let total_docs = self.total_docs as f64;
        let df = *self.term_df.get(term).unwrap_or(&0) as f64;
        ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0
    }
}

/// Sum of `tf * idf` over the source's terms
pub fn source_norm(corpus: &Corpus, source: &TermFrequencies) -> f64 {
    source
        .iter()
        .map(|(term, &tf)| tf as f64 * corpus.idf(term))
        .sum()
}

/// Overlap score of `candidate` against `source`, normalized by the source.
///
/// Returns `None` when the two share no terms.
pub fn overlap_score(
    corpus: &Corpus,
    source: &TermFrequencies,
    candidate: &TermFrequencies,
    norm: f64,
) -> Option<f64> {
    let mut overlap = 0.0;
    let mut shared = false;

    for (term, &source_tf) in source {
        if let Some(&candidate_tf) = candidate.get(term) {
            shared = true;
            overlap += corpus.idf(term) * source_tf.min(candidate_tf) as f64;
        }
    }

    if !shared || norm == 0.0 {
        return None;
    }
    Some(overlap / norm)
}
