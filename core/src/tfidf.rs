use crate::vocabulary::Vocabulary;
use crate::TermId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sparse weighted vector: `(term id, weight)` pairs sorted by term id, zero weights omitted.
/// Vectors produced by [`TfIdf::fit`] have unit Euclidean norm, or no entries at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SparseVector {
    entries: Vec<(TermId, f64)>,
}

impl SparseVector {
    /// Scale raw weights to unit length. An all-zero input stays the zero vector.
    pub fn normalized(entries: Vec<(TermId, f64)>) -> Self {
        let mut entries: Vec<(TermId, f64)> =
            entries.into_iter().filter(|(_, w)| *w != 0.0).collect();
        entries.sort_by_key(|(tid, _)| *tid);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        for (_, w) in entries.iter_mut() {
            *w /= norm;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(TermId, f64)] {
        &self.entries
    }

    pub fn weight(&self, id: TermId) -> f64 {
        self.entries
            .binary_search_by_key(&id, |(tid, _)| *tid)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Smoothed IDF over a bag of `n` texts: `ln((1 + n) / (1 + df)) + 1`.
/// Always positive, even for a term present in every text.
pub fn smoothed_idf(n: usize, df: u32) -> f64 {
    ((1.0 + n as f64) / (1.0 + df as f64)).ln() + 1.0
}

/// Term statistics and one weighted vector per text, for a single bag of texts.
#[derive(Debug, Clone)]
pub struct TfIdf {
    df: Vec<u32>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfIdf {
    /// Weight every text of the bag. Term frequency is the raw count; the
    /// `tf * idf` vector of each text is then L2-normalized. Output order
    /// matches `tokenized`.
    pub fn fit<S: AsRef<str>>(vocabulary: &Vocabulary, tokenized: &[Vec<S>]) -> Self {
        let mut df = vec![0u32; vocabulary.len()];
        let mut counts: Vec<BTreeMap<TermId, u32>> = Vec::with_capacity(tokenized.len());
        for tokens in tokenized {
            let mut tf_counts: BTreeMap<TermId, u32> = BTreeMap::new();
            for term in tokens {
                if let Some(tid) = vocabulary.id(term.as_ref()) {
                    *tf_counts.entry(tid).or_insert(0) += 1;
                }
            }
            for tid in tf_counts.keys() {
                df[*tid as usize] += 1;
            }
            counts.push(tf_counts);
        }

        let n = tokenized.len();
        let idf: Vec<f64> = df.iter().map(|&df_t| smoothed_idf(n, df_t)).collect();

        let vectors = counts
            .into_iter()
            .map(|tf_counts| {
                let raw = tf_counts
                    .into_iter()
                    .map(|(tid, tf)| (tid, tf as f64 * idf[tid as usize]))
                    .collect();
                SparseVector::normalized(raw)
            })
            .collect();

        Self { df, idf, vectors }
    }

    /// Number of texts containing each term, indexed by term id.
    pub fn df(&self) -> &[u32] {
        &self.df
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }
}
