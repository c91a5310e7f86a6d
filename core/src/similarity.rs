use crate::tfidf::SparseVector;
use std::cmp::Ordering;

/// Cosine similarity of two unit-or-zero vectors, i.e. their dot product.
/// Zero when either side is the zero vector; clamped to `[0, 1]`.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let (a, b) = (a.entries(), b.entries());
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0f64;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot.clamp(0.0, 1.0)
}

/// Similarity of the query against every document, in document order.
pub fn scores(query: &SparseVector, documents: &[SparseVector]) -> Vec<f64> {
    documents.iter().map(|doc| cosine(query, doc)).collect()
}

/// Index and score of the most similar document. Ties keep the lowest index.
/// `None` only when there are no documents.
pub fn best_match(query: &SparseVector, documents: &[SparseVector]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, doc) in documents.iter().enumerate() {
        let score = cosine(query, doc);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}
