//! Retrieval core: picks the single fact from a small corpus that best matches
//! a free-text query, using TF-IDF weighting and cosine similarity.
//!
//! Vocabulary and weights are rebuilt over `corpus + query` on every search.
//! That costs O(corpus size x average document length) per query, which is
//! fine at the tens-to-thousands-of-lines scale this crate targets.

pub mod engine;
pub mod error;
pub mod knowledge;
pub mod similarity;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;

pub use engine::{Analysis, Engine, EngineConfig, SearchResult, TermInfo, Weight};
pub use error::EngineError;
pub use tfidf::{SparseVector, TfIdf};
pub use vocabulary::Vocabulary;

/// Column id of a term inside one [`Vocabulary`]. Only meaningful for the fit it came from.
pub type TermId = u32;
/// Zero-based position of a document in the corpus.
pub type DocId = usize;
