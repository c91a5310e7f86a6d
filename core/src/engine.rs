use crate::error::{EngineError, Result};
use crate::similarity;
use crate::tfidf::{SparseVector, TfIdf};
use crate::tokenizer::tokenize;
use crate::vocabulary::Vocabulary;
use crate::DocId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Relevance cutoff used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// A best match counts only when its score is strictly greater than this.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

impl EngineConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Any overlap at all is a match (cutoff 0).
    pub fn permissive() -> Self {
        Self { threshold: 0.0 }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..1.0).contains(&self.threshold) {
            return Err(EngineError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    pub fn accepts(&self, score: f64) -> bool {
        score > self.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub index: DocId,
    pub score: f64,
    pub content: String,
}

/// One vocabulary term with its corpus statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermInfo {
    pub term: String,
    pub df: u32,
    pub idf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weight {
    pub term: String,
    pub weight: f64,
}

/// Diagnostic dump of one fit: vocabulary in id order, the query vector,
/// every document vector and every document's similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub query: String,
    pub terms: Vec<TermInfo>,
    pub query_vector: Vec<Weight>,
    pub document_vectors: Vec<Vec<Weight>>,
    pub similarities: Vec<f64>,
}

/// Vocabulary and weights over `documents + [query]`, query last.
struct Fit {
    vocabulary: Vocabulary,
    tfidf: TfIdf,
}

impl Fit {
    fn split(&self) -> Option<(&SparseVector, &[SparseVector])> {
        self.tfidf.vectors().split_last()
    }

    fn weights(&self, vector: &SparseVector) -> Vec<Weight> {
        vector
            .entries()
            .iter()
            .map(|&(tid, weight)| Weight {
                term: self.vocabulary.term(tid).unwrap_or_default().to_string(),
                weight,
            })
            .collect()
    }
}

/// Retrieval engine over a fixed, ordered corpus.
///
/// Holds no state besides the corpus and its config, so a shared `&Engine`
/// can serve searches from several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    documents: Vec<String>,
    config: EngineConfig,
}

impl Engine {
    pub fn new<I, S>(corpus: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(corpus, EngineConfig::default())
    }

    /// Fails on an empty corpus, a blank document, or an out-of-range threshold.
    pub fn with_config<I, S>(corpus: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let documents: Vec<String> = corpus.into_iter().map(Into::into).collect();
        if documents.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }
        if let Some(index) = documents.iter().position(|d| d.trim().is_empty()) {
            return Err(EngineError::BlankDocument { index });
        }
        Ok(Self { documents, config })
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best matching document, or `None` when nothing is relevant enough.
    pub fn search(&self, query: &str) -> Option<SearchResult> {
        let fit = self.fit(query)?;
        let (query_vec, doc_vecs) = fit.split()?;
        let (index, score) = similarity::best_match(query_vec, doc_vecs)?;
        if !self.config.accepts(score) {
            debug!(
                index,
                score,
                threshold = self.config.threshold,
                "best match below relevance threshold"
            );
            return None;
        }
        debug!(index, score, "best match");
        Some(self.result(index, score))
    }

    /// Up to `k` matches above the threshold, best first; equal scores keep corpus order.
    pub fn rank(&self, query: &str, k: usize) -> Vec<SearchResult> {
        if k == 0 {
            return Vec::new();
        }
        let Some(fit) = self.fit(query) else {
            return Vec::new();
        };
        let Some((query_vec, doc_vecs)) = fit.split() else {
            return Vec::new();
        };
        let mut scored: Vec<(DocId, f64)> = similarity::scores(query_vec, doc_vecs)
            .into_iter()
            .enumerate()
            .filter(|(_, score)| self.config.accepts(*score))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);
        scored
            .into_iter()
            .map(|(index, score)| self.result(index, score))
            .collect()
    }

    /// Full vector dump for `query`. `None` when the bag has no terms.
    pub fn analyze(&self, query: &str) -> Option<Analysis> {
        let fit = self.fit(query)?;
        let (query_vec, doc_vecs) = fit.split()?;
        let terms = fit
            .vocabulary
            .terms()
            .iter()
            .zip(fit.tfidf.df().iter().zip(fit.tfidf.idf()))
            .map(|(term, (&df, &idf))| TermInfo { term: term.clone(), df, idf })
            .collect();
        Some(Analysis {
            query: query.to_string(),
            terms,
            query_vector: fit.weights(query_vec),
            document_vectors: doc_vecs.iter().map(|v| fit.weights(v)).collect(),
            similarities: similarity::scores(query_vec, doc_vecs),
        })
    }

    fn fit(&self, query: &str) -> Option<Fit> {
        if self.documents.is_empty() {
            debug!("empty corpus, nothing to search");
            return None;
        }
        let tokenized: Vec<Vec<String>> = self
            .documents
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(query))
            .map(tokenize)
            .collect();
        let Some(vocabulary) = Vocabulary::build(&tokenized) else {
            debug!("empty vocabulary, no match");
            return None;
        };
        let tfidf = TfIdf::fit(&vocabulary, &tokenized);
        debug!(terms = vocabulary.len(), texts = tokenized.len(), "fitted tf-idf");
        Some(Fit { vocabulary, tfidf })
    }

    fn result(&self, index: DocId, score: f64) -> SearchResult {
        SearchResult { index, score, content: self.documents[index].clone() }
    }
}
