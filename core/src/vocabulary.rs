use crate::tokenizer::tokenize;
use crate::TermId;
use std::collections::{BTreeSet, HashMap};

/// Term -> column id mapping for one bag of texts.
///
/// Ids are dense (`0..len`) and assigned in ascending lexicographic order of the
/// terms, so the same bag always yields the same ids. A different bag (another
/// query) may shift every id.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build from already tokenized texts. Returns `None` when no text has a single term.
    pub fn build<S: AsRef<str>>(tokenized: &[Vec<S>]) -> Option<Self> {
        let distinct: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(|t| t.as_ref()))
            .collect();
        if distinct.is_empty() {
            return None;
        }
        let terms: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        let dictionary = terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id as TermId))
            .collect();
        Some(Self { dictionary, terms })
    }

    /// Tokenize and build in one step.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Option<Self> {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t.as_ref())).collect();
        Self::build(&tokenized)
    }

    pub fn id(&self, term: &str) -> Option<TermId> {
        self.dictionary.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    /// Terms in id order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
