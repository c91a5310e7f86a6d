use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Maximal runs of two or more letters, numbers or underscores.
    // Combining marks split a run.
    static ref RE: Regex = Regex::new(r"[\p{L}\p{N}_]{2,}").expect("valid regex");
}

/// Tokenize text into lower-cased terms. Single-character words are dropped;
/// no stemming and no stop-word removal.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase();
    RE.find_iter(&normalized)
        .map(|mat| mat.as_str().to_string())
        .collect()
}
