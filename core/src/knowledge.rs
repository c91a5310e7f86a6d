use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read facts from any line-oriented reader: one fact per line, trimmed,
/// blank lines skipped, order preserved.
pub fn parse_knowledge<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut facts = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", lineno + 1))?;
        let fact = line.trim();
        if fact.is_empty() {
            continue;
        }
        facts.push(fact.to_string());
    }
    Ok(facts)
}

/// Load a knowledge file. The result may be empty; the engine rejects that at construction.
pub fn load_knowledge<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let f = File::open(path)
        .with_context(|| format!("cannot open knowledge file '{}'", path.display()))?;
    let facts = parse_knowledge(BufReader::new(f))
        .with_context(|| format!("cannot read knowledge file '{}'", path.display()))?;
    tracing::info!(facts = facts.len(), path = %path.display(), "loaded knowledge");
    Ok(facts)
}
