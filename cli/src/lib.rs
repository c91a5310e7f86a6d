pub mod style;

use anyhow::{bail, Context, Result};
use clap::Parser;
use docu_core::engine::DEFAULT_THRESHOLD;
use docu_core::knowledge::load_knowledge;
use docu_core::{Engine, EngineConfig, SearchResult};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub use style::Style;

const RULE_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "docu-mind")]
#[command(about = "Ask a question to the knowledge base", long_about = None)]
pub struct Args {
    /// The question/query to search for; prompted for when omitted
    pub query: Option<String>,
    /// Knowledge file, one fact per line
    #[arg(long, env = "DOCU_MIND_KNOWLEDGE", default_value = "knowledge.txt")]
    pub knowledge: PathBuf,
    /// A fact is an answer only when its score is strictly above this
    #[arg(long, env = "DOCU_MIND_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// How many facts to show
    #[arg(long, default_value_t = 1)]
    pub top: usize,
    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Print the vocabulary, weights and similarities as JSON
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    pub explain: bool,
    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchResult>,
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn print_banner<W: Write>(out: &mut W, style: Style) -> Result<()> {
    writeln!(out, "{}", style.banner(&rule()))?;
    writeln!(out, "{}", style.banner("   DOCU-MIND: Simple RAG System"))?;
    writeln!(out, "{}", style.banner(&rule()))?;
    Ok(())
}

/// Human-readable result section for one query.
pub fn print_results<W: Write>(
    out: &mut W,
    style: Style,
    query: &str,
    results: &[SearchResult],
    top: usize,
) -> Result<()> {
    writeln!(out, "\nSearching for: \"{query}\"...")?;
    if top > 1 {
        writeln!(out, "\n--- Results ---")?;
        for (rank, hit) in results.iter().enumerate() {
            let score = style.score(&format!("{:.4}", hit.score));
            writeln!(out, "{}. [{score}] {}", rank + 1, style.answer(&hit.content))?;
        }
    } else {
        writeln!(out, "\n--- Result ---")?;
        if let Some(hit) = results.first() {
            writeln!(out, "Match Score: {}", style.score(&format!("{:.4}", hit.score)))?;
            writeln!(out, "Answer: {}", style.answer(&hit.content))?;
        }
    }
    if results.is_empty() {
        writeln!(out, "{}", style.warn("No relevant information found in the knowledge base."))?;
    }
    writeln!(out, "{}", style.banner(&rule()))?;
    Ok(())
}

/// Prompt on `out` and read one line. `None` on end of input.
fn prompt_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    write!(out, "Enter your query: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read query")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn run<R: BufRead, W: Write>(
    args: &Args,
    style: Style,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let human = !args.json && !args.explain;
    if human {
        print_banner(out, style)?;
    }

    let facts = load_knowledge(&args.knowledge)?;
    let num_facts = facts.len();
    let config = EngineConfig::with_threshold(args.threshold);
    let engine = Engine::with_config(facts, config)
        .with_context(|| format!("no usable knowledge in '{}'", args.knowledge.display()))?;
    if human {
        writeln!(out, "[INFO] Loaded {num_facts} facts from {}.\n", args.knowledge.display())?;
    }

    let query = match &args.query {
        Some(q) => q.clone(),
        None => match prompt_query(&mut input, out)? {
            Some(q) => q,
            None => return Ok(()),
        },
    };
    if query.trim().is_empty() {
        if human {
            writeln!(out, "{}", style.error("Error: Empty query."))?;
            return Ok(());
        }
        bail!("empty query");
    }

    if args.explain {
        let Some(analysis) = engine.analyze(&query) else {
            bail!("no searchable terms in the knowledge base or the query");
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
        return Ok(());
    }

    let top = args.top.max(1);
    let start = std::time::Instant::now();
    let results: Vec<SearchResult> = if top == 1 {
        engine.search(&query).into_iter().collect()
    } else {
        engine.rank(&query, top)
    };
    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(hits = results.len(), took_s, "search complete");

    if args.json {
        let response = SearchResponse { query, took_s, total_hits: results.len(), results };
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    } else {
        print_results(out, style, &query, &results, top)?;
    }
    Ok(())
}
