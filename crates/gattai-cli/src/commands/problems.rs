// Command handler for: Problems
//
// Turns word-source files into the game's problem database, scoring each
// word with the linear difficulty heuristic over the dictionary.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing::info;

use gattai_engine::difficulty::build_problems;
use gattai_ids::load_dictionary;

use super::helpers::{load_words, write_json_artifact};

pub(crate) fn run_problems(
    dict_path: PathBuf,
    words: Vec<PathBuf>,
    out: PathBuf,
) -> miette::Result<()> {
    let dictionary = load_dictionary(&dict_path)?;
    let entries = load_words(&words)?;
    let problems = build_problems(&dictionary, &entries);

    let value = serde_json::to_value(&problems).into_diagnostic()?;
    write_json_artifact(&out, &value)?;
    info!(path = %out.display(), problems = problems.len(), "problem database written");
    println!("{} problems written to {}", problems.len(), out.display());
    Ok(())
}
