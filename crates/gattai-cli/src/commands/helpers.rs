use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use miette::{miette, IntoDiagnostic};
use serde_json::Value;

use gattai_engine::decompose::DecomposePolicy;
use gattai_ids::{load_word_source, target_characters, WordEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

pub(crate) fn parse_output_format(s: &str) -> miette::Result<OutputFormat> {
    match s {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(miette!("unknown output format `{other}`, expected text | json")),
    }
}

pub(crate) fn parse_policy(s: &str) -> miette::Result<DecomposePolicy> {
    match s {
        "expand" => Ok(DecomposePolicy::ExpandKnown),
        "leaves" => Ok(DecomposePolicy::KeepKnownLeaves),
        other => Err(miette!(
            "unknown decomposition policy `{other}`, expected expand | leaves"
        )),
    }
}

/// Load and concatenate word-source files; duplicate words keep the first
/// occurrence across files, matching generation order.
pub(crate) fn load_words(paths: &[PathBuf]) -> miette::Result<Vec<WordEntry>> {
    let mut entries: Vec<WordEntry> = Vec::new();
    for path in paths {
        for entry in load_word_source(path)? {
            if !entries.iter().any(|e| e.word == entry.word) {
                entries.push(entry);
            }
        }
    }
    Ok(entries)
}

pub(crate) fn word_targets(entries: &[WordEntry]) -> BTreeSet<char> {
    target_characters(entries)
}

pub(crate) fn write_json_artifact(path: &PathBuf, value: &Value) -> miette::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    fs::write(path, serde_json::to_string_pretty(value).into_diagnostic()?).into_diagnostic()?;
    Ok(())
}
