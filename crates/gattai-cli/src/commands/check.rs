// Command handler for: Check
//
// Dictionary/config lints: oversized manual overrides, atomic parts that
// appear as dictionary keys, and word-list targets with no definition.

use std::path::PathBuf;

use miette::IntoDiagnostic;

use gattai_engine::lints::lint_dictionary;
use gattai_ids::{load_dictionary, DictionaryConfig};

use super::helpers::{load_words, parse_output_format, word_targets, OutputFormat};

pub(crate) struct CheckOutcome {
    pub(crate) clean: bool,
}

pub(crate) fn run_check(
    dict_path: PathBuf,
    config_path: PathBuf,
    words: Vec<PathBuf>,
    format: String,
) -> miette::Result<CheckOutcome> {
    let output_format = parse_output_format(&format)?;

    let dictionary = load_dictionary(&dict_path)?;
    let config = DictionaryConfig::load(&config_path)?;
    let targets = word_targets(&load_words(&words)?);

    let report = lint_dictionary(&dictionary, &config, &targets);

    match output_format {
        OutputFormat::Text => {
            if report.is_clean() {
                println!("no findings");
            } else {
                for finding in &report.findings {
                    println!("{}  {}", finding.code, finding.message);
                }
                println!("{} findings", report.findings.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?)
        }
    }
    Ok(CheckOutcome {
        clean: report.is_clean(),
    })
}
