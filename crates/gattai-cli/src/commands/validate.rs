// Command handler for: Validate
//
// Pure analysis pass over a generated dictionary: reachability verdicts
// per target, root causes ranked by impact, optional JSON report artifact.
// Exits non-zero while any target stays unreachable.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing::info;

use gattai_engine::reachability::validate_reachability;
use gattai_engine::report::{render_validation_text, validation_report};
use gattai_ids::{load_dictionary, DictionaryConfig};

use super::helpers::{
    load_words, parse_output_format, word_targets, write_json_artifact, OutputFormat,
};

pub(crate) struct ValidateOutcome {
    pub(crate) all_reachable: bool,
}

pub(crate) fn run_validate(
    dict_path: PathBuf,
    config_path: PathBuf,
    words: Vec<PathBuf>,
    out: Option<PathBuf>,
    format: String,
) -> miette::Result<ValidateOutcome> {
    let output_format = parse_output_format(&format)?;

    let dictionary = load_dictionary(&dict_path)?;
    let config = DictionaryConfig::load(&config_path)?;
    let targets = word_targets(&load_words(&words)?);

    let reachability = validate_reachability(&dictionary, &config.atomic_parts, &targets);
    info!(
        checked = reachability.checked,
        unreachable = reachability.unreachable.len(),
        "validation finished"
    );

    let all_reachable = reachability.all_reachable();
    let report = validation_report(&dictionary, reachability);

    if let Some(out) = &out {
        let value = serde_json::to_value(&report).into_diagnostic()?;
        write_json_artifact(out, &value)?;
    }

    match output_format {
        OutputFormat::Text => print!("{}", render_validation_text(&report)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?)
        }
    }
    Ok(ValidateOutcome { all_reachable })
}
