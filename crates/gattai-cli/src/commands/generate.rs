// Command handler for: Generate
//
// Loads the structural source, known-character list and config, assembles
// the dictionary and writes the JSON map artifact.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use serde_json::json;
use tracing::{info, warn};

use gattai_dict::ClosureSet;
use gattai_engine::assemble::assemble;
use gattai_ids::{load_known_characters, ConfigError, DictionaryConfig, StructuralSource};

use super::helpers::{parse_output_format, parse_policy, write_json_artifact, OutputFormat};

#[allow(clippy::too_many_arguments)]
pub(crate) fn run_generate(
    ids: PathBuf,
    known: PathBuf,
    config_path: PathBuf,
    out: PathBuf,
    policy: String,
    allow_missing_config: bool,
    format: String,
) -> miette::Result<()> {
    let output_format = parse_output_format(&format)?;
    let policy = parse_policy(&policy)?;

    let source = StructuralSource::load(&ids)?;
    let known_chars = load_known_characters(&known)?;
    let config = match DictionaryConfig::load(&config_path) {
        Ok(config) => config,
        Err(ConfigError::NotFound { path }) if allow_missing_config => {
            warn!(path = %path.display(), "config missing, using built-in minimal atomic set");
            DictionaryConfig::minimal()
        }
        Err(err) => return Err(err.into()),
    };

    let closure = ClosureSet::new(config.atomic_parts.iter().copied(), known_chars);
    let result = assemble(&source, &closure, &config, policy);

    let dict_value = serde_json::to_value(&result.dictionary).into_diagnostic()?;
    write_json_artifact(&out, &dict_value)?;
    info!(path = %out.display(), entries = result.dictionary.len(), "dictionary written");

    let stats = &result.stats;
    match output_format {
        OutputFormat::Text => {
            println!("Dictionary written to {}", out.display());
            println!(
                "  {} manual, {} generated, {} intermediates",
                stats.manual, stats.generated, stats.intermediates
            );
            if !stats.skipped.is_empty() {
                println!(
                    "  {} closure members skipped (run `gattai validate` for root causes)",
                    stats.skipped.len()
                );
            }
            if !stats.skipped_overrides.is_empty() {
                println!(
                    "  {} oversized overrides not merged (run `gattai check`)",
                    stats.skipped_overrides.len()
                );
            }
        }
        OutputFormat::Json => {
            let payload = json!({
                "out": out.display().to_string(),
                "entries": result.dictionary.len(),
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
        }
    }
    Ok(())
}
