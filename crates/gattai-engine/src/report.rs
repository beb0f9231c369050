use std::fmt::Write as _;

use serde::Serialize;
use sha2::{Digest, Sha256};

use gattai_dict::Dictionary;

use crate::reachability::{Cause, ReachabilityReport};

/// Schema version for the JSON validation report.
pub const VALIDATION_SCHEMA_VERSION: u32 = 1;

/// The full validation report artifact: reachability verdicts tied to the
/// exact dictionary revision they were computed from.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub schema_version: u32,
    /// sha256 over the serialized dictionary, so a report can be matched
    /// to the dictionary file it talks about.
    pub dictionary_fingerprint: String,
    #[serde(flatten)]
    pub reachability: ReachabilityReport,
}

/// Hex sha256 of the dictionary's canonical JSON form.
pub fn dictionary_fingerprint(dictionary: &Dictionary) -> String {
    // IndexMap keeps insertion order, so the serialized form is stable.
    let json = serde_json::to_string(dictionary).unwrap_or_default();
    let digest = Sha256::digest(json.as_bytes());
    let mut hex = String::with_capacity(64);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

pub fn validation_report(
    dictionary: &Dictionary,
    reachability: ReachabilityReport,
) -> ValidationReport {
    ValidationReport {
        schema_version: VALIDATION_SCHEMA_VERSION,
        dictionary_fingerprint: dictionary_fingerprint(dictionary),
        reachability,
    }
}

/// Human-readable rendering: the unreachable list, then the ranked
/// root-cause table so the highest-impact missing definition is fixed
/// first.
pub fn render_validation_text(report: &ValidationReport) -> String {
    let reach = &report.reachability;
    let mut out = String::new();
    let _ = writeln!(out, "checked {} symbols", reach.checked);

    if reach.unreachable.is_empty() {
        let _ = writeln!(out, "all symbols are buildable from atomic parts");
        return out;
    }

    let _ = writeln!(out, "{} unreachable:", reach.unreachable.len());
    for entry in &reach.unreachable {
        match entry.cause {
            Cause::Missing(sym) => {
                let _ = writeln!(out, "  {}  missing `{sym}`", entry.symbol);
            }
            Cause::Cycle(sym) => {
                let _ = writeln!(out, "  {}  cycle at `{sym}`", entry.symbol);
            }
        }
    }

    let _ = writeln!(out, "root causes by impact:");
    for row in &reach.root_causes {
        let label = match row.cause {
            Cause::Missing(sym) => format!("`{sym}` undefined"),
            Cause::Cycle(sym) => format!("cycle at `{sym}`"),
        };
        let _ = writeln!(out, "  {:>4}  {label}", row.blocked);
    }
    out
}
