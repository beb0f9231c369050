use std::collections::BTreeSet;

use serde::Serialize;

use gattai_dict::{Dictionary, Symbol};
use gattai_ids::DictionaryConfig;

/// Schema version for the JSON check report.
pub const CHECK_SCHEMA_VERSION: u32 = 1;

/// A single lint finding.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LintFinding {
    pub code: &'static str,
    pub symbol: Symbol,
    pub message: String,
}

/// Report of all lint findings for one dictionary/config/target set.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub schema_version: u32,
    pub findings: Vec<LintFinding>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Run the dictionary lints: manual overrides that still need
/// pre-synthesis, atomic parts that leaked in as dictionary keys, and
/// word-list targets with no definition at all.
pub fn lint_dictionary(
    dictionary: &Dictionary,
    config: &DictionaryConfig,
    targets: &BTreeSet<char>,
) -> CheckReport {
    let mut findings = Vec::new();

    for (&key, parts) in &config.manual_overrides {
        if parts.len() > 2 {
            findings.push(LintFinding {
                code: "gattai::check::oversized_override",
                symbol: key,
                message: format!(
                    "manual override `{key}` has {} parts; split it into binary merge steps",
                    parts.len()
                ),
            });
        }
    }

    for symbol in dictionary.keys() {
        if let Symbol::Real(c) = symbol {
            if config.atomic_parts.contains(&c) {
                findings.push(LintFinding {
                    code: "gattai::check::atomic_key",
                    symbol,
                    message: format!("atomic part `{symbol}` must not have a recipe"),
                });
            }
        }
    }

    for &c in targets {
        let symbol = Symbol::Real(c);
        if !config.atomic_parts.contains(&c) && !dictionary.contains_key(symbol) {
            findings.push(LintFinding {
                code: "gattai::check::missing_definition",
                symbol,
                message: format!(
                    "target `{symbol}` is neither atomic nor defined; add a manual override"
                ),
            });
        }
    }

    CheckReport {
        schema_version: CHECK_SCHEMA_VERSION,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gattai_dict::Recipe;
    use indexmap::IndexMap;

    fn real(c: char) -> Symbol {
        Symbol::Real(c)
    }

    #[test]
    fn flags_oversized_overrides() {
        let mut overrides = IndexMap::new();
        overrides.insert(real('謎'), vec![real('言'), real('迷'), real('心')]);
        let config = DictionaryConfig {
            atomic_parts: BTreeSet::new(),
            manual_overrides: overrides,
        };
        let report = lint_dictionary(&Dictionary::new(), &config, &BTreeSet::new());
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].code, "gattai::check::oversized_override");
    }

    #[test]
    fn flags_atomic_keys_and_missing_definitions() {
        let mut dict = Dictionary::new();
        dict.insert_generated(real('日'), Recipe::new(real('口'), real('一')));
        let config = DictionaryConfig {
            atomic_parts: ['日'].into_iter().collect(),
            manual_overrides: IndexMap::new(),
        };
        let targets: BTreeSet<char> = ['謎'].into_iter().collect();
        let report = lint_dictionary(&dict, &config, &targets);

        let codes: Vec<&str> = report.findings.iter().map(|f| f.code).collect();
        assert_eq!(
            codes,
            vec![
                "gattai::check::atomic_key",
                "gattai::check::missing_definition"
            ]
        );
    }

    #[test]
    fn clean_setup_has_no_findings() {
        let mut dict = Dictionary::new();
        dict.insert_generated(real('明'), Recipe::new(real('日'), real('月')));
        let config = DictionaryConfig {
            atomic_parts: ['日', '月'].into_iter().collect(),
            manual_overrides: IndexMap::new(),
        };
        let targets: BTreeSet<char> = ['明', '日'].into_iter().collect();
        let report = lint_dictionary(&dict, &config, &targets);
        assert!(report.is_clean());
    }
}
