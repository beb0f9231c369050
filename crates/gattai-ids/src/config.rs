use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use gattai_dict::Symbol;

use crate::errors::ConfigError;

/// On-disk shape of `dictionary_config.json`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    atomic_parts: Vec<String>,
    #[serde(default)]
    manual_overrides: IndexMap<String, Vec<String>>,
}

/// Curated dictionary configuration: the atomic-part set plus manual
/// override recipes that take precedence over anything generation produces.
///
/// Override values are kept verbatim. Arity 2 is the playable form; larger
/// overrides are accepted here so the `check` lints can point at them, but
/// assembly will not merge them.
#[derive(Debug, Clone, Default)]
pub struct DictionaryConfig {
    pub atomic_parts: BTreeSet<char>,
    pub manual_overrides: IndexMap<Symbol, Vec<Symbol>>,
}

impl DictionaryConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text, path)?;
        debug!(
            atomic = config.atomic_parts.len(),
            overrides = config.manual_overrides.len(),
            "loaded dictionary config"
        );
        Ok(config)
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut atomic_parts = BTreeSet::new();
        for part in &raw.atomic_parts {
            match part.parse::<Symbol>() {
                Ok(Symbol::Real(c)) => {
                    atomic_parts.insert(c);
                }
                Ok(Symbol::Synthetic { .. }) | Err(_) => {
                    return Err(ConfigError::BadSymbol {
                        context: "atomic_parts".to_string(),
                        value: part.clone(),
                        source: gattai_dict::SymbolParseError::MultiChar(part.clone()),
                    });
                }
            }
        }

        let mut manual_overrides = IndexMap::new();
        for (key, parts) in raw.manual_overrides {
            let key_sym = key.parse::<Symbol>().map_err(|source| ConfigError::BadSymbol {
                context: "manual_overrides key".to_string(),
                value: key.clone(),
                source,
            })?;
            if parts.len() < 2 {
                return Err(ConfigError::OverrideArity {
                    key: key.clone(),
                    arity: parts.len(),
                });
            }
            let mut part_syms = Vec::with_capacity(parts.len());
            for part in &parts {
                let sym = part.parse::<Symbol>().map_err(|source| ConfigError::BadSymbol {
                    context: format!("manual_overrides[{key}]"),
                    value: part.clone(),
                    source,
                })?;
                if sym == key_sym {
                    return Err(ConfigError::SelfReference { key: key.clone() });
                }
                part_syms.push(sym);
            }
            manual_overrides.insert(key_sym, part_syms);
        }

        Ok(DictionaryConfig {
            atomic_parts,
            manual_overrides,
        })
    }

    /// The built-in minimal atomic set, for runs without a config file.
    /// Callers opt into this explicitly; loading never falls back to it.
    pub fn minimal() -> Self {
        DictionaryConfig {
            atomic_parts: "日月木山石田土火水金力目口人女子言糸車門雨貝心手"
                .chars()
                .collect(),
            manual_overrides: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<DictionaryConfig, ConfigError> {
        DictionaryConfig::from_json(text, Path::new("test_config.json"))
    }

    #[test]
    fn parses_atomic_parts_and_overrides() {
        let config = parse(
            r#"{
                "atomic_parts": ["日", "月", "心"],
                "manual_overrides": {"想": ["相", "心"], "謎": ["言", "迷", "心"]}
            }"#,
        )
        .unwrap();
        assert!(config.atomic_parts.contains(&'日'));
        assert_eq!(
            config.manual_overrides[&Symbol::Real('想')],
            vec![Symbol::Real('相'), Symbol::Real('心')]
        );
        // Oversized overrides load fine; lints flag them later.
        assert_eq!(config.manual_overrides[&Symbol::Real('謎')].len(), 3);
    }

    #[test]
    fn rejects_multi_char_atomic_part() {
        let err = parse(r#"{"atomic_parts": ["日月"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::BadSymbol { .. }));
    }

    #[test]
    fn rejects_undersized_override() {
        let err = parse(r#"{"manual_overrides": {"明": ["日"]}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OverrideArity { arity: 1, .. }));
    }

    #[test]
    fn rejects_self_referential_override() {
        let err = parse(r#"{"manual_overrides": {"明": ["明", "月"]}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::SelfReference { .. }));
    }

    #[test]
    fn minimal_config_has_no_overrides() {
        let config = DictionaryConfig::minimal();
        assert!(config.manual_overrides.is_empty());
        assert!(config.atomic_parts.contains(&'日'));
    }
}
