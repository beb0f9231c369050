use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Reserved first character of synthetic intermediate identifiers.
///
/// `&` does not occur in any natural character set the dictionary covers,
/// so synthetic ids can never collide with real characters.
pub const SYNTHETIC_MARKER: char = '&';

/// A node in the composition graph: either a real character or a synthetic
/// intermediate part minted while binarizing a multi-part decomposition.
///
/// Synthetic ids are namespaced by the character that owns them plus a
/// zero-based step counter, so they are globally unique within one
/// generation run and their provenance stays human-traceable. The textual
/// form is `&<owner>_<step>`, e.g. `&想_0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Real(char),
    Synthetic { owner: char, step: u32 },
}

impl Symbol {
    pub fn real(c: char) -> Self {
        Symbol::Real(c)
    }

    /// The real character this symbol ultimately belongs to.
    pub fn owner(&self) -> char {
        match *self {
            Symbol::Real(c) => c,
            Symbol::Synthetic { owner, .. } => owner,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Symbol::Synthetic { .. })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Real(c) => write!(f, "{c}"),
            Symbol::Synthetic { owner, step } => write!(f, "{SYNTHETIC_MARKER}{owner}_{step}"),
        }
    }
}

/// Error parsing a symbol from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolParseError {
    #[error("empty symbol")]
    Empty,
    #[error("symbol `{0}` must be a single character")]
    MultiChar(String),
    #[error("malformed synthetic id `{0}`, expected `&<owner>_<step>`")]
    MalformedSynthetic(String),
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(SymbolParseError::Empty)?;

        if first != SYNTHETIC_MARKER {
            if chars.next().is_some() {
                return Err(SymbolParseError::MultiChar(s.to_string()));
            }
            return Ok(Symbol::Real(first));
        }

        let malformed = || SymbolParseError::MalformedSynthetic(s.to_string());
        let owner = chars.next().ok_or_else(malformed)?;
        let step = chars
            .as_str()
            .strip_prefix('_')
            .ok_or_else(malformed)?
            .parse::<u32>()
            .map_err(|_| malformed())?;
        Ok(Symbol::Synthetic { owner, step })
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_symbol_round_trips() {
        let sym: Symbol = "明".parse().unwrap();
        assert_eq!(sym, Symbol::Real('明'));
        assert_eq!(sym.to_string(), "明");
    }

    #[test]
    fn synthetic_symbol_round_trips() {
        let sym: Symbol = "&想_0".parse().unwrap();
        assert_eq!(
            sym,
            Symbol::Synthetic {
                owner: '想',
                step: 0
            }
        );
        assert_eq!(sym.to_string(), "&想_0");
        assert!(sym.is_synthetic());
        assert_eq!(sym.owner(), '想');
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Symbol>(), Err(SymbolParseError::Empty));
        assert!(matches!(
            "日月".parse::<Symbol>(),
            Err(SymbolParseError::MultiChar(_))
        ));
        for bad in ["&", "&想", "&想_", "&想_x", "&_0"] {
            assert!(
                matches!(
                    bad.parse::<Symbol>(),
                    Err(SymbolParseError::MalformedSynthetic(_))
                ),
                "`{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn serde_uses_textual_form() {
        let sym = Symbol::Synthetic {
            owner: '想',
            step: 1,
        };
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"&想_1\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sym);
    }
}
