use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// A strictly binary merge recipe: the two parts that combine into the
/// owning symbol. Order is kept for reproducibility of generated ids; the
/// merge mechanic itself does not care which part is left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub left: Symbol,
    pub right: Symbol,
}

impl Recipe {
    pub fn new(left: Symbol, right: Symbol) -> Self {
        Recipe { left, right }
    }

    pub fn parts(&self) -> [Symbol; 2] {
        [self.left, self.right]
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {})", self.left, self.right)
    }
}

// The on-disk form is a 2-element JSON array, matching the map format the
// game loads: {"明": ["日", "月"]}.
impl Serialize for Recipe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.left)?;
        seq.serialize_element(&self.right)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = Vec::<Symbol>::deserialize(deserializer)?;
        match parts.as_slice() {
            [left, right] => Ok(Recipe::new(*left, *right)),
            other => Err(D::Error::custom(format!(
                "recipe must have exactly 2 parts, found {}",
                other.len()
            ))),
        }
    }
}

/// Where a dictionary entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Hand-curated override; authoritative, never replaced by generation.
    Manual,
    /// Produced by the decomposer/synthesizer (includes all synthetic
    /// intermediates).
    Generated,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    recipe: Recipe,
    provenance: Provenance,
}

/// The composition dictionary: an insertion-ordered map from symbol to its
/// binary merge recipe.
///
/// Manual entries are merged first and take precedence: `insert_generated`
/// never replaces an existing entry, which is what makes assembly
/// idempotent and overrides authoritative.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: IndexMap<Symbol, Entry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Insert a manual override verbatim, replacing any previous entry.
    pub fn insert_manual(&mut self, symbol: Symbol, recipe: Recipe) {
        self.entries.insert(
            symbol,
            Entry {
                recipe,
                provenance: Provenance::Manual,
            },
        );
    }

    /// Insert a generated recipe. Returns false (and leaves the dictionary
    /// untouched) when the symbol already has an entry.
    pub fn insert_generated(&mut self, symbol: Symbol, recipe: Recipe) -> bool {
        use indexmap::map::Entry as MapEntry;
        match self.entries.entry(symbol) {
            MapEntry::Vacant(slot) => {
                slot.insert(Entry {
                    recipe,
                    provenance: Provenance::Generated,
                });
                true
            }
            MapEntry::Occupied(_) => false,
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Recipe> {
        self.entries.get(&symbol).map(|e| &e.recipe)
    }

    pub fn provenance(&self, symbol: Symbol) -> Option<Provenance> {
        self.entries.get(&symbol).map(|e| e.provenance)
    }

    pub fn contains_key(&self, symbol: Symbol) -> bool {
        self.entries.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Recipe)> + '_ {
        self.entries.iter().map(|(sym, e)| (*sym, &e.recipe))
    }

    /// Build a dictionary from plain recipes, e.g. one loaded back from
    /// disk. Provenance is an assembly-time notion, so loaded entries are
    /// all marked generated.
    pub fn from_recipes<I: IntoIterator<Item = (Symbol, Recipe)>>(recipes: I) -> Self {
        let mut dict = Dictionary::new();
        for (symbol, recipe) in recipes {
            dict.insert_generated(symbol, recipe);
        }
        dict
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, entry) in &self.entries {
            map.serialize_entry(symbol, &entry.recipe)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let recipes = IndexMap::<Symbol, Recipe>::deserialize(deserializer)?;
        Ok(Dictionary::from_recipes(recipes))
    }
}
