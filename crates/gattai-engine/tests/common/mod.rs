#![allow(dead_code)]

use std::collections::BTreeSet;

use gattai_dict::ClosureSet;
use gattai_ids::{DictionaryConfig, StructuralSource};

pub fn source(entries: &[(char, &[char])]) -> StructuralSource {
    let mut src = StructuralSource::new();
    for (c, parts) in entries {
        src.insert(*c, parts.to_vec());
    }
    src
}

pub fn closure(atomic: &str, known: &str) -> ClosureSet {
    ClosureSet::new(atomic.chars(), known.chars())
}

pub fn empty_config() -> DictionaryConfig {
    DictionaryConfig::default()
}

pub fn charset(chars: &str) -> BTreeSet<char> {
    chars.chars().collect()
}
