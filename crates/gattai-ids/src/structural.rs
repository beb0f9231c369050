use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::SourceError;

/// IDS composition operators (U+2FF0..=U+2FFF). They describe spatial
/// arrangement only and are stripped before use.
fn is_ids_operator(c: char) -> bool {
    ('\u{2FF0}'..='\u{2FFF}').contains(&c)
}

/// The raw structural decomposition table: character to ordered raw
/// constituents, arbitrary arity, no synthetic nodes.
///
/// Frozen input for one run; the decomposer only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct StructuralSource {
    entries: IndexMap<char, Vec<char>>,
}

impl StructuralSource {
    pub fn new() -> Self {
        StructuralSource::default()
    }

    /// Parse the line-oriented IDS table.
    ///
    /// Record format: `identifier<TAB>character<TAB>description`. Lines
    /// starting with `;;` are comments. The description is a symbol
    /// sequence interleaved with composition operators; operators and any
    /// occurrence of the entry's own character are dropped. Entries whose
    /// description yields no constituents are skipped, and a repeated
    /// character keeps the last record.
    pub fn parse(text: &str) -> Self {
        let mut entries: IndexMap<char, Vec<char>> = IndexMap::new();
        for line in text.lines() {
            if line.starts_with(";;") {
                continue;
            }
            let mut fields = line.trim_end().split('\t');
            let (_ident, char_field, description) =
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(a), Some(b), Some(c)) => (a, b, c),
                    _ => continue,
                };

            let mut chars = char_field.chars();
            let character = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => continue,
            };

            let constituents: Vec<char> = description
                .chars()
                .filter(|&c| !is_ids_operator(c) && c != character)
                .collect();
            if constituents.is_empty() {
                continue;
            }
            entries.insert(character, constituents);
        }
        debug!(entries = entries.len(), "parsed structural source");
        StructuralSource { entries }
    }

    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn get(&self, c: char) -> Option<&[char]> {
        self.entries.get(&c).map(Vec::as_slice)
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry directly. Intended for tests and synthetic sources.
    pub fn insert(&mut self, c: char, constituents: Vec<char>) {
        self.entries.insert(c, constituents);
    }
}
