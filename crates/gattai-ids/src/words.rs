use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::errors::SourceError;

/// The long-vowel mark appears inside words but is never a buildable part.
const NON_TARGET: char = 'ー';

/// One record from a word-source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub reading: String,
    pub meaning: String,
    pub sentence: String,
}

/// Parse a comma-separated word-source file.
///
/// Format per line: `word,reading,meaning,sentence`. `#` comment lines,
/// `[section]` headers and lines without a comma are skipped. Missing
/// trailing fields default to empty, a missing reading to `???`.
pub fn parse_word_source(text: &str) -> Vec<WordEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with('[')
            || !line.contains(',')
        {
            continue;
        }
        let mut fields = line.split(',').map(str::trim);
        let word = match fields.next() {
            Some(w) if !w.is_empty() => w.to_string(),
            _ => continue,
        };
        entries.push(WordEntry {
            word,
            reading: fields.next().unwrap_or("???").to_string(),
            meaning: fields.next().unwrap_or("").to_string(),
            sentence: fields.next().unwrap_or("").to_string(),
        });
    }
    entries
}

pub fn load_word_source(path: &Path) -> Result<Vec<WordEntry>, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_word_source(&text);
    debug!(path = %path.display(), words = entries.len(), "loaded word source");
    Ok(entries)
}

/// The distinct characters the game must be able to build for these words.
pub fn target_characters(entries: &[WordEntry]) -> BTreeSet<char> {
    entries
        .iter()
        .flat_map(|e| e.word.chars())
        .filter(|&c| c != NON_TARGET)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
# main data
[level1]
明日,あす,tomorrow,明日は晴れる
カード,かーど
plain line without comma
想像,そうぞう,imagination
";

    #[test]
    fn parses_records_and_skips_noise() {
        let entries = parse_word_source(SOURCE);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].word, "明日");
        assert_eq!(entries[0].reading, "あす");
        assert_eq!(entries[0].sentence, "明日は晴れる");
        assert_eq!(entries[1].meaning, "");
        assert_eq!(entries[2].word, "想像");
    }

    #[test]
    fn targets_exclude_long_vowel_mark() {
        let entries = parse_word_source(SOURCE);
        let targets = target_characters(&entries);
        assert!(targets.contains(&'明'));
        assert!(targets.contains(&'カ'));
        assert!(!targets.contains(&'ー'));
    }
}
