use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::errors::SourceError;

/// CJK unified ideograph, base plane.
pub fn is_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Hiragana or katakana, including the radical-like katakana the atomic
/// set uses (e.g. イ).
pub fn is_kana(c: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&c)
}

/// Extract the known-character set from raw text: the distinct ideographs
/// and phonetic symbols, everything else ignored.
pub fn known_characters(text: &str) -> BTreeSet<char> {
    text.chars()
        .filter(|&c| is_ideograph(c) || is_kana(c))
        .collect()
}

pub fn load_known_characters(path: &Path) -> Result<BTreeSet<char>, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let chars = known_characters(&text);
    debug!(characters = chars.len(), "loaded known-character list");
    Ok(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_ideographs_and_kana() {
        let chars = known_characters("常用漢字: 明日, かな イ\n123 abc");
        assert!(chars.contains(&'明'));
        assert!(chars.contains(&'日'));
        assert!(chars.contains(&'か'));
        assert!(chars.contains(&'イ'));
        assert!(!chars.contains(&':'));
        assert!(!chars.contains(&'a'));
        assert!(!chars.contains(&'1'));
    }

    #[test]
    fn deduplicates() {
        let chars = known_characters("日日日");
        assert_eq!(chars.len(), 1);
    }
}
