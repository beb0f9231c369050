use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use gattai_dict::{Dictionary, Symbol};
use gattai_ids::WordEntry;

/// Depth bound for the atomic-cost recursion; mirrors the decomposition
/// bound so cyclic dictionaries cannot hang the scorer.
const MAX_COST_DEPTH: usize = 5;

/// One entry of the game's problem database.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Problem {
    pub id: String,
    #[serde(rename = "kanji")]
    pub word: String,
    pub reading: String,
    pub meaning: String,
    pub difficulty: u8,
    pub components: Vec<String>,
    pub sentence: String,
}

/// How many atomic merges a symbol ultimately costs: the number of leaf
/// parts its recipe tree bottoms out in. Symbols without a recipe count as
/// a single ready-made part.
pub fn atomic_cost(dictionary: &Dictionary, symbol: Symbol) -> usize {
    cost_bounded(dictionary, symbol, 0)
}

fn cost_bounded(dictionary: &Dictionary, symbol: Symbol, depth: usize) -> usize {
    if depth > MAX_COST_DEPTH {
        return 1;
    }
    match dictionary.get(symbol) {
        None => 1,
        Some(recipe) => recipe
            .parts()
            .into_iter()
            .map(|part| cost_bounded(dictionary, part, depth + 1))
            .sum(),
    }
}

/// Linear difficulty heuristic over a word, scaled 1..=10: word length
/// plus a per-character bonus for construction cost.
pub fn word_difficulty(dictionary: &Dictionary, word: &str) -> u8 {
    let mut score = word.chars().count();
    for c in word.chars() {
        score += match atomic_cost(dictionary, Symbol::Real(c)) {
            cost if cost >= 4 => 3,
            3 => 2,
            2 => 1,
            _ => 0,
        };
    }
    score.clamp(1, 10) as u8
}

/// Stable 8-hex-digit problem id derived from the word and reading.
fn problem_id(word: &str, reading: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(word.as_bytes());
    hasher.update([0]);
    hasher.update(reading.as_bytes());
    let digest = hasher.finalize();
    let mut id = String::with_capacity(8);
    for byte in &digest[..4] {
        id.push_str(&format!("{byte:02x}"));
    }
    id
}

/// Build the problem database for the given word entries. Duplicate words
/// keep their first occurrence; output order follows input order, so the
/// artifact is reproducible.
pub fn build_problems(dictionary: &Dictionary, entries: &[WordEntry]) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::with_capacity(entries.len());
    for entry in entries {
        if problems.iter().any(|p| p.word == entry.word) {
            continue;
        }
        problems.push(Problem {
            id: problem_id(&entry.word, &entry.reading),
            word: entry.word.clone(),
            reading: entry.reading.clone(),
            meaning: entry.meaning.clone(),
            difficulty: word_difficulty(dictionary, &entry.word),
            components: entry.word.chars().map(String::from).collect(),
            sentence: entry.sentence.clone(),
        });
    }
    debug!(problems = problems.len(), "problem database built");
    problems
}
