#![doc = include_str!("../README.md")]

//! Input parsing for the gattai toolchain.
//!
//! Everything here is plain line- or JSON-oriented parsing with no
//! algorithmic content; the interesting work happens in `gattai-engine`.

pub mod charset;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod structural;
pub mod words;

pub use charset::{known_characters, load_known_characters};
pub use config::DictionaryConfig;
pub use dictionary::load_dictionary;
pub use errors::{ConfigError, SourceError};
pub use structural::StructuralSource;
pub use words::{load_word_source, parse_word_source, target_characters, WordEntry};
