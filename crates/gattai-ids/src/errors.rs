use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use gattai_dict::SymbolParseError;

/// Error reading or decoding one of the flat input files.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("failed to read {path}")]
    #[diagnostic(code(gattai::ids::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode dictionary {path}")]
    #[diagnostic(code(gattai::ids::dictionary))]
    DictionaryFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error loading the dictionary config.
///
/// There is deliberately no silent fallback here: a missing config is
/// reported to the caller, who decides whether to proceed with
/// `DictionaryConfig::minimal()` or abort.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    #[diagnostic(
        code(gattai::config::not_found),
        help("pass --allow-missing-config to fall back to the built-in minimal atomic set")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read config {path}")]
    #[diagnostic(code(gattai::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode config {path}")]
    #[diagnostic(code(gattai::config::json))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid symbol `{value}` in {context}")]
    #[diagnostic(code(gattai::config::bad_symbol))]
    BadSymbol {
        context: String,
        value: String,
        #[source]
        source: SymbolParseError,
    },

    #[error("manual override `{key}` has {arity} parts, at least 2 are required")]
    #[diagnostic(code(gattai::config::override_arity))]
    OverrideArity { key: String, arity: usize },

    #[error("manual override `{key}` lists itself as one of its parts")]
    #[diagnostic(code(gattai::config::self_reference))]
    SelfReference { key: String },
}
