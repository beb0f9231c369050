//! CLI argument definitions: top-level `Cli` struct and `Commands` enum.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub(crate) const CLI_LONG_ABOUT: &str =
    "Build pipeline for the gattai merge-puzzle composition dictionary.\n\n\
    Canonical flow:\n  \
    1. gattai generate --ids ids.txt --known joyo.txt --config dictionary_config.json --out ids-map.json\n  \
    2. gattai validate --dict ids-map.json --config dictionary_config.json --words words.txt\n  \
    3. gattai problems --dict ids-map.json --words words.txt --out problems.json\n\n\
    `validate` exits non-zero while any character stays unbuildable; add the\n\
    reported root causes to manual_overrides and regenerate.";

#[derive(Parser)]
#[command(name = "gattai")]
#[command(about = "Build and validate the merge-puzzle composition dictionary")]
#[command(long_about = CLI_LONG_ABOUT)]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the dictionary from an IDS table and known-character list
    #[command(display_order = 10)]
    Generate {
        /// Path to the tab-separated IDS structural table
        #[arg(long)]
        ids: PathBuf,

        /// Path to the known-character list (raw text)
        #[arg(long)]
        known: PathBuf,

        /// Path to dictionary_config.json (atomic parts + manual overrides)
        #[arg(long)]
        config: PathBuf,

        /// Output path for the dictionary JSON map
        #[arg(long)]
        out: PathBuf,

        /// Decomposition policy: expand | leaves
        #[arg(long, default_value = "expand")]
        policy: String,

        /// Fall back to the built-in minimal atomic set when the config
        /// file does not exist
        #[arg(long, default_value_t = false)]
        allow_missing_config: bool,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Prove every character reachable from atomic parts
    #[command(display_order = 20)]
    Validate {
        /// Path to the generated dictionary JSON map
        #[arg(long)]
        dict: PathBuf,

        /// Path to dictionary_config.json
        #[arg(long)]
        config: PathBuf,

        /// Word-source files whose characters must all be buildable
        #[arg(long)]
        words: Vec<PathBuf>,

        /// Optional path for the machine-readable report (JSON)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Lint the config and dictionary for manual-fix candidates
    #[command(display_order = 30)]
    Check {
        /// Path to the generated dictionary JSON map
        #[arg(long)]
        dict: PathBuf,

        /// Path to dictionary_config.json
        #[arg(long)]
        config: PathBuf,

        /// Word-source files providing the target characters
        #[arg(long)]
        words: Vec<PathBuf>,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Build the problem database with difficulty scores
    #[command(display_order = 40)]
    Problems {
        /// Path to the generated dictionary JSON map
        #[arg(long)]
        dict: PathBuf,

        /// Word-source files to turn into problems
        #[arg(long, required = true)]
        words: Vec<PathBuf>,

        /// Output path for the problem database JSON
        #[arg(long)]
        out: PathBuf,
    },
}
