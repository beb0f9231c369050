#![doc = include_str!("../README.md")]

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::check::run_check;
use commands::generate::run_generate;
use commands::problems::run_problems;
use commands::validate::run_validate;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            ids,
            known,
            config,
            out,
            policy,
            allow_missing_config,
            format,
        } => run_generate(ids, known, config, out, policy, allow_missing_config, format),
        Commands::Validate {
            dict,
            config,
            words,
            out,
            format,
        } => {
            let outcome = run_validate(dict, config, words, out, format)?;
            if !outcome.all_reachable {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Check {
            dict,
            config,
            words,
            format,
        } => {
            let outcome = run_check(dict, config, words, format)?;
            if !outcome.clean {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Problems { dict, words, out } => run_problems(dict, words, out),
    }
}
