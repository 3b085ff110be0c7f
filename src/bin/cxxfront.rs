//! CLI front end: reads files, tokenizes, parses, prints tokens and tree,
//! nonzero exit on any lex/parse error.
//!
//! `clap` handles argument parsing, `anyhow` collects I/O errors alongside
//! the crate's own typed errors under one umbrella, `dirs` locates an
//! optional user config file, and `tracing-subscriber` is installed once at
//! startup and gated by `-v`/`RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cxxfront::{build_syntax_tree_with_recursion_limit, render_caret, tokenize};
use serde::Deserialize;

const GRAMMAR_TABLE: &str = include_str!("../../grammar.toml");
const DEFAULT_RECURSION_LIMIT: usize = 4_096;

#[derive(ClapParser, Debug)]
#[command(name = "cxxfront", about = "Lex and parse C++-family source files")]
struct Cli {
    /// Source files to tokenize and parse.
    files: Vec<PathBuf>,

    /// Increase log verbosity (-v, -vv); overridden by RUST_LOG if set.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override the parser's recursion limit.
    #[arg(long)]
    recursion_limit: Option<usize>,

    /// Print the grammar description table and exit.
    #[arg(long)]
    dump_grammar: bool,
}

/// User-level defaults, loaded from
/// `dirs::config_dir()/cxxfront/config.toml` when present.
#[derive(Debug, Default, Deserialize)]
struct Config {
    recursion_limit: Option<usize>,
}

fn load_config() -> Config {
    let Some(dir) = dirs::config_dir() else {
        return Config::default();
    };
    let path = dir.join("cxxfront").join("config.toml");
    let Ok(text) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&text).unwrap_or_else(|err| {
        tracing::debug!(path = %path.display(), %err, "ignoring malformed config file");
        Config::default()
    })
}

fn install_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    if cli.dump_grammar {
        print!("{GRAMMAR_TABLE}");
        return ExitCode::SUCCESS;
    }

    let config = load_config();
    let recursion_limit = cli
        .recursion_limit
        .or(config.recursion_limit)
        .unwrap_or(DEFAULT_RECURSION_LIMIT);

    if cli.files.is_empty() {
        eprintln!("cxxfront: no input files");
        return ExitCode::FAILURE;
    }

    let mut had_error = false;
    for path in &cli.files {
        if let Err(err) = process_file(path, recursion_limit) {
            eprintln!("{err:#}");
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process_file(path: &Path, recursion_limit: usize) -> Result<()> {
    let unit = path.display().to_string();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {unit}"))?;

    let tokens = tokenize(&source).map_err(|err| {
        anyhow::anyhow!(render_caret("cxxfront", &unit, err.loc(), &err.to_string(), &source))
    })?;

    for token in &tokens {
        println!("{:>4}:{:<4} {:?} {:?}", token.location.line, token.location.column, token.kind, token.content);
    }

    let syntax = build_syntax_tree_with_recursion_limit(tokens, recursion_limit).map_err(|err| {
        anyhow::anyhow!(render_caret("cxxfront", &unit, err.loc(), &err.to_string(), &source))
    })?;

    println!("{}", syntax.debug_string());
    Ok(())
}
