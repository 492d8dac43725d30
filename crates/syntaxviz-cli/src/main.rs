//! `syntaxviz`: parse a source file and print its syntax tree as JSON.
//!
//! Usage:
//!   syntaxviz [OPTIONS] [FILE]      - FILE defaults to stdin (also `-`)
//!
//! Settings come from, in increasing priority: built-in defaults,
//! `~/.config/syntaxviz/config.toml` (or `--config`), command-line flags.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use syntaxviz_config::Config;
use syntaxviz_engine::{Grammar, TreeWalker, render_json};

#[derive(Debug, Parser)]
#[command(name = "syntaxviz", version, about = "Print a source file's syntax tree as JSON")]
struct Cli {
    /// Source file to visualize; stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Grammar to parse with: markdown, markdown-inline
    #[arg(long, short)]
    grammar: Option<Grammar>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Include each node's parser kind as "Kind"
    #[arg(long)]
    kinds: bool,

    /// Fail if the tree nests deeper than this (root is depth 0)
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Fail if the tree has more nodes than this
    #[arg(long, value_name = "N")]
    max_nodes: Option<usize>,

    /// Config file to use instead of ~/.config/syntaxviz/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let config = apply_overrides(config, &cli);
    log::info!("Using {} grammar", config.grammar);

    let source = read_source(cli.file.as_deref())?;
    let walker = TreeWalker::new(config.walk_options());
    let json = render_json(&source, config.grammar, &walker, config.output.pretty)
        .context("Failed to render syntax tree")?;

    println!("{json}");
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(grammar) = cli.grammar {
        config.grammar = grammar;
    }
    if cli.pretty {
        config.output.pretty = true;
    }
    if cli.kinds {
        config.output.include_kinds = true;
    }
    if let Some(max_depth) = cli.max_depth {
        config.limits.max_depth = Some(max_depth);
    }
    if let Some(max_nodes) = cli.max_nodes {
        config.limits.max_nodes = Some(max_nodes);
    }
    config
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}
