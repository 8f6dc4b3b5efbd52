//! CLI entry point for the kinship relationship query tool.
//!
//! Loads a relationship file, runs one query, and writes the result to
//! stdout as text or JSON. Logs go to stderr.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use kinship_core::{KinshipConfig, OutputFormat};
use kinship_graph::{load, render, GraphError, KinshipEngine};

#[derive(Parser)]
#[command(name = "kinship")]
#[command(about = "Relationship queries over a family graph")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Relationship file (overrides `data_file` from config).
    #[arg(short, long, global = true)]
    file: Option<String>,

    /// Config file prefix (default: kinship).
    #[arg(short, long, default_value = "kinship", global = true)]
    config: String,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List everyone without a parent.
    Orphans,
    /// List the other children of a person's parents.
    Siblings { name: String },
    /// List descendants by generation.
    Descendants { name: String },
    /// Shortest relationship path between two people.
    Bingo { from: String, to: String },
    /// List cousins of a given degree and removal.
    Cousins {
        name: String,
        number: usize,
        removed: usize,
    },
    /// Print every person and their relationships.
    Dump,
    /// Print node and edge counts.
    Stats,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = KinshipConfig::load(&cli.config)?;
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let path = cli
        .file
        .clone()
        .or_else(|| config.data_file.clone())
        .ok_or_else(|| anyhow::anyhow!("No relationship file: pass --file or set data_file"))?;
    let graph = load::load_graph(&path, config.labels())?;
    let engine = KinshipEngine::new(graph);
    tracing::info!(stats = ?engine.stats(), "Graph ready");

    match cli.command {
        Command::Orphans => {
            let names = engine.orphans();
            emit(output, &names, || render::orphans(&names))?;
        }
        Command::Siblings { ref name } => match engine.siblings(name) {
            Ok(names) => emit(output, &names, || render::siblings(name, &names))?,
            Err(e) => report_missing(output, e)?,
        },
        Command::Descendants { ref name } => match engine.descendants(name) {
            Ok(listing) => emit(output, &listing, || render::descendants(&listing))?,
            Err(e) => report_missing(output, e)?,
        },
        Command::Bingo { ref from, ref to } => match engine.shortest_path(from, to) {
            Ok(steps) => emit(output, &steps, || render::path(steps.as_deref()))?,
            Err(e) => report_missing(output, e)?,
        },
        Command::Cousins {
            ref name,
            number,
            removed,
        } => match engine.cousins(name, number, removed) {
            Ok(names) => emit(output, &names, || render::cousins(&names))?,
            Err(e) => report_missing(output, e)?,
        },
        Command::Dump => print!("{}", engine.dump()),
        Command::Stats => {
            let stats = engine.stats();
            emit(output, &stats, || {
                vec![
                    format!("nodes: {}", stats.total_nodes),
                    format!("edges: {}", stats.total_edges),
                    format!("orphans: {}", stats.orphan_count),
                ]
            })?;
        }
    }

    Ok(())
}

/// Print `value` as JSON, or the text lines produced by `text`.
fn emit<T, F>(output: OutputFormat, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> Vec<String>,
{
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => {
            for line in text() {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Absent names are an expected outcome; anything else is fatal.
fn report_missing(output: OutputFormat, err: GraphError) -> anyhow::Result<()> {
    let Some(message) = render::missing(&err) else {
        return Err(err.into());
    };
    match output {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "not_found": err.missing_names() })
        ),
        OutputFormat::Text => println!("{message}"),
    }
    Ok(())
}
