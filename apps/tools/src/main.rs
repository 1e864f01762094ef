use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use shared::error::DatasetError;
use speaking::{parse_instant, partition, text, Breakpoint, Catalog, Listing, ProjectCatalog};

const DEFAULT_COLUMNS: u32 = 80;

#[derive(Parser, Debug)]
#[command(about = "Authoring tools for the site datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a dataset file and report every invalid field.
    Validate {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = DatasetKind::Talks)]
        kind: DatasetKind,
    },
    /// Print the talk listing in the order the site shows it.
    List {
        /// Dataset file; the built-in dataset when omitted.
        #[arg(long)]
        talks: Option<PathBuf>,
        /// Reference date (YYYY-MM-DD or RFC 3339); defaults to now.
        #[arg(long)]
        now: Option<String>,
        /// Terminal width in columns; defaults to $COLUMNS.
        #[arg(long)]
        width: Option<u32>,
        /// Narrowest width that still gets the table layout.
        #[arg(long, default_value_t = 100)]
        breakpoint: u32,
        /// Emit the upcoming/past groups as JSON instead.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DatasetKind {
    Talks,
    Projects,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { path, kind } => validate(&path, kind),
        Command::List {
            talks,
            now,
            width,
            breakpoint,
            json,
        } => {
            let catalog = match talks {
                Some(path) => Catalog::load(&path)?,
                None => Catalog::builtin().context("built-in talk dataset is invalid")?,
            };
            let now = match now.as_deref() {
                Some(raw) => parse_instant(raw)
                    .with_context(|| format!("'{raw}' is not YYYY-MM-DD or RFC 3339"))?,
                None => Utc::now(),
            };
            let groups = partition(catalog.entries(), now);

            if json {
                println!("{}", serde_json::to_string_pretty(&groups.to_listing())?);
                return Ok(());
            }

            let width = width.unwrap_or_else(terminal_columns);
            let layout = Breakpoint::new(breakpoint).select(width);
            print!("{}", text::listing(&Listing::build(groups), layout));
            Ok(())
        }
    }
}

fn validate(path: &Path, kind: DatasetKind) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let checked = match kind {
        DatasetKind::Talks => Catalog::from_json(&raw).map(|catalog| catalog.len()),
        DatasetKind::Projects => {
            ProjectCatalog::from_json(&raw).map(|catalog| catalog.projects().len())
        }
    };

    match checked {
        Ok(count) => {
            println!("{}: {count} record(s) ok", path.display());
            Ok(())
        }
        Err(DatasetError::Invalid(findings)) => {
            for finding in &findings {
                eprintln!("{}: {finding}", path.display());
            }
            bail!("{} invalid field(s) in '{}'", findings.len(), path.display())
        }
        Err(err) => Err(err).with_context(|| format!("'{}' is not a dataset", path.display())),
    }
}

fn terminal_columns() -> u32 {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_COLUMNS)
}
