// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the doxsearch command-line interface.
//!
//! Two subcommands: `search` to run a query against a shard the way the
//! documentation search box would, and `inspect` to summarize what a shard
//! contains. Both print a boxed terminal view by default and JSON with
//! `--json`.

pub mod display;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use doxsearch::{load_path, search, IndexStore, KeyEscapes, LoadOptions};

use display::{most_overloaded, Painter};

/// Overloaded entries listed by `inspect`.
const TOP_OVERLOADED: usize = 10;

#[derive(Parser)]
#[command(
    name = "doxsearch",
    about = "Incremental symbol search over documentation index shards",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a shard and display grouped results
    Search {
        /// Path to the shard (`functions_2.js` or a JSON record array)
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of result groups to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Summarize the contents of a shard
    Inspect {
        /// Path to the shard
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        load: LoadArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Decode Doxygen `_XX` key escapes in JSON shards (always on for scripts)
    #[arg(long)]
    pub doxygen_keys: bool,

    /// Match accented characters only against themselves
    #[arg(long)]
    pub keep_diacritics: bool,
}

impl LoadArgs {
    pub fn options(&self) -> LoadOptions {
        let escapes = if self.doxygen_keys {
            KeyEscapes::Doxygen
        } else {
            KeyEscapes::None
        };
        LoadOptions::default()
            .with_key_escapes(escapes)
            .with_fold_diacritics(!self.keep_diacritics)
    }
}

/// Machine-readable `inspect` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary<'a> {
    pub entries: usize,
    pub occurrences: usize,
    pub overloaded: usize,
    pub most_overloaded: Vec<Overloaded<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Overloaded<'a> {
    pub label: &'a str,
    pub occurrences: usize,
}

impl<'a> Summary<'a> {
    pub fn of(store: &'a IndexStore) -> Self {
        Self {
            entries: store.len(),
            occurrences: store.occurrence_count(),
            overloaded: store.overloaded_count(),
            most_overloaded: most_overloaded(store, TOP_OVERLOADED)
                .into_iter()
                .map(|(label, occurrences)| Overloaded { label, occurrences })
                .collect(),
        }
    }
}

/// Execute a parsed command, writing to `out`.
pub fn run<W: Write>(cli: Cli, out: W, colors: bool) -> Result<()> {
    match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            load,
        } => run_search(&file, &query, limit, json, &load, out, colors),
        Commands::Inspect { file, json, load } => run_inspect(&file, json, &load, out, colors),
    }
}

fn open(file: &Path, load: &LoadArgs) -> Result<IndexStore> {
    let store = load_path(file, &load.options())
        .with_context(|| format!("failed to load index {}", file.display()))?;
    info!(
        path = %file.display(),
        entries = store.len(),
        occurrences = store.occurrence_count(),
        "index loaded"
    );
    Ok(store)
}

fn painter<W: Write>(out: W, colors: bool) -> Painter<W> {
    if colors {
        Painter::for_terminal(out)
    } else {
        Painter::plain(out)
    }
}

fn run_search<W: Write>(
    file: &Path,
    query: &str,
    limit: Option<usize>,
    json: bool,
    load: &LoadArgs,
    mut out: W,
    colors: bool,
) -> Result<()> {
    let store = open(file, load)?;
    let mut groups = search(&store, query);

    if json {
        if let Some(limit) = limit {
            groups.truncate(limit);
        }
        serde_json::to_writer_pretty(&mut out, &groups).context("failed to write results")?;
        writeln!(out).context("failed to write results")?;
        return Ok(());
    }

    painter(out, colors)
        .search_results(query, &groups, limit)
        .context("failed to write results")
}

fn run_inspect<W: Write>(
    file: &Path,
    json: bool,
    load: &LoadArgs,
    mut out: W,
    colors: bool,
) -> Result<()> {
    let store = open(file, load)?;

    if json {
        serde_json::to_writer_pretty(&mut out, &Summary::of(&store))
            .context("failed to write summary")?;
        writeln!(out).context("failed to write summary")?;
        return Ok(());
    }

    painter(out, colors)
        .store_summary(&file.display().to_string(), &store, TOP_OVERLOADED)
        .context("failed to write summary")
}
