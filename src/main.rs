// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kensaku::{ContentSearchEngine, EngineConfig, IndexSnapshot, IndexedDocument};

mod cli;
use cli::{build_options, display, Cli, Commands, FilterArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index {
            input,
            output,
            config,
        } => run_index(&input, &output, config.as_deref()),
        Commands::Search {
            snapshot,
            query,
            limit,
            offset,
            fuzzy,
            exact,
            sort,
            order,
            categories,
            tags,
            difficulty,
            content_type,
            author,
            from,
            to,
            config,
            json,
        } => {
            let engine = open_snapshot(&snapshot, config.as_deref())?;
            let filters = FilterArgs {
                categories,
                tags,
                difficulty,
                content_type,
                author,
                from,
                to,
            };
            let options =
                build_options(query, limit, offset, fuzzy, exact, sort, order, filters);

            let start = Instant::now();
            let page = engine.search_page(&options);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                display::print_results(&options.query, &page, options.offset, elapsed_ms);
            }
            Ok(())
        }
        Commands::Stats { snapshot } => {
            let engine = open_snapshot(&snapshot, None)?;
            display::print_stats(&snapshot, &engine.get_index_stats());
            Ok(())
        }
        Commands::Suggest {
            snapshot,
            prefix,
            limit,
        } => {
            let engine = open_snapshot(&snapshot, None)?;
            display::print_suggestions(&prefix, &engine.suggest(&prefix, limit));
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &str, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {} '{}'", what, path))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {} '{}'", what, path))
}

fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    match path {
        Some(path) => read_json(path, "config"),
        None => Ok(EngineConfig::default()),
    }
}

fn open_snapshot(path: &str, config: Option<&str>) -> Result<ContentSearchEngine> {
    let config = load_config(config)?;
    let snapshot: IndexSnapshot = read_json(path, "snapshot")?;
    let mut engine = ContentSearchEngine::with_config(config);
    engine
        .import_index(snapshot)
        .with_context(|| format!("loading snapshot '{}'", path))?;
    Ok(engine)
}

fn run_index(input: &str, output: &str, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let docs: Vec<IndexedDocument> = read_json(input, "documents")?;

    let mut engine = ContentSearchEngine::with_config(config);
    for doc in docs {
        let id = doc.id.clone();
        engine
            .add_content(doc)
            .with_context(|| format!("indexing document '{}'", id))?;
    }

    let output_path = Path::new(output);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    let serialized = serde_json::to_string(&engine.export_index())?;
    fs::write(output_path, serialized).with_context(|| format!("writing '{}'", output))?;

    let stats = engine.get_index_stats();
    info!(
        documents = stats.total_content,
        tokens = stats.total_tokens,
        output,
        "snapshot written"
    );
    println!(
        "✓ indexed {} documents ({} tokens) → {}",
        stats.total_content, stats.total_tokens, output
    );
    Ok(())
}
