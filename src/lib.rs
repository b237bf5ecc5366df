pub mod config;
pub mod model;
pub mod search;
pub mod storage;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use config::{DEFAULT_LIMIT, MAX_LIMIT, SearchConfig};
use search::engine::SearchEngine;
use search::lemma::DictionaryLemmatizer;
use storage::sqlite::SqliteCatalog;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-search",
    version,
    about = "Fuzzy search over the internal software-system catalog"
)]
pub struct Cli {
    /// Path to the catalog SQLite database (defaults to platform data dir)
    #[arg(long)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank catalog records against a free-text query
    Search {
        /// Query text (Russian or Latin, free form)
        query: String,

        /// Maximum number of results (clamped to 1..=50)
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Emit results as JSON instead of the text listing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, limit, json } => run_search(cli.db, &query, limit, json),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "catsearch", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_search(db_override: Option<PathBuf>, query: &str, limit: usize, json: bool) -> Result<()> {
    let db_path = db_override.unwrap_or_else(default_db_path);
    let catalog = SqliteCatalog::open(&db_path)
        .with_context(|| format!("opening catalog at {}", db_path.display()))?;

    let engine = SearchEngine::new(
        Box::new(catalog),
        Arc::new(DictionaryLemmatizer::new()),
        SearchConfig::default(),
    );

    let limit = limit.clamp(1, MAX_LIMIT);
    let results = engine.search(query, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no matches");
        return Ok(());
    }
    for hit in &results {
        let name = hit.record.product_name.as_deref().unwrap_or("(без названия)");
        let code = hit.record.product_code.as_deref().unwrap_or("-");
        let status = hit.record.status.as_deref().unwrap_or("-");
        println!("{:>6.1}  {name}  [{code}]  {status}", hit.search_score);
        if let Some(owner) = hit.record.owner_name.as_deref() {
            println!("        owner: {owner}");
        }
        if let Some(desc) = hit.record.description.as_deref() {
            let short: String = desc.chars().take(120).collect();
            println!("        {short}");
        }
    }
    Ok(())
}

pub fn default_db_path() -> PathBuf {
    default_data_dir().join("systems_kb.db")
}

pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "catalog-search", "catalog-search")
        .expect("project dirs available")
        .data_dir()
        .to_path_buf()
}
