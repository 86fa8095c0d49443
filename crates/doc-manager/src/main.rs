mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use doc_manager::{DataLoader, DocumentStore, ManagerConfig};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ManagerConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {:?}", path))?,
        None => ManagerConfig::load_from_dir(&cli.root),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut files = DataLoader::collect_seed_files(&cli.root, &config.seed_paths)?;
    let extra: Vec<String> = cli
        .seeds
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    files.extend(DataLoader::collect_seed_files(&cli.root, &extra)?);

    let mut store = DocumentStore::new();
    let saved = DataLoader::seed_store(&mut store, &files);
    tracing::info!("Seeded {} documents from {} files", saved, files.len());

    let stdout = std::io::stdout();
    commands::run(&store, cli.command, config.pretty, &mut stdout.lock())
}
