//! Pathway CLI Application
//!
//! Command-line front end for authoring learning pathways.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pathway_core::SqliteBackend;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let backend = SqliteBackend::open(database_file)
        .await
        .context("Failed to initialize pathway database")?;
    info!("Using database {}", backend.database_path().display());

    let cli = Cli::new(backend, TerminalRenderer::new(!no_color));

    match command {
        Some(Pathway { command }) => cli.handle_pathway_command(command).await,
        Some(Step { command }) => cli.handle_step_command(command).await,
        Some(Tag { command }) => cli.handle_tag_command(command).await,
        Some(Replay(args)) => cli.replay(args).await,
        None => cli.list_pathways().await,
    }
}
