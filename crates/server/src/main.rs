//! CineMatch API server.
//!
//! Loads the dataset, builds the catalog, and only then binds the listener;
//! no request is ever served against a partially built model.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use data_loader::{Catalog, parser};
use engine::Recommender;
use server::{AppState, create_router};

/// CineMatch recommendation API
#[derive(Parser)]
#[command(name = "cine-match-server")]
#[command(about = "HTTP API for user similarity and movie recommendations", long_about = None)]
struct Args {
    /// Path to the dataset directory (users.csv, movies.csv, ratings.csv)
    #[arg(short, long, default_value = "data", env = "CINEMATCH_DATA_DIR")]
    data_dir: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Loading dataset from {}", args.data_dir.display());
    let start = Instant::now();
    let tables =
        parser::load_tables(&args.data_dir).context("Failed to load dataset tables")?;
    let catalog = Catalog::build(&tables).context("Failed to build catalog")?;
    let (users, movies, ratings) = catalog.counts();
    info!(users, movies, ratings, elapsed = ?start.elapsed(), "Catalog built");

    let state = AppState::new(tables.users, Recommender::new(Arc::new(catalog)));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.addr))?;
    info!("Listening on http://{}", args.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
