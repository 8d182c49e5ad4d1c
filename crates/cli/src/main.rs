use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, UserId};
use engine::Recommender;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// CineMatch - movie recommendations from rating similarity
#[derive(Parser)]
#[command(name = "cine-match")]
#[command(about = "User similarity and movie recommendations over a ratings dataset", long_about = None)]
struct Cli {
    /// Path to the dataset directory (users.csv, movies.csv, ratings.csv)
    #[arg(short, long, default_value = "data", env = "CINEMATCH_DATA_DIR")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user in the dataset
    Users,

    /// Show a user's profile and ratings
    User {
        /// User ID to display
        #[arg(long)]
        user_id: UserId,
    },

    /// Show the users most similar to a user
    Similar {
        /// User ID to compare against
        #[arg(long)]
        user_id: UserId,

        /// Number of rows to show
        #[arg(long, default_value = "10")]
        results: usize,
    },

    /// Show recommended movies for a user
    Recommend {
        /// User ID to recommend for
        #[arg(long)]
        user_id: UserId,

        /// Number of rows to show
        #[arg(long, default_value = "10")]
        results: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_dir(&cli.data_dir).context("Failed to load dataset")?,
    );
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let recommender = Recommender::new(catalog.clone());

    match cli.command {
        Commands::Users => handle_users(&catalog),
        Commands::User { user_id } => handle_user(&catalog, user_id)?,
        Commands::Similar { user_id, results } => handle_similar(&recommender, user_id, results)?,
        Commands::Recommend { user_id, results } => {
            handle_recommend(&recommender, user_id, results)?
        }
    }

    Ok(())
}

/// Handle the 'users' command
fn handle_users(catalog: &Catalog) {
    let (users, movies, ratings) = catalog.counts();
    println!(
        "{}",
        format!("{users} users, {movies} movies, {ratings} ratings").bold()
    );
    for user in catalog.users() {
        println!(
            "{:>6}  {:<24} {} ratings",
            user.id,
            user.name,
            user.ratings.len()
        );
    }
}

/// Handle the 'user' command
fn handle_user(catalog: &Catalog, user_id: UserId) -> Result<()> {
    let user = catalog
        .get_user(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;

    println!("{}", format!("{} (id {})", user.name, user.id).bold().blue());
    if user.ratings.is_empty() {
        println!("  no ratings");
        return Ok(());
    }
    for rating in &user.ratings {
        println!("  {:>5.1}  {}", rating.score, rating.title);
    }
    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(recommender: &Recommender, user_id: UserId, results: usize) -> Result<()> {
    let rows = recommender.top_similar_users(user_id, results)?;

    println!(
        "{}",
        format!("Users most similar to user {user_id}:").bold().blue()
    );
    if rows.is_empty() {
        println!("  no other users in the dataset");
    }
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>3}. {:<24} (id {:>4})  similarity {}",
            i + 1,
            row.name,
            row.user_id,
            format!("{:.2}", row.similarity).green()
        );
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(recommender: &Recommender, user_id: UserId, results: usize) -> Result<()> {
    let rows = recommender.top_recommended_movies(user_id, results)?;

    println!(
        "{}",
        format!("Recommended movies for user {user_id}:").bold().blue()
    );
    if rows.is_empty() {
        println!("  nothing to recommend (no overlap with other raters)");
    }
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>3}. {:<40} (id {:>4})  predicted {}",
            i + 1,
            row.title,
            row.movie_id,
            format!("{:.2}", row.score).green()
        );
    }
    Ok(())
}
