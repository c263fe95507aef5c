use anyhow::{Context, Result};
use catalog::{LoadOutcome, load_shows_from_csv, load_shows_from_tmdb_csv};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use recommender::{RecommendCriteria, ShowRecommender};
use std::path::PathBuf;
use std::time::Instant;

/// ShowRecs - TV Show Recommendation Engine
#[derive(Parser)]
#[command(name = "show-recs")]
#[command(about = "TV show catalog with filtering and recommendations", long_about = None)]
struct Cli {
    /// Path to the CSV dataset
    #[arg(short, long)]
    csv: PathBuf,

    /// Schema of the CSV file
    #[arg(long, value_enum, default_value_t = CsvFormat::Simple)]
    format: CsvFormat,

    /// Maximum number of rows to load (tmdb format only)
    #[arg(long)]
    max_rows: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CsvFormat {
    /// title,genre,episodes,rating,language,year
    Simple,
    /// Kaggle TMDB TV dataset (v3)
    Tmdb,
}

#[derive(Subcommand)]
enum Commands {
    /// Get show recommendations matching the given constraints
    Recommend {
        /// Genre to match (case-insensitive substring)
        #[arg(long)]
        genre: Option<String>,

        /// Minimum average rating (0-10)
        #[arg(long)]
        min_rating: Option<f64>,

        /// Minimum number of episodes
        #[arg(long)]
        min_episodes: Option<u64>,

        /// Maximum number of episodes
        #[arg(long)]
        max_episodes: Option<u64>,

        /// Language tag (case-insensitive exact match)
        #[arg(long)]
        language: Option<String>,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Search for shows by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show the highest rated shows in the catalog
    Top {
        /// Number of shows to show
        #[arg(long, default_value = "10")]
        n: usize,
    },

    /// List every genre in the catalog
    Genres,

    /// Print aggregate statistics for the catalog
    Stats {
        /// Emit the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the dataset (this may take a moment on the full TMDB dump)
    println!("Loading show catalog from {}...", cli.csv.display());
    let start = Instant::now();
    let LoadOutcome {
        shows,
        skipped_rows,
    } = match cli.format {
        CsvFormat::Simple => load_shows_from_csv(&cli.csv),
        CsvFormat::Tmdb => load_shows_from_tmdb_csv(&cli.csv, cli.max_rows),
    }
    .context("Failed to load show catalog")?;

    let mut recommender = ShowRecommender::new();
    recommender
        .add_many(shows)
        .context("Failed to admit loaded shows")?;

    println!(
        "{} Loaded {} shows in {:?} ({} rows skipped)",
        "✓".green(),
        recommender.count(),
        start.elapsed(),
        skipped_rows
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            genre,
            min_rating,
            min_episodes,
            max_episodes,
            language,
            limit,
        } => handle_recommend(
            &recommender,
            genre,
            min_rating,
            min_episodes,
            max_episodes,
            language,
            limit,
        ),
        Commands::Search { title } => handle_search(&recommender, &title),
        Commands::Top { n } => handle_top(&recommender, n),
        Commands::Genres => handle_genres(&recommender),
        Commands::Stats { json } => handle_stats(&recommender, json)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: &ShowRecommender,
    genre: Option<String>,
    min_rating: Option<f64>,
    min_episodes: Option<u64>,
    max_episodes: Option<u64>,
    language: Option<String>,
    limit: usize,
) {
    let mut criteria = RecommendCriteria::new().with_limit(limit);
    if let Some(genre) = genre {
        criteria = criteria.with_genre(genre);
    }
    if let Some(min_rating) = min_rating {
        criteria = criteria.with_min_rating(min_rating);
    }
    if let Some(min_episodes) = min_episodes {
        criteria = criteria.with_min_episodes(min_episodes);
    }
    if let Some(max_episodes) = max_episodes {
        criteria = criteria.with_max_episodes(max_episodes);
    }
    if let Some(language) = language {
        criteria = criteria.with_language(language);
    }

    let recs = recommender.recommend(&criteria);
    if recs.is_empty() {
        println!("{}", "No shows match those constraints.".yellow());
        return;
    }

    println!("\n{}", "Recommended for you:".bold());
    for (rank, show) in recs.iter().enumerate() {
        println!("\n{} {}", format!("#{}", rank + 1).bold().blue(), show);
    }
}

/// Handle the 'search' command
fn handle_search(recommender: &ShowRecommender, title: &str) {
    let results = recommender.search_by_title(title);
    if results.is_empty() {
        println!("{}", format!("No titles matching '{title}'.").yellow());
        return;
    }

    println!(
        "\n{}",
        format!("{} title(s) matching '{}':", results.len(), title).bold()
    );
    for show in &results {
        println!("\n{show}");
    }
}

/// Handle the 'top' command
fn handle_top(recommender: &ShowRecommender, n: usize) {
    println!("\n{}", format!("Top {n} shows by rating:").bold());
    for (rank, show) in recommender.top_rated(n).iter().enumerate() {
        println!("\n{} {}", format!("#{}", rank + 1).bold().blue(), show);
    }
}

/// Handle the 'genres' command
fn handle_genres(recommender: &ShowRecommender) {
    let genres = recommender.all_genres();
    println!(
        "\n{}",
        format!("{} genres in the catalog:", genres.len()).bold()
    );
    for genre in &genres {
        println!("  {genre}");
    }
}

/// Handle the 'stats' command
fn handle_stats(recommender: &ShowRecommender, json: bool) -> Result<()> {
    let stats = recommender.statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n{}", "Catalog statistics:".bold());
    println!("  Shows:          {}", stats.total_shows);
    println!("  Episodes:       {}", stats.total_episodes);
    println!("  Average rating: {}/10", stats.avg_rating);
    println!("  Genres:         {}", stats.total_genres);
    Ok(())
}
