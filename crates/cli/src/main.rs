use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::Recommender;
use export::{details_filename, favorites_to_csv, movie_details_to_csv};
use imaging::PosterResolver;
use model::{decode_favorites, FavoriteMovie, Movie, SearchFeed};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// cinetaste - movie taste profiling and recommendations
#[derive(Parser)]
#[command(name = "cinetaste")]
#[command(about = "Ranks a movie catalog against your favorites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against a favorites snapshot
    Recommend {
        /// Search-feed JSON file(s) feeding the catalog (repeatable)
        #[arg(long = "search-feed", required = true)]
        search_feeds: Vec<PathBuf>,

        /// Favorites snapshot JSON file (array of favorite records)
        #[arg(long)]
        favorites: PathBuf,
    },

    /// Export a favorites snapshot as CSV
    ExportFavorites {
        /// Favorites snapshot JSON file
        #[arg(long)]
        favorites: PathBuf,

        /// Output file path
        #[arg(long, default_value = "my-favorite-movies.csv")]
        out: PathBuf,
    },

    /// Export one movie's details as CSV
    ExportDetails {
        /// Search-feed JSON file containing the movie
        #[arg(long = "search-feed")]
        search_feed: PathBuf,

        /// Movie id to export
        #[arg(long)]
        id: String,

        /// Output directory (filename derives from the title)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Run a poster URL through the resolver
    ResolvePoster {
        /// Raw poster URL (omit to simulate a missing poster)
        #[arg(long)]
        url: Option<String>,

        /// Movie title, used for the placeholder when the URL is rejected
        #[arg(long)]
        title: String,

        /// Report these URLs as failed before resolving (repeatable)
        #[arg(long = "report-broken")]
        report_broken: Vec<String>,
    },
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

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            search_feeds,
            favorites,
        } => handle_recommend(&search_feeds, &favorites)?,
        Commands::ExportFavorites { favorites, out } => handle_export_favorites(&favorites, &out)?,
        Commands::ExportDetails {
            search_feed,
            id,
            out_dir,
        } => handle_export_details(&search_feed, &id, &out_dir)?,
        Commands::ResolvePoster {
            url,
            title,
            report_broken,
        } => handle_resolve_poster(url.as_deref(), &title, &report_broken),
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(search_feeds: &[PathBuf], favorites_path: &Path) -> Result<()> {
    let start = Instant::now();
    let recommender = Recommender::new();

    for path in search_feeds {
        let movies = load_search_feed(path)?;
        println!(
            "{} {} movies from {}",
            "✓".green(),
            movies.len(),
            path.display()
        );
        recommender.add_movies_to_catalog(movies);
    }

    let favorites = load_favorites(favorites_path)?;
    println!(
        "{} {} favorites from {}",
        "✓".green(),
        favorites.len(),
        favorites_path.display()
    );
    recommender.set_favorites(favorites);

    let recommendations = recommender.recommendations();
    println!(
        "{} catalog of {} ranked in {:?}\n",
        "✓".green(),
        recommender.catalog_len(),
        start.elapsed()
    );

    print_recommendations(&recommendations);
    Ok(())
}

/// Handle the 'export-favorites' command
fn handle_export_favorites(favorites_path: &Path, out: &Path) -> Result<()> {
    let favorites = load_favorites(favorites_path)?;
    let csv = favorites_to_csv(&favorites);
    std::fs::write(out, csv)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "{} Exported {} favorites to {}",
        "✓".green(),
        favorites.len(),
        out.display()
    );
    Ok(())
}

/// Handle the 'export-details' command
fn handle_export_details(search_feed: &Path, id: &str, out_dir: &Path) -> Result<()> {
    let movies = load_search_feed(search_feed)?;
    let movie = movies
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| anyhow!("Movie {} not found in {}", id, search_feed.display()))?;

    let out = out_dir.join(details_filename(&movie.title));
    std::fs::write(&out, movie_details_to_csv(movie))
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("{} Exported {} to {}", "✓".green(), movie.title, out.display());
    Ok(())
}

/// Handle the 'resolve-poster' command
fn handle_resolve_poster(url: Option<&str>, title: &str, report_broken: &[String]) {
    let resolver = PosterResolver::new();
    for failed in report_broken {
        resolver.report_broken(failed);
    }

    let resolved = resolver.resolve(url, title);
    if resolved.starts_with("data:image/svg+xml") {
        println!(
            "{} URL rejected, generated placeholder ({} bytes, {} blocked fingerprints)",
            "•".yellow(),
            resolved.len(),
            resolver.blocked_fingerprints()
        );
    } else {
        println!("{} URL accepted: {}", "✓".green(), resolved);
    }
}

fn load_search_feed(path: &Path) -> Result<Vec<Movie>> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read search feed {}", path.display()))?;
    let movies = SearchFeed::decode(&payload)
        .with_context(|| format!("Failed to decode search feed {}", path.display()))?;
    Ok(movies)
}

fn load_favorites(path: &Path) -> Result<Vec<FavoriteMovie>> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read favorites {}", path.display()))?;
    let favorites = decode_favorites(&payload)
        .with_context(|| format!("Failed to decode favorites {}", path.display()))?;
    Ok(favorites)
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Movie]) {
    if recommendations.is_empty() {
        println!("{}", "No recommendations (need favorites and a catalog).".yellow());
        return;
    }

    println!("{}", "Recommended for you:".bold().blue());
    for (rank, movie) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}]",
            (rank + 1).to_string().green(),
            movie.title,
            if movie.year.is_empty() { "?" } else { &movie.year },
            movie.genre.as_deref().unwrap_or("no genre")
        );
    }
}
