use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use authorlens::catalog::client::OpenLibraryClient;
use authorlens::catalog::works::PageOptions;
use authorlens::config::Config;
use authorlens::documents::{write_json, CollectionDocument, ThemeDocument};
use authorlens::output::ReportPaths;

/// Authorlens: compare authors by the subjects of their books.
///
/// Collects an author's works and subject labels from Open Library, and
/// compares two authors' subject distributions.
#[derive(Parser)]
#[command(name = "authorlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect an author's works and subjects as JSON
    Collect {
        /// Author name (e.g. "Agatha Christie") or author key (e.g. OL34184A)
        author: String,

        /// API page size (default: 100)
        #[arg(long, default_value = "100")]
        page_size: u32,

        /// Maximum number of pages to fetch (default: 200)
        #[arg(long, default_value = "200")]
        max_pages: u32,

        /// Seconds to sleep between page requests (default: 0.2)
        #[arg(long, default_value = "0.2")]
        sleep: f64,

        /// Write the document here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Aggregate a collection document into per-subject counts
    Themes {
        /// Collection document written by `collect`
        collection: PathBuf,

        /// Write the theme document here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare two authors' theme documents
    Compare {
        /// Theme document for author 1
        author1_theme: PathBuf,

        /// Theme document for author 2
        author2_theme: PathBuf,

        /// Top rows to print (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,

        /// Directory for the CSV tables and report (default: current directory)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging goes to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("authorlens=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect {
            author,
            page_size,
            max_pages,
            sleep,
            output,
        } => {
            let config = Config::load()?;
            config.require_catalog()?;

            if page_size == 0 {
                anyhow::bail!("--page-size must be at least 1");
            }
            let delay = Duration::try_from_secs_f64(sleep)
                .context("--sleep must be a non-negative number of seconds")?;
            let options = PageOptions {
                page_size,
                max_pages,
                delay,
            };

            let client = OpenLibraryClient::new(&config.openlibrary_url, &config.user_agent)?;
            let document =
                authorlens::pipeline::collect::run(&client, &author, &options).await?;

            emit_json(output.as_deref(), &document)?;
        }

        Commands::Themes { collection, output } => {
            let document = CollectionDocument::load(&collection)?;
            let themes = ThemeDocument::from_collection(&document);
            info!(
                author_key = %document.author_key,
                subjects = themes.themes.len(),
                "Aggregated themes"
            );
            emit_json(output.as_deref(), &themes)?;
        }

        Commands::Compare {
            author1_theme,
            author2_theme,
            top,
            out_dir,
        } => {
            let paths = ReportPaths::in_dir(&out_dir);
            let report =
                authorlens::pipeline::compare::run(&author1_theme, &author2_theme, top, &paths)?;
            println!(
                "\n{}",
                format!(
                    "Wrote {} and {}",
                    report.artifacts.join(", "),
                    paths.report.display()
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

/// Write pretty JSON to `path`, or to stdout when no path is given.
fn emit_json<T: serde::Serialize>(path: Option<&std::path::Path>, value: &T) -> Result<()> {
    match path {
        Some(path) => {
            write_json(path, value)?;
            info!(path = %path.display(), "Wrote document");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
