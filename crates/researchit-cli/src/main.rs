//! Researchit - discover research papers from the terminal
//!
//! A TUI front end for a remote paper-search service:
//! - Fullscreen carousel over a curated slide deck, one gesture per slide
//! - Scroll-synced browse list with abstract/summary side panels
//! - Free-text semantic search with result cards

use anyhow::Result;
use clap::{Parser, Subcommand};

use researchit_core::constants::search as search_defaults;
use researchit_core::{paths, Config, SearchClient};

mod tui;

/// Researchit - research paper discovery
#[derive(Parser)]
#[command(name = "researchit")]
#[command(about = "Discover knowledge, explore research", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search service base URL (overrides config)
    #[arg(short, long)]
    server: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Browse,

    /// Run a one-shot search and print the results
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results
        #[arg(short = 'k', long, default_value_t = search_defaults::DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Check whether the search service is reachable
    Health,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Print one result card to stdout
fn print_result(index: usize, result: &researchit_core::PaperResult) {
    let marker = if result.score > search_defaults::STRONG_SCORE {
        "**"
    } else if result.score > search_defaults::FAIR_SCORE {
        " *"
    } else {
        "  "
    };

    match &result.metadata {
        Some(meta) => {
            println!("{marker} {index}. {}", meta.title);
            println!("      {}  score {:.4}", result.arxiv_id, result.score);
            if !meta.authors.is_empty() {
                let shown: Vec<&str> = meta.authors.iter().take(3).map(String::as_str).collect();
                let suffix = if meta.authors.len() > 3 {
                    format!(" et al. ({} authors)", meta.authors.len())
                } else {
                    String::new()
                };
                println!("      {}{}", shown.join(", "), suffix);
            }
            if !meta.categories.is_empty() {
                println!("      [{}]", meta.categories.join(", "));
            }
            println!("      {}", result.arxiv_url());
        }
        None => {
            println!("{marker} {index}. {}  score {:.4}", result.arxiv_id, result.score);
            println!("      (metadata not available)");
            println!("      {}", result.arxiv_url());
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up TUI)
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("researchit.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    tracing::info!(server = %config.server_url, "Starting researchit");

    match cli.command {
        Some(Commands::Search { query, top_k }) => {
            let client = SearchClient::new(&config.server_url)?;
            match client.smart_search(&query, top_k).await {
                Ok(response) => {
                    println!(
                        "Found {} papers for \"{}\" in {:.0}ms{}",
                        response.results.len(),
                        response.query,
                        response.search_time_ms,
                        response
                            .mode_used
                            .as_deref()
                            .map(|m| format!(" ({m} mode)"))
                            .unwrap_or_default()
                    );
                    println!();
                    for (i, result) in response.results.iter().enumerate() {
                        print_result(i + 1, result);
                    }
                    if response.results.is_empty() {
                        println!("No papers found. Try different keywords.");
                    }
                }
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Health) => {
            let client = SearchClient::new(&config.server_url)?;
            match client.health().await {
                Ok(health) => {
                    println!("Service at {} is {}", config.server_url, health.status);
                    if let Some(count) = health.indexed_papers {
                        println!("Indexed papers: {count}");
                    }
                }
                Err(e) => {
                    eprintln!("Service unreachable: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Browse) | None => {
            let mut app = tui::App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}
