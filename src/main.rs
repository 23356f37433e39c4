use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use slides::config::ViewerConfig;
use slides::deck::Deck;
use slides::tui::app::TuiApp;
use slides::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "slides", about = "Terminal slide viewer. Arrows to move, q to quit.")]
struct Cli {
    /// Deck file (YAML) to show instead of the built-in deck
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Config file to use instead of ~/.slides and .slides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Switch slides without the slide-in animation
    #[arg(long)]
    no_animation: bool,

    /// Print the deck outline and exit
    #[arg(long)]
    outline: bool,

    /// Write logs to this file (the viewer owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Filter used when `RUST_LOG` is unset, empty or unparsable.
const DEFAULT_LOG_DIRECTIVES: &str = "slides=warn";

/// Build the log filter from `RUST_LOG`, falling back to warnings only.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::from_file(path)?,
        None => ViewerConfig::load(),
    };
    if cli.no_animation {
        config.transition_ms = 0;
    }

    let deck = match cli.deck.as_ref().or(config.deck.as_ref()) {
        Some(path) => Deck::load(path)
            .with_context(|| format!("failed to load deck {}", path.display()))?,
        None => Deck::builtin(),
    };

    if cli.outline {
        println!("{}", deck.outline());
        return Ok(());
    }

    info!(slides = deck.len(), transition_ms = config.transition_ms, "starting viewer");
    let mut app = TuiApp::new(deck, config.transition());
    run_tui(&mut app, config.mouse).await
}
