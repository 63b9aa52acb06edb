use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showreel_core::{AppConfig, Catalog};

mod commands;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(author, version, about = "A terminal showreel of case studies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List the case studies in the catalog
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Drive the carousel without a terminal and print each resulting view
    Inspect {
        /// Viewport width in pixels
        #[arg(short = 'w', long)]
        width: u32,
        /// Comma-separated inputs: left, right, prev, next, swipe-left,
        /// swipe-right, dot:<group>, window:<index>, resize:<px>
        #[arg(short = 'i', long)]
        input: Option<String>,
        /// Override the number of slides instead of using the catalog
        #[arg(long)]
        slides: Option<usize>,
        /// Print one JSON object per step
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle commands
    match cli.command {
        // Runs without loading the config so it can replace a broken file
        Some(Commands::InitConfig { force }) => commands::init_config::run(force),
        Some(Commands::Run) | None => {
            let config = load_config(true)?;
            let catalog = load_catalog(&config)?;
            commands::run::run(config, catalog)
        }
        Some(Commands::List { json }) => {
            let config = load_config(false)?;
            let catalog = load_catalog(&config)?;
            commands::list::run(&catalog, json)
        }
        Some(Commands::Inspect {
            width,
            input,
            slides,
            json,
        }) => {
            let config = load_config(false)?;
            let len = match slides {
                Some(len) => len,
                None => load_catalog(&config)?.len(),
            };
            commands::inspect::run(&config, len, width, input.as_deref().unwrap_or(""), json)
        }
    }
}

/// Load configuration and start logging. `interactive` sends logs to a file.
fn load_config(interactive: bool) -> Result<Arc<AppConfig>> {
    let config = Arc::new(AppConfig::load()?);
    init_logging(&config, interactive)?;
    Ok(config)
}

/// `RUST_LOG` wins over `general.log_level`. The TUI logs to a file so it
/// doesn't draw over the alternate screen.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let path = config.catalog_path();
    Ok(Catalog::load_or_builtin(path.as_deref())?)
}

