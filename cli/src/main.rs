use anyhow::{anyhow, Context, Result};
use clap::Parser;
use folio_core::{config::parse_level, Config, EventBus, Interpreter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Portfolio in an editor-styled terminal UI
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Args {
    /// JSON content file replacing the built-in sample
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Directory holding static assets such as the resume
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Directory downloads are copied into
    #[arg(long, value_name = "DIR")]
    downloads: Option<PathBuf>,

    /// error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Run a terminal command and print the session instead of starting the UI (repeatable)
    #[arg(long = "exec", value_name = "COMMAND")]
    exec: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = args.content {
        config.content_path = Some(path);
    }
    if let Some(dir) = args.assets {
        config.asset_dir = dir;
    }
    if let Some(dir) = args.downloads {
        config.download_dir = dir;
    }
    if let Some(level) = &args.log_level {
        config.log_level = parse_level(level).ok_or_else(|| anyhow!("invalid log level '{}'", level))?;
    }

    // Only log to stderr so the UI and --exec output stay clean
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();
    info!("Starting folio");

    let content = Arc::new(config.load_content().context("failed to load portfolio content")?);
    let effects = Arc::new(config.effects());

    if !args.exec.is_empty() {
        let mut interpreter = Interpreter::new(content, effects);
        for command in &args.exec {
            interpreter.submit(command);
        }
        for line in interpreter.history().lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    // Create event bus for communication with background tasks
    let event_bus = EventBus::new();
    let relay = config.relay();

    // Create and run the TUI application
    let mut app = folio_tui::App::new(content, effects, relay, event_bus);
    app.run().await?;

    info!("folio shutting down");
    Ok(())
}
