// mixtape - playlist editor in the terminal
// Edit by hand, or relay assistant actions with `ask`, and watch the list update

use anyhow::Result;
use clap::Parser;
use mixtape::{
    config::{Config, LoggingConfig},
    session::PlaylistSession,
    shell::{render, Shell, ShellReply},
};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mixtape")]
#[command(about = "Build a playlist by hand or by asking an assistant")]
struct Args {
    /// Config file to use instead of the one in the user config dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playlist name for this session (overrides config)
    #[arg(long)]
    name: Option<String>,

    /// Enable developer logging (stderr + debug output)
    #[arg(long)]
    dev: bool,
}

fn init_logging(logging: &LoggingConfig, dev: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&logging.directory)?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&logging.directory, "mixtape.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the config filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);
    let stderr_layer = dev.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config - falls back to defaults if missing
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Keep the guard alive so buffered log lines get flushed on exit
    let _guard = init_logging(&config.logging, args.dev)?;

    let name = args.name.unwrap_or_else(|| config.playlist.name.clone());
    info!("🎵 mixtape starting with playlist '{}'", name);

    let session = PlaylistSession::new(name);
    spawn_event_logger(&session);

    println!("🎵 {}", config.assistant.title);
    println!("{}", config.assistant.greeting);
    println!("(type 'help' for commands)");
    println!();
    println!("{}", render(&session.snapshot().await));

    let shell = Shell::new(session);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match shell.handle_line(&line).await {
            ShellReply::Print(text) if text.is_empty() => {}
            ShellReply::Print(text) => println!("{}", text),
            ShellReply::Quit => break,
        }
    }

    info!("mixtape shutting down");
    Ok(())
}

// Follows the change stream like the page would, for the log
fn spawn_event_logger(session: &PlaylistSession) {
    let mut events = session.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!("Playlist changed (v{}): {:?}", event.version(), event),
                Err(RecvError::Lagged(missed)) => warn!("Event logger fell behind, skipped {} events", missed),
                Err(RecvError::Closed) => break,
            }
        }
    });
}
