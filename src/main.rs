//! grooved - music player daemon.
//!
//! Spawns mpv, runs the player core on top of it and exports the core on
//! the session bus until the player is told to quit or the process is
//! signalled.

use std::{error::Error, path::PathBuf, sync::Arc};

use clap::Parser;
use tokio::signal::unix::{SignalKind, signal};
use tracing::{Level, error, info, span, warn};
use zbus::Connection;

use grooved::{
    config::{Config, LogLevel},
    services::{BusService, FreedesktopNotifier, MpvIpc, Player, SqliteCatalog},
    tracing_config,
};

/// Command line of the daemon.
#[derive(Parser, Debug)]
#[command(name = "grooved", version, about = "Music player daemon built on mpv")]
struct Args {
    /// Configuration file, defaults to the grooved config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short = 'V', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.general.log_level
    };

    let _guard = tracing_config::init_daemon(level)?;
    let _span = span!(Level::INFO, "grooved").entered();
    info!("Starting grooved");

    if let Err(e) = run(config).await {
        error!(error = %e, "grooved failed");
        return Err(e);
    }

    info!("grooved stopped");
    Ok(())
}

async fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let connection = Connection::session().await?;

    let backend = MpvIpc::spawn(&config.player.mpv_options()?).await?;
    let player = Player::start(
        Arc::new(backend),
        Arc::new(SqliteCatalog::new()),
        Arc::new(FreedesktopNotifier::new(connection.clone())),
        config.player.player_options(),
    )
    .await?;

    let _service = BusService::start(connection, player.clone()).await?;

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = player.wait() => {}
        _ = interrupt.recv() => shutdown(&player, "SIGINT").await,
        _ = terminate.recv() => shutdown(&player, "SIGTERM").await,
    }

    Ok(())
}

async fn shutdown(player: &Player, signal: &str) {
    info!(signal, "Shutting down");

    if let Err(e) = player.quit().await {
        warn!(error = %e, "Could not ask the backend to quit");
        return;
    }

    player.wait().await;
}
