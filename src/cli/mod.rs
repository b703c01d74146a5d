//! `groovectl` command implementations.
//!
//! Each invocation connects to the daemon on the session bus, runs exactly
//! one command and returns the text to print.

mod args;
pub mod commands;
pub mod formatting;
mod types;

#[cfg(test)]
mod tests;

pub use args::{Cli, Commands, LoopArg};
pub use types::{CliError, CommandResult};

use tracing::debug;
use zbus::Connection;

use crate::services::bus::GroovedPlayerProxy;
use commands::{playlist, status, transport};

/// Connects to the daemon and runs `command`.
///
/// # Errors
///
/// Returns `CliError::Connection` if the daemon is not reachable, or the
/// command's own error.
pub async fn run(command: Commands) -> CommandResult {
    let connection = Connection::session()
        .await
        .map_err(CliError::Connection)?;
    let proxy = GroovedPlayerProxy::new(&connection)
        .await
        .map_err(CliError::Connection)?;

    debug!(?command, "Running command");
    execute(&proxy, command).await
}

/// Runs `command` against an already connected proxy.
///
/// # Errors
///
/// Returns the command's error.
pub async fn execute(proxy: &GroovedPlayerProxy<'_>, command: Commands) -> CommandResult {
    match command {
        Commands::Play => transport::play(proxy).await,
        Commands::Pause => transport::pause(proxy).await,
        Commands::Toggle => transport::toggle(proxy).await,
        Commands::Next => transport::next(proxy).await,
        Commands::Prev => transport::prev(proxy).await,
        Commands::Stop => transport::stop(proxy).await,
        Commands::Seek { seconds } => transport::seek(proxy, seconds).await,
        Commands::Quit => transport::quit(proxy).await,
        Commands::Add { tracks } => playlist::add(proxy, &tracks).await,
        Commands::Load { append, file } => playlist::load(proxy, &file, append).await,
        Commands::Goto { index } => playlist::goto(proxy, index).await,
        Commands::Rm { index } => playlist::rm(proxy, index).await,
        Commands::Ls => playlist::ls(proxy).await,
        Commands::Status => status::status(proxy).await,
        Commands::Loop { mode } => status::set_loop(proxy, mode.as_str()).await,
        Commands::Volume { value } => status::volume(proxy, value).await,
    }
}
