use crate::{cli::CommandResult, services::bus::GroovedPlayerProxy};

/// Starts or unpauses playback.
///
/// # Errors
///
/// Returns `CliError` if the daemon rejects the call.
pub async fn play(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.play().await?;
    Ok(String::new())
}

/// Pauses playback.
///
/// # Errors
///
/// Returns `CliError` if the daemon rejects the call.
pub async fn pause(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.pause().await?;
    Ok(String::new())
}

/// Toggles the pause status.
///
/// # Errors
///
/// Returns `CliError` if the daemon rejects the call.
pub async fn toggle(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.toggle().await?;
    Ok(String::new())
}

/// Skips to the next track.
///
/// # Errors
///
/// Returns `CliError` if there is no next track.
pub async fn next(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.next().await?;
    Ok(String::new())
}

/// Goes back to the previous track.
///
/// # Errors
///
/// Returns `CliError` if there is no previous track.
pub async fn prev(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.prev().await?;
    Ok(String::new())
}

/// Stops playback.
///
/// # Errors
///
/// Returns `CliError` if the daemon rejects the call.
pub async fn stop(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.stop().await?;
    Ok(String::new())
}

/// Seeks relative to the current position.
///
/// # Errors
///
/// Returns `CliError` if nothing is playing.
pub async fn seek(proxy: &GroovedPlayerProxy<'_>, seconds: i64) -> CommandResult {
    proxy.seek(seconds).await?;
    Ok(String::new())
}

/// Shuts the player down.
///
/// # Errors
///
/// Returns `CliError` if the daemon rejects the call.
pub async fn quit(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    proxy.quit().await?;
    Ok(String::new())
}
