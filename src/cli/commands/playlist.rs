use std::path::Path;

use crate::{
    cli::{CliError, CommandResult, formatting::format_track_list},
    services::bus::GroovedPlayerProxy,
};

/// Appends tracks. Existing local files are sent as absolute paths,
/// anything else (URLs, paths on other hosts) is passed through. With no
/// tracks the daemon picks a random one.
///
/// # Errors
///
/// Returns `CliError` if a path cannot be resolved or the daemon rejects a
/// track. Tracks before the failing one stay appended.
pub async fn add(proxy: &GroovedPlayerProxy<'_>, tracks: &[String]) -> CommandResult {
    if tracks.is_empty() {
        proxy.add_track("").await?;
        return Ok(String::new());
    }

    for track in tracks {
        let track = resolve_track(track)?;
        proxy.add_track(&track).await?;
    }

    Ok(String::new())
}

/// Loads a playlist file, replacing the tracklist unless `append` is set.
///
/// # Errors
///
/// Returns `CliError` if the daemon cannot load the list.
pub async fn load(proxy: &GroovedPlayerProxy<'_>, file: &str, append: bool) -> CommandResult {
    if !append {
        proxy.stop().await?;
    }

    let file = resolve_track(file)?;
    proxy.add_list(&file).await?;
    Ok(String::new())
}

/// Skips to a tracklist entry.
///
/// # Errors
///
/// Returns `CliError` if the index is out of range.
pub async fn goto(proxy: &GroovedPlayerProxy<'_>, index: u64) -> CommandResult {
    proxy.goto_track(index).await?;
    Ok(String::new())
}

/// Removes a tracklist entry, the current track for negative indices.
///
/// # Errors
///
/// Returns `CliError` if the entry does not exist.
pub async fn rm(proxy: &GroovedPlayerProxy<'_>, index: i64) -> CommandResult {
    proxy.remove_track(index).await?;
    Ok(String::new())
}

/// Lists the tracklist with the current track marked.
///
/// # Errors
///
/// Returns `CliError` if the tracklist cannot be read.
pub async fn ls(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    let tracks = proxy.tracks().await?;
    let current = proxy.track_path().await.unwrap_or_default();

    Ok(format_track_list(&tracks, &current))
}

pub(crate) fn resolve_track(track: &str) -> Result<String, CliError> {
    let path = Path::new(track);
    if !path.exists() {
        return Ok(track.to_string());
    }

    std::path::absolute(path)
        .map(|absolute| absolute.display().to_string())
        .map_err(|e| CliError::InvalidArgument {
            arg: track.to_string(),
            reason: e.to_string(),
        })
}
