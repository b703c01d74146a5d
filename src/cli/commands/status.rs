use crate::{
    cli::{
        CliError, CommandResult,
        formatting::{StatusView, format_status},
    },
    services::bus::GroovedPlayerProxy,
};

/// Shows title, tags, position and loop mode.
///
/// # Errors
///
/// Returns `CliError` if the daemon cannot be queried.
pub async fn status(proxy: &GroovedPlayerProxy<'_>) -> CommandResult {
    // position is unavailable while stopped
    let (position, percent) = proxy.track_position().await.unwrap_or((0.0, 0.0));

    let view = StatusView {
        title: proxy.track_title().await?,
        status: proxy.playback_status().await?,
        metadata: proxy.track_metadata().await?,
        position,
        length: proxy.track_length().await?,
        percent,
        loop_mode: proxy.loop_status().await?,
    };

    Ok(format_status(&view))
}

/// Sets the loop mode.
///
/// # Errors
///
/// Returns `CliError` if the daemon rejects the mode.
pub async fn set_loop(proxy: &GroovedPlayerProxy<'_>, mode: &str) -> CommandResult {
    proxy.set_loop_status(mode).await?;
    Ok(String::new())
}

/// Shows the volume, or sets it when `value` is given.
///
/// # Errors
///
/// Returns `CliError` if the value is negative or the daemon rejects it.
pub async fn volume(proxy: &GroovedPlayerProxy<'_>, value: Option<f64>) -> CommandResult {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => Err(CliError::InvalidArgument {
            arg: "value".to_string(),
            reason: "volume must be a non-negative number".to_string(),
        }),
        Some(value) => {
            proxy.set_volume(value).await?;
            Ok(String::new())
        }
        None => Ok(format!("{:.0}", proxy.volume().await?)),
    }
}
