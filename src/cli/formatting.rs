//! Formatting utilities for `groovectl` output.

use std::collections::HashMap;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour on.
///
/// Fractions are truncated, negative values count as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Formats the playlist, marking the entry equal to `current` with `*`.
pub fn format_track_list(tracks: &[String], current: &str) -> String {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let marker = if !current.is_empty() && track == current {
                '*'
            } else {
                ' '
            };
            format!("{marker} {index:3}:{track}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Everything `groovectl status` shows.
#[derive(Debug, Clone, Default)]
pub struct StatusView {
    /// Display title
    pub title: String,
    /// Wire name of the playback status
    pub status: String,
    /// Track tags
    pub metadata: HashMap<String, String>,
    /// Position in seconds
    pub position: f64,
    /// Track length in seconds
    pub length: f64,
    /// Played share in percent
    pub percent: f64,
    /// Loop mode name
    pub loop_mode: String,
}

/// Formats the status report. Tags are sorted by name.
pub fn format_status(view: &StatusView) -> String {
    let mut lines = vec![format!("Title: {}", view.title), "Tags:".to_string()];

    let mut tags: Vec<_> = view.metadata.iter().collect();
    tags.sort();
    lines.extend(tags.into_iter().map(|(key, value)| format!(" {key}: {value}")));

    lines.push(format!(
        "[{}]   {}/{}   ({:.0}%)",
        view.status,
        format_duration(view.position),
        format_duration(view.length),
        view.percent
    ));
    lines.push(format!("loop: {}", view.loop_mode));

    lines.join("\n")
}
