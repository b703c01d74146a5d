//! Unit tests for the CLI module
//!
//! Tests argument parsing and output formatting. Nothing here talks to a
//! running daemon.

use std::collections::HashMap;

use clap::Parser;

use crate::cli::{
    Cli, CliError, Commands, LoopArg,
    commands::playlist::resolve_track,
    formatting::{StatusView, format_duration, format_error, format_status, format_track_list},
};

fn parse(args: &[&str]) -> Result<Commands, clap::Error> {
    let argv = std::iter::once("groovectl").chain(args.iter().copied());
    Cli::try_parse_from(argv).map(|cli| cli.command)
}

#[test]
fn parse_transport_commands() {
    assert_eq!(parse(&["play"]).unwrap(), Commands::Play);
    assert_eq!(parse(&["pause"]).unwrap(), Commands::Pause);
    assert_eq!(parse(&["toggle"]).unwrap(), Commands::Toggle);
    assert_eq!(parse(&["next"]).unwrap(), Commands::Next);
    assert_eq!(parse(&["prev"]).unwrap(), Commands::Prev);
    assert_eq!(parse(&["stop"]).unwrap(), Commands::Stop);
    assert_eq!(parse(&["quit"]).unwrap(), Commands::Quit);
}

#[test]
fn parse_add_without_tracks() {
    assert_eq!(parse(&["add"]).unwrap(), Commands::Add { tracks: vec![] });
}

#[test]
fn parse_add_with_tracks() {
    assert_eq!(
        parse(&["add", "a.flac", "http://radio/stream"]).unwrap(),
        Commands::Add {
            tracks: vec!["a.flac".to_string(), "http://radio/stream".to_string()]
        }
    );
}

#[test]
fn parse_load_with_and_without_append() {
    assert_eq!(
        parse(&["load", "list.m3u"]).unwrap(),
        Commands::Load {
            append: false,
            file: "list.m3u".to_string()
        }
    );
    assert_eq!(
        parse(&["load", "--append", "list.m3u"]).unwrap(),
        Commands::Load {
            append: true,
            file: "list.m3u".to_string()
        }
    );
}

#[test]
fn parse_negative_numbers() {
    assert_eq!(parse(&["rm", "-1"]).unwrap(), Commands::Rm { index: -1 });
    assert_eq!(parse(&["rm", "3"]).unwrap(), Commands::Rm { index: 3 });
    assert_eq!(parse(&["seek", "-10"]).unwrap(), Commands::Seek { seconds: -10 });
    assert_eq!(parse(&["seek", "30"]).unwrap(), Commands::Seek { seconds: 30 });
}

#[test]
fn parse_goto_rejects_negative_index() {
    assert!(parse(&["goto", "-1"]).is_err());
    assert_eq!(parse(&["goto", "2"]).unwrap(), Commands::Goto { index: 2 });
}

#[test]
fn parse_loop_modes() {
    assert_eq!(
        parse(&["loop", "force"]).unwrap(),
        Commands::Loop {
            mode: LoopArg::Force
        }
    );
    assert!(parse(&["loop", "bogus"]).is_err());
    assert!(parse(&["loop"]).is_err());
}

#[test]
fn loop_arg_wire_names() {
    assert_eq!(LoopArg::None.as_str(), "none");
    assert_eq!(LoopArg::Track.as_str(), "track");
    assert_eq!(LoopArg::List.as_str(), "list");
    assert_eq!(LoopArg::Force.as_str(), "force");
}

#[test]
fn parse_volume() {
    assert_eq!(parse(&["volume"]).unwrap(), Commands::Volume { value: None });
    assert_eq!(
        parse(&["volume", "55.5"]).unwrap(),
        Commands::Volume { value: Some(55.5) }
    );
}

#[test]
fn parse_rejects_unknown_command() {
    assert!(parse(&["shuffle"]).is_err());
    assert!(parse(&[]).is_err());
}

#[test]
fn format_duration_short_and_long() {
    assert_eq!(format_duration(0.0), "0:00");
    assert_eq!(format_duration(59.9), "0:59");
    assert_eq!(format_duration(61.0), "1:01");
    assert_eq!(format_duration(3599.0), "59:59");
    assert_eq!(format_duration(3661.0), "1:01:01");
}

#[test]
fn format_duration_clamps_invalid() {
    assert_eq!(format_duration(-5.0), "0:00");
    assert_eq!(format_duration(f64::NAN), "0:00");
}

#[test]
fn format_track_list_marks_current() {
    let tracks = vec!["/a.flac".to_string(), "/b.flac".to_string()];

    let output = format_track_list(&tracks, "/b.flac");

    assert_eq!(output, "    0:/a.flac\n*   1:/b.flac");
}

#[test]
fn format_track_list_without_current() {
    let tracks = vec!["/a.flac".to_string()];

    assert_eq!(format_track_list(&tracks, ""), "    0:/a.flac");
    assert_eq!(format_track_list(&[], ""), "");
}

#[test]
fn format_status_sorts_tags() {
    let view = StatusView {
        title: "Song (Artist)".to_string(),
        status: "play".to_string(),
        metadata: HashMap::from([
            ("title".to_string(), "Song".to_string()),
            ("artist".to_string(), "Artist".to_string()),
        ]),
        position: 65.0,
        length: 200.0,
        percent: 32.4,
        loop_mode: "list".to_string(),
    };

    let output = format_status(&view);

    assert_eq!(
        output,
        "Title: Song (Artist)\nTags:\n artist: Artist\n title: Song\n[play]   1:05/3:20   (32%)\nloop: list"
    );
}

#[test]
fn format_status_stopped() {
    let view = StatusView {
        status: "stop".to_string(),
        loop_mode: "none".to_string(),
        ..StatusView::default()
    };

    let output = format_status(&view);

    assert!(output.starts_with("Title: \nTags:\n[stop]   0:00/0:00   (0%)"));
}

#[test]
fn format_error_wraps_in_red() {
    let output = format_error("boom");
    assert!(output.contains("boom"));
    assert!(output.starts_with("\x1b[1m\x1b[31m"));
    assert!(output.ends_with("\x1b[0m"));
}

#[test]
fn resolve_track_passes_urls_through() {
    assert_eq!(
        resolve_track("http://radio.example/stream").unwrap(),
        "http://radio.example/stream"
    );
}

#[test]
fn resolve_track_makes_existing_files_absolute() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("song.flac");
    std::fs::write(&file, b"").unwrap();

    let resolved = resolve_track(file.to_str().unwrap()).unwrap();

    assert_eq!(resolved, file.display().to_string());
}

#[test]
fn method_errors_keep_daemon_message() {
    let error = CliError::Call("no next track".to_string());
    assert_eq!(error.to_string(), "no next track");
}
