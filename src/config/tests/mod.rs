//! Unit tests for config module
//!
//! Tests configuration types, defaults, and backend option mapping.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::{
    GroovedError,
    config::{Config, LogLevel, PlayerConfig, ReplayGain},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(config.player.library.is_empty());
    assert!(!config.player.notify);
}

#[test]
fn config_empty_toml() {
    let config = Config::parse("", None).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [player]
        library = "/music/library.db"
        notify = true
        gapless = "weak"
        replaygain = "album"
        filters = ["lavfi=[loudnorm]", "scaletempo"]
        output = "pulse"
        cache = "auto"
        scripts = ["/etc/grooved/mpris.lua"]
    "#;

    let config = Config::parse(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.player.library, "/music/library.db");
    assert!(config.player.notify);
    assert_eq!(config.player.gapless.as_deref(), Some("weak"));
    assert_eq!(config.player.replaygain, Some(ReplayGain::Album));
    assert_eq!(config.player.filters.len(), 2);
    assert_eq!(config.player.output.as_deref(), Some("pulse"));
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::parse(
        r#"
        [player]
        library = "/music/library.db"
        filters = ["scaletempo"]
        "#,
        None,
    )
    .unwrap();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = Config::parse(&toml_str, None).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_unknown_fields() {
    let result = Config::parse(
        r#"
        [player]
        volume = 50
        "#,
        None,
    );

    match result {
        Err(GroovedError::TomlParseError { location, details }) => {
            assert_eq!(location, "<inline>");
            assert!(details.contains("volume"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn config_unknown_section() {
    assert!(Config::parse("[modules]\n", None).is_err());
}

#[test]
fn config_invalid_values() {
    assert!(Config::parse("[general]\nlog_level = \"loud\"\n", None).is_err());
    assert!(Config::parse("[player]\nreplaygain = \"mix\"\n", None).is_err());
    assert!(Config::parse("[player]\nnotify = \"yes\"\n", None).is_err());
}

#[test]
fn mpv_options_include_baseline_and_configured_values() {
    let player = PlayerConfig {
        gapless: Some("weak".to_string()),
        replaygain: Some(ReplayGain::Track),
        filters: vec!["scaletempo".to_string(), "drc".to_string()],
        output: Some("alsa".to_string()),
        ..PlayerConfig::default()
    };

    let options = player.mpv_options().unwrap();

    assert_eq!(options.get("idle"), Some("yes"));
    assert_eq!(options.get("gapless-audio"), Some("weak"));
    assert_eq!(options.get("replaygain"), Some("track"));
    assert_eq!(options.get("af"), Some("scaletempo,drc"));
    assert_eq!(options.get("ao"), Some("alsa"));
    assert_eq!(options.get("cache"), None);
}

#[test]
fn player_options_carry_library_and_notify() {
    let player = PlayerConfig {
        library: "/music/library.db".to_string(),
        notify: true,
        ..PlayerConfig::default()
    };

    let options = player.player_options();

    assert_eq!(options.library, "/music/library.db");
    assert!(options.notify);
}

#[test]
fn log_level_display_matches_serde_names() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let toml_str = format!("[general]\nlog_level = \"{level}\"\n");
        let config = Config::parse(&toml_str, None).unwrap();
        assert_eq!(config.general.log_level, level);
    }
}
