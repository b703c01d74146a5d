//! Integration tests for loading the daemon configuration from disk.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use grooved::{
    GroovedError,
    config::{Config, LogLevel, ReplayGain},
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("grooved.toml");
    fs::write(&path, content).unwrap();
    path
}

mod loading {
    use super::*;

    #[test]
    fn loads_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[general]
log_level = "debug"

[player]
library = "/music/library.db"
notify = true
gapless = "weak"
replaygain = "album"
filters = ["lavfi=[dynaudnorm]"]
output = "pulse"
"#,
        );

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.general.log_level, LogLevel::Debug);
        assert_eq!(config.player.library, "/music/library.db");
        assert!(config.player.notify);
        assert_eq!(config.player.gapless.as_deref(), Some("weak"));
        assert_eq!(config.player.replaygain, Some(ReplayGain::Album));
        assert_eq!(config.player.filters, vec!["lavfi=[dynaudnorm]".to_string()]);
        assert_eq!(config.player.output.as_deref(), Some("pulse"));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let result = Config::load(Some(&path));

        assert!(matches!(result, Err(GroovedError::ConfigNotFound(p)) if p == path));
    }

    #[test]
    fn directory_cannot_be_read() {
        let dir = TempDir::new().unwrap();

        let result = Config::load_file(dir.path());

        assert!(matches!(result, Err(GroovedError::IoError { .. })));
    }
}

mod errors {
    use super::*;

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[player\nlibrary = ");

        let error = Config::load(Some(&path)).unwrap_err();

        match error {
            GroovedError::TomlParseError { location, .. } => {
                assert!(location.ends_with("grooved.toml"), "{location}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[player]\nshuffle = true\n");

        assert!(matches!(
            Config::load(Some(&path)),
            Err(GroovedError::TomlParseError { .. })
        ));
    }
}

mod backend_options {
    use super::*;

    #[test]
    fn file_settings_reach_mpv_arguments() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[player]
gapless = "yes"
replaygain = "track"
filters = ["volume=2", "acompressor"]
"#,
        );

        let args = Config::load(Some(&path))
            .unwrap()
            .player
            .mpv_options()
            .unwrap()
            .to_args();

        assert!(args.contains(&"--gapless-audio=yes".to_string()));
        assert!(args.contains(&"--replaygain=track".to_string()));
        assert!(args.contains(&"--af=volume=2,acompressor".to_string()));
        assert!(args.contains(&"--idle=yes".to_string()));
        assert!(args.contains(&"--video=no".to_string()));
    }
}
