use std::{
    env, fs,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

const APP_NAME: &str = "grooved";
const CONFIG_FILE: &str = "config.toml";

/// Locations grooved reads from and writes to.
///
/// Configuration follows the XDG Base Directory layout, runtime data such
/// as logs lives in `~/.grooved`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// `$XDG_CONFIG_HOME/grooved`, or `$HOME/.config/grooved`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let base = match env::var_os("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => home()?.join(".config"),
        };

        Ok(base.join(APP_NAME))
    }

    /// Default configuration file, `config.toml` in [`ConfigPaths::config_dir`].
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// `~/.grooved`, created on first use.
    ///
    /// # Errors
    /// Returns an error if `HOME` is unset or the directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        ensure_dir(home()?.join(format!(".{APP_NAME}")))
    }

    /// `~/.grooved/logs`, created on first use.
    ///
    /// # Errors
    /// Returns an error if `HOME` is unset or the directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        ensure_dir(Self::app_data_dir()?.join("logs"))
    }

    /// Expands a leading `~` to the home directory. Other paths, and every
    /// path when `HOME` is unset, are returned unchanged.
    pub fn expand_user(path: &str) -> PathBuf {
        match home() {
            Ok(home) => expand_with(path, &home),
            Err(_) => PathBuf::from(path),
        }
    }
}

fn home() -> Result<PathBuf, Error> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, Error> {
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn expand_with(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => home.to_path_buf(),
        Some(rest) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        // `~user` forms are not expanded
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_alone_is_home() {
        assert_eq!(expand_with("~", Path::new("/home/me")), PathBuf::from("/home/me"));
    }

    #[test]
    fn tilde_prefix_is_joined_to_home() {
        assert_eq!(
            expand_with("~/.config/beets/library.db", Path::new("/home/me")),
            PathBuf::from("/home/me/.config/beets/library.db")
        );
    }

    #[test]
    fn other_paths_are_unchanged() {
        let home = Path::new("/home/me");

        assert_eq!(expand_with("/music/lib.db", home), PathBuf::from("/music/lib.db"));
        assert_eq!(expand_with("lib.db", home), PathBuf::from("lib.db"));
        assert_eq!(expand_with("~other/lib.db", home), PathBuf::from("~other/lib.db"));
    }
}
