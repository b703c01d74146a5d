use super::BackendError;

/// Options passed to mpv on startup.
///
/// mpv only accepts most configuration before it initializes, so options are
/// collected here and handed to the process as `--name=value` arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MpvOptions {
    entries: Vec<(String, String)>,
}

impl MpvOptions {
    /// Options every grooved instance runs with: audio only, no user config,
    /// stay alive with an empty playlist.
    pub fn baseline() -> Self {
        let mut options = Self::default();
        for (name, value) in [
            ("config", "no"),
            ("video", "no"),
            ("sub-auto", "no"),
            ("terminal", "no"),
            ("idle", "yes"),
        ] {
            options.entries.push((name.to_string(), value.to_string()));
        }
        options
    }

    /// Adds or replaces an option.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidOption` if the name is empty, starts with
    /// a dash, or contains `=` or whitespace. Values the engine itself does
    /// not accept only surface when the player is spawned.
    pub fn set_option_string(&mut self, name: &str, value: &str) -> Result<(), BackendError> {
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.starts_with('-') {
            Some("name must not start with '-'")
        } else if name.contains('=') || name.chars().any(char::is_whitespace) {
            Some("name must not contain '=' or whitespace")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(BackendError::InvalidOption {
                name: name.to_string(),
                reason: reason.to_string(),
            });
        }

        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }

        Ok(())
    }

    /// Returns the value set for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the options as mpv command line arguments.
    pub fn to_args(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, value)| format!("--{name}={value}"))
            .collect()
    }
}
