use serde_json::Value;

use super::Node;

/// Property mpv reports `true` for while it has nothing to play.
pub(crate) const IDLE_ACTIVE_PROPERTY: &str = "idle-active";

/// An asynchronous event emitted by mpv.
///
/// Events are delivered in emission order, exactly once each.
#[derive(Debug, Clone, PartialEq)]
pub enum MpvEvent {
    /// The player has no file loaded and is waiting for one.
    Idle,

    /// A new playlist entry started loading.
    StartFile,

    /// The current playlist entry finished or was stopped.
    EndFile {
        /// Why playback ended (`eof`, `stop`, `quit`, `error`, `redirect`).
        reason: Option<String>,
    },

    /// An observed property changed value.
    PropertyChange {
        /// Property name as passed to `observe_property`.
        name: String,
        /// New value, [`Node::None`] when the property is unavailable.
        data: Node,
    },

    /// A log line from the player core.
    LogMessage {
        /// Module that logged the message.
        prefix: String,
        /// mpv log level name (`fatal`, `error`, `warn`, `info`, `v`, `debug`, `trace`).
        level: String,
        /// Message text without trailing newline.
        text: String,
    },

    /// The player is terminating. No further events follow.
    Shutdown,

    /// Any event the control core does not act on.
    Other(String),
}

impl MpvEvent {
    /// Parses one JSON IPC message carrying an `event` field.
    ///
    /// Returns `None` for messages that are not events (command replies).
    pub fn from_json(message: &Value) -> Option<Self> {
        let name = message.get("event")?.as_str()?;

        let event = match name {
            "start-file" => Self::StartFile,
            "end-file" => Self::EndFile {
                reason: message
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            "property-change" => {
                let property = message.get("name").and_then(Value::as_str).unwrap_or("");
                let data = message.get("data").cloned().map(Node::from).unwrap_or_default();

                // idle detection goes through the observed property; the
                // legacy `idle` event is not relied upon
                if property == IDLE_ACTIVE_PROPERTY {
                    return Some(match data.as_bool() {
                        Some(true) => Self::Idle,
                        _ => Self::Other(format!("{IDLE_ACTIVE_PROPERTY}={data}")),
                    });
                }

                Self::PropertyChange {
                    name: property.to_string(),
                    data,
                }
            }
            "log-message" => {
                let field = |key: &str| {
                    message
                        .get(key)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };

                Self::LogMessage {
                    prefix: field("prefix"),
                    level: field("level"),
                    text: field("text").trim_end_matches('\n').to_string(),
                }
            }
            "shutdown" => Self::Shutdown,
            other => Self::Other(other.to_string()),
        };

        Some(event)
    }
}
