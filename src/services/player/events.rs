use tokio::sync::watch;
use tracing::{debug, error, info, trace, warn};

use crate::services::mpv::{MpvEvent, Node};

use super::{
    Notification, PlaybackStatus, Player,
    state::{PlayerState, Step, Trigger, plan},
};

const NOTIFY_TITLE: &str = "Now Playing:";
const NOTIFY_ICON: &str = "media-playback-start";

impl Player {
    /// Processes backend events one at a time until the backend shuts down.
    pub(super) async fn run_event_loop(self, finished: watch::Sender<bool>) {
        loop {
            // waiting happens outside the lock so commands keep flowing
            let event = self.backend.wait_event().await;
            trace!(?event, "Backend event");

            if !self.handle_event(event).await {
                break;
            }
        }

        let _ = finished.send(true);
        info!("Event loop finished");
    }

    /// Returns `false` once no further events will arrive.
    async fn handle_event(&self, event: MpvEvent) -> bool {
        let mut state = self.state.lock().await;

        match event {
            MpvEvent::Idle => self.on_idle(&mut state).await,
            MpvEvent::StartFile => self.on_start_file(&mut state),
            MpvEvent::PropertyChange { name, data } => match name.as_str() {
                "pause" => self.on_pause_change(&mut state, &data).await,
                "metadata" => self.on_metadata_change(&state, &data).await,
                "playlist" => self.hub.publish(Notification::TrackListChanged),
                "volume" => self.hub.publish(Notification::VolumeChanged),
                other => trace!(property = other, "Unhandled property change"),
            },
            MpvEvent::LogMessage {
                prefix,
                level,
                text,
            } => log_backend_message(&prefix, &level, &text),
            MpvEvent::EndFile { reason } => debug!(?reason, "File ended"),
            MpvEvent::Shutdown => {
                state.terminated = true;
                info!("Backend shut down");
                return false;
            }
            MpvEvent::Other(name) => trace!(event = %name, "Ignoring event"),
        }

        true
    }

    async fn on_idle(&self, state: &mut PlayerState) {
        match plan(state.status, Trigger::Idle) {
            Ok(Step::AutoAdvance) => {
                if let Err(e) = self.auto_advance(state).await {
                    warn!(error = %e, "Could not continue playback, stopping");
                    state.awaiting_start = false;
                    self.enter(state, PlaybackStatus::Stopped);
                }
            }
            Ok(_) => debug!("Idle while stopped"),
            Err(e) => debug!(error = %e, "Ignoring idle"),
        }
    }

    fn on_start_file(&self, state: &mut PlayerState) {
        let first = !state.started;
        state.started = true;

        if !first && !state.awaiting_start {
            trace!("File started, status unchanged");
            return;
        }

        if let Ok(Step::Enter(status)) = plan(state.status, Trigger::FileStarted) {
            self.enter(state, status);
        }
        state.awaiting_start = false;
    }

    async fn on_pause_change(&self, state: &mut PlayerState, data: &Node) {
        if !state.started {
            trace!("Pause change before first file");
            return;
        }

        let reported = data.as_bool().unwrap_or(false);
        if let Err(e) = plan(state.status, Trigger::PauseObserved(reported)) {
            debug!(error = %e, "Ignoring pause change");
            return;
        }

        let paused = match self.backend.get_property("pause").await {
            Ok(node) => node.as_bool().unwrap_or(reported),
            Err(e) => {
                warn!(error = %e, "Could not read pause state");
                reported
            }
        };

        if let Ok(Step::Enter(status)) = plan(state.status, Trigger::PauseObserved(paused)) {
            self.enter(state, status);
        }
    }

    async fn on_metadata_change(&self, state: &PlayerState, data: &Node) {
        if !state.started {
            return;
        }

        self.hub.publish(Notification::TrackChanged);

        if !self.options.notify || *data == Node::None {
            return;
        }

        let title = match self.query_title().await {
            Ok(title) if !title.is_empty() => title,
            Ok(_) => return,
            Err(e) => {
                debug!(error = %e, "No title to notify");
                return;
            }
        };

        // delivery must not hold up the event loop
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(NOTIFY_TITLE, &title, NOTIFY_ICON).await {
                warn!(error = %e, "Could not send desktop notification");
            }
        });
    }
}

/// Re-emits an mpv log line at the matching level.
fn log_backend_message(prefix: &str, level: &str, text: &str) {
    match level {
        "fatal" | "error" => error!(target: "mpv", module = prefix, "{text}"),
        "warn" => warn!(target: "mpv", module = prefix, "{text}"),
        "info" => info!(target: "mpv", module = prefix, "{text}"),
        "v" | "debug" => debug!(target: "mpv", module = prefix, "{text}"),
        _ => trace!(target: "mpv", module = prefix, "{text}"),
    }
}
