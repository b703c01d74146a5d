use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
    process::Stdio,
    sync::{
        Arc, Mutex as StdMutex,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{
        UnixStream,
        unix::{OwnedReadHalf, OwnedWriteHalf},
    },
    process::{Child, Command},
    sync::{Mutex, mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{debug, info, instrument, warn};

use super::{Backend, BackendError, MpvEvent, MpvOptions, Node};

const MPV_BINARY: &str = "mpv";
const SOCKET_CONNECT_ATTEMPTS: u32 = 50;
const SOCKET_CONNECT_INTERVAL: Duration = Duration::from_millis(100);
const LOG_LEVEL: &str = "warn";

type Reply = Result<Node, BackendError>;
type PendingReplies = Arc<StdMutex<HashMap<u64, oneshot::Sender<Reply>>>>;

/// mpv driven over its JSON IPC socket.
///
/// One reader task owns the read half of the socket. Replies are routed to
/// the waiting request by `request_id`, everything else is an event and goes
/// into the queue drained by [`Backend::wait_event`].
pub struct MpvIpc {
    writer: Mutex<OwnedWriteHalf>,
    pending: PendingReplies,
    closed: Arc<AtomicBool>,
    next_request_id: AtomicU64,
    next_observer_id: AtomicU64,
    events: Mutex<mpsc::UnboundedReceiver<MpvEvent>>,
    reader_handle: JoinHandle<()>,
    _process: Option<Child>,
    owned_socket: Option<PathBuf>,
}

impl MpvIpc {
    /// Starts an mpv process with `options` and connects to it.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Spawn` if mpv cannot be executed, exits during
    /// startup (typically because it rejected an option), or never opens its
    /// IPC socket.
    #[instrument(skip(options))]
    pub async fn spawn(options: &MpvOptions) -> Result<Self, BackendError> {
        let socket_path =
            env::temp_dir().join(format!("grooved-mpv-{}.sock", std::process::id()));
        let _ = std::fs::remove_file(&socket_path);

        let mut child = Command::new(MPV_BINARY)
            .args(options.to_args())
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| BackendError::Spawn(format!("failed to run {MPV_BINARY}: {e}")))?;

        let stream = Self::wait_for_socket(&mut child, &socket_path).await?;
        info!(socket = %socket_path.display(), "Connected to mpv");

        let mut ipc = Self::from_stream(stream, Some(child));
        ipc.owned_socket = Some(socket_path);
        ipc.command(&["request_log_messages", LOG_LEVEL]).await?;

        Ok(ipc)
    }

    /// Connects to an mpv instance already listening on `socket_path`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Io` if the socket cannot be opened.
    pub async fn connect(socket_path: &Path) -> Result<Self, BackendError> {
        let stream = UnixStream::connect(socket_path).await?;
        Ok(Self::from_stream(stream, None))
    }

    fn from_stream(stream: UnixStream, process: Option<Child>) -> Self {
        let (read_half, write_half) = stream.into_split();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let pending: PendingReplies = Arc::new(StdMutex::new(HashMap::new()));
        let closed = Arc::new(AtomicBool::new(false));

        let reader_handle = tokio::spawn(Self::read_loop(
            read_half,
            Arc::clone(&pending),
            Arc::clone(&closed),
            events_tx,
        ));

        Self {
            writer: Mutex::new(write_half),
            pending,
            closed,
            next_request_id: AtomicU64::new(1),
            next_observer_id: AtomicU64::new(1),
            events: Mutex::new(events_rx),
            reader_handle,
            _process: process,
            owned_socket: None,
        }
    }

    async fn wait_for_socket(child: &mut Child, socket_path: &Path) -> Result<UnixStream, BackendError> {
        for _ in 0..SOCKET_CONNECT_ATTEMPTS {
            if let Some(status) = child.try_wait()? {
                return Err(BackendError::Spawn(format!(
                    "{MPV_BINARY} exited during startup ({status}), check the configured options"
                )));
            }

            match UnixStream::connect(socket_path).await {
                Ok(stream) => return Ok(stream),
                Err(e) => debug!(error = %e, "IPC socket not ready yet"),
            }

            tokio::time::sleep(SOCKET_CONNECT_INTERVAL).await;
        }

        Err(BackendError::Spawn(format!(
            "{MPV_BINARY} did not open {}",
            socket_path.display()
        )))
    }

    async fn read_loop(
        read_half: OwnedReadHalf,
        pending: PendingReplies,
        closed: Arc<AtomicBool>,
        events_tx: mpsc::UnboundedSender<MpvEvent>,
    ) {
        let mut reader = BufReader::new(read_half);
        let mut buffer = Vec::new();
        let mut shutdown_seen = false;

        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Reading from mpv failed");
                    break;
                }
            }

            // mpv passes file names and tags through as raw bytes
            let line = String::from_utf8_lossy(&buffer);
            if line.trim().is_empty() {
                continue;
            }

            let message: Value = match serde_json::from_str(&line) {
                Ok(message) => message,
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed IPC message");
                    continue;
                }
            };

            if let Some(event) = MpvEvent::from_json(&message) {
                shutdown_seen |= event == MpvEvent::Shutdown;
                let _ = events_tx.send(event);
                continue;
            }

            Self::resolve_reply(&pending, &message);
        }

        // closed must be visible before draining, see `request`
        closed.store(true, Ordering::SeqCst);

        let waiting: Vec<_> = match pending.lock() {
            Ok(mut pending) => pending.drain().map(|(_, sender)| sender).collect(),
            Err(_) => Vec::new(),
        };
        for sender in waiting {
            let _ = sender.send(Err(BackendError::Closed));
        }

        if !shutdown_seen {
            let _ = events_tx.send(MpvEvent::Shutdown);
        }

        debug!("mpv IPC reader finished");
    }

    fn resolve_reply(pending: &PendingReplies, message: &Value) {
        let Some(request_id) = message.get("request_id").and_then(Value::as_u64) else {
            debug!(%message, "Reply without request id");
            return;
        };

        let sender = pending
            .lock()
            .ok()
            .and_then(|mut pending| pending.remove(&request_id));
        let Some(sender) = sender else {
            debug!(request_id, "Reply for unknown request");
            return;
        };

        let reply = match message.get("error").and_then(Value::as_str) {
            Some("success") => Ok(message.get("data").cloned().map(Node::from).unwrap_or_default()),
            Some(error) => Err(BackendError::Rejected(error.to_string())),
            None => Err(BackendError::Protocol(format!(
                "reply {request_id} has no error field"
            ))),
        };

        let _ = sender.send(reply);
    }

    async fn request(&self, command: Vec<Value>) -> Reply {
        if self.closed.load(Ordering::SeqCst) {
            return Err(BackendError::Closed);
        }

        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let (reply_tx, reply_rx) = oneshot::channel();

        self.pending
            .lock()
            .map_err(|_| BackendError::Protocol("reply table poisoned".to_string()))?
            .insert(request_id, reply_tx);

        if self.closed.load(Ordering::SeqCst) {
            self.forget(request_id);
            return Err(BackendError::Closed);
        }

        let mut line = json!({ "command": command, "request_id": request_id }).to_string();
        line.push('\n');

        let written = {
            let mut writer = self.writer.lock().await;
            writer.write_all(line.as_bytes()).await
        };

        if let Err(e) = written {
            self.forget(request_id);
            return Err(match e.kind() {
                std::io::ErrorKind::BrokenPipe => BackendError::Closed,
                _ => BackendError::Io(e),
            });
        }

        reply_rx.await.unwrap_or(Err(BackendError::Closed))
    }

    fn forget(&self, request_id: u64) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.remove(&request_id);
        }
    }
}

#[async_trait]
impl Backend for MpvIpc {
    async fn set_property(&self, name: &str, value: Node) -> Result<(), BackendError> {
        self.request(vec![json!("set_property"), json!(name), Value::from(value)])
            .await
            .map(|_| ())
    }

    async fn get_property(&self, name: &str) -> Result<Node, BackendError> {
        self.request(vec![json!("get_property"), json!(name)]).await
    }

    async fn command(&self, args: &[&str]) -> Result<(), BackendError> {
        self.request(args.iter().map(|arg| json!(arg)).collect())
            .await
            .map(|_| ())
    }

    async fn observe_property(&self, name: &str) -> Result<(), BackendError> {
        let observer_id = self.next_observer_id.fetch_add(1, Ordering::Relaxed);
        self.request(vec![json!("observe_property"), json!(observer_id), json!(name)])
            .await
            .map(|_| ())
    }

    async fn wait_event(&self) -> MpvEvent {
        let mut events = self.events.lock().await;
        events.recv().await.unwrap_or(MpvEvent::Shutdown)
    }
}

impl Drop for MpvIpc {
    fn drop(&mut self) {
        self.reader_handle.abort();

        if let Some(socket_path) = self.owned_socket.take() {
            let _ = std::fs::remove_file(socket_path);
        }
    }
}
