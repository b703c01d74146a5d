//! Test doubles shared by the integration tests.

#![allow(dead_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use grooved::services::{
    Backend, BackendError, Catalog, CatalogError, DesktopNotifier, MpvEvent, Node, Notification,
    NotifyError, Player, PlayerOptions,
};
use tokio::sync::{broadcast, mpsc};

pub const LIBRARY: &str = "/music/library.db";
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// One call made against the fake backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetProperty(String, Node),
    GetProperty(String),
    Command(Vec<String>),
    Observe(String),
}

impl Call {
    pub fn command(args: &[&str]) -> Self {
        Self::Command(args.iter().map(|arg| arg.to_string()).collect())
    }

    pub fn set(name: &str, value: Node) -> Self {
        Self::SetProperty(name.to_string(), value)
    }

    pub fn set_string(name: &str, value: &str) -> Self {
        Self::set(name, Node::String(value.to_string()))
    }

    /// Calls that change the backend's state.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::SetProperty(..) | Self::Command(_))
    }
}

/// Records every call and replays scripted events.
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    properties: Mutex<HashMap<String, Node>>,
    failing: Mutex<HashSet<String>>,
    closed: AtomicBool,
    events: tokio::sync::Mutex<mpsc::UnboundedReceiver<MpvEvent>>,
}

impl FakeBackend {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedSender<MpvEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = Self {
            calls: Mutex::new(Vec::new()),
            properties: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            closed: AtomicBool::new(false),
            events: tokio::sync::Mutex::new(rx),
        };
        (Arc::new(backend), tx)
    }

    pub fn set(&self, name: &str, value: Node) {
        self.properties
            .lock()
            .unwrap()
            .insert(name.to_string(), value);
    }

    /// Makes every call on the named property or command fail.
    pub fn fail(&self, name: &str) {
        self.failing.lock().unwrap().insert(name.to_string());
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_mutation)
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call, name: &str) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);

        if self.closed.load(Ordering::SeqCst) {
            return Err(BackendError::Closed);
        }
        if self.failing.lock().unwrap().contains(name) {
            return Err(BackendError::Rejected(format!("{name} refused")));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn set_property(&self, name: &str, value: Node) -> Result<(), BackendError> {
        self.record(Call::SetProperty(name.to_string(), value.clone()), name)?;
        self.set(name, value);
        Ok(())
    }

    async fn get_property(&self, name: &str) -> Result<Node, BackendError> {
        self.record(Call::GetProperty(name.to_string()), name)?;
        self.properties
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("property unavailable".to_string()))
    }

    async fn command(&self, args: &[&str]) -> Result<(), BackendError> {
        let name = args.first().copied().unwrap_or_default();
        self.record(Call::command(args), name)
    }

    async fn observe_property(&self, name: &str) -> Result<(), BackendError> {
        self.record(Call::Observe(name.to_string()), name)
    }

    async fn wait_event(&self) -> MpvEvent {
        self.events
            .lock()
            .await
            .recv()
            .await
            .unwrap_or(MpvEvent::Shutdown)
    }
}

/// Catalog returning a fixed answer.
pub struct FakeCatalog {
    result: Mutex<Result<String, CatalogError>>,
    calls: AtomicUsize,
    libraries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn returning(path: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(Ok(path.to_string())),
            calls: AtomicUsize::new(0),
            libraries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: CatalogError) -> Arc<Self> {
        let catalog = Self::returning("");
        *catalog.result.lock().unwrap() = Err(error);
        catalog
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn libraries(&self) -> Vec<String> {
        self.libraries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn random_track(&self, library: &str) -> Result<String, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.libraries.lock().unwrap().push(library.to_string());
        self.result.lock().unwrap().clone()
    }
}

/// Notifier that keeps what it was asked to show.
#[derive(Default)]
pub struct FakeNotifier {
    sent: Mutex<Vec<(String, String, String)>>,
}

impl FakeNotifier {
    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Waits until `count` notifications were delivered.
    pub async fn wait_for(&self, count: usize) -> Vec<(String, String, String)> {
        let deadline = tokio::time::Instant::now() + SETTLE_TIMEOUT;
        while self.sent().len() < count && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.sent()
    }
}

#[async_trait]
impl DesktopNotifier for FakeNotifier {
    async fn notify(&self, title: &str, body: &str, icon: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string(), icon.to_string()));
        Ok(())
    }
}

/// A started player wired to fakes.
pub struct Harness {
    pub player: Player,
    pub backend: Arc<FakeBackend>,
    pub catalog: Arc<FakeCatalog>,
    pub notifier: Arc<FakeNotifier>,
    pub events: mpsc::UnboundedSender<MpvEvent>,
    pub notifications: broadcast::Receiver<Notification>,
}

impl Harness {
    pub async fn start(catalog: Arc<FakeCatalog>) -> Self {
        Self::start_with(catalog, false).await
    }

    pub async fn start_with(catalog: Arc<FakeCatalog>, notify: bool) -> Self {
        let (backend, events) = FakeBackend::new();
        backend.set("playlist-count", Node::Int64(0));

        let notifier = Arc::new(FakeNotifier::default());
        let options = PlayerOptions {
            library: LIBRARY.to_string(),
            notify,
        };

        let player = Player::start(backend.clone(), catalog.clone(), notifier.clone(), options)
            .await
            .unwrap();
        let notifications = player.subscribe();

        Self {
            player,
            backend,
            catalog,
            notifier,
            events,
            notifications,
        }
    }

    pub fn send(&self, event: MpvEvent) {
        self.events.send(event).unwrap();
    }

    pub fn send_property(&self, name: &str, data: Node) {
        self.send(MpvEvent::PropertyChange {
            name: name.to_string(),
            data,
        });
    }

    /// Waits until every event sent so far has been handled and returns the
    /// notifications published meanwhile.
    ///
    /// A playlist change is queued behind the earlier events; its
    /// notification marks the point where they are all done.
    pub async fn settle(&mut self) -> Vec<Notification> {
        self.send_property("playlist", Node::Array(Vec::new()));

        let mut seen = Vec::new();
        loop {
            let notification = tokio::time::timeout(SETTLE_TIMEOUT, self.notifications.recv())
                .await
                .unwrap()
                .unwrap();
            if notification == Notification::TrackListChanged {
                return seen;
            }
            seen.push(notification);
        }
    }

    /// Notifications published so far without waiting on the event loop.
    pub fn published(&mut self) -> Vec<Notification> {
        let mut seen = Vec::new();
        while let Ok(notification) = self.notifications.try_recv() {
            seen.push(notification);
        }
        seen
    }

    /// Brings the player into the playing state through play and start-file.
    pub async fn playing(&mut self) {
        self.player.play().await.unwrap();
        self.send(MpvEvent::StartFile);
        self.settle().await;
        self.backend.clear();
    }
}

pub fn status_changes(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .copied()
        .filter(|notification| matches!(notification, Notification::StatusChanged(_)))
        .collect()
}
