/// Control-plane transport on the session bus
pub mod bus;
/// Random track selection
pub mod catalog;
/// Shared service building blocks
pub mod common;
/// mpv backend adapter
pub mod mpv;
/// Desktop notifications
pub mod notify;
/// Player control core
pub mod player;

pub use bus::{BusError, BusService, GroovedPlayerProxy, PlayerInterface};
pub use catalog::{Catalog, CatalogError, SqliteCatalog};
pub use mpv::{Backend, BackendError, MpvEvent, MpvIpc, MpvOptions, Node};
pub use notify::{DesktopNotifier, FreedesktopNotifier, NotifyError};
pub use player::{LoopMode, Notification, PlaybackStatus, Player, PlayerError, PlayerOptions};
