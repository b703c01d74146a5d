//! Control-plane transport on the D-Bus session bus.

/// Bus error type
pub mod error;
/// Exported player object
pub mod interface;
/// Client proxy used by `groovectl`
pub mod proxy;
/// Export and change signalling
pub mod service;

pub use error::BusError;
pub use interface::PlayerInterface;
pub use proxy::GroovedPlayerProxy;
pub use service::BusService;

/// Well-known name claimed by the daemon
pub const BUS_NAME: &str = "io.github.ghedo.grooved";
/// Path of the player object
pub const OBJECT_PATH: &str = "/io/github/ghedo/grooved";
