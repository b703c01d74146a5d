/// Tracklist commands
pub mod playlist;
/// Status, loop and volume commands
pub mod status;
/// Playback commands
pub mod transport;
