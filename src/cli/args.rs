use clap::{Parser, Subcommand, ValueEnum};

/// Command line of `groovectl`.
#[derive(Parser, Debug)]
#[command(name = "groovectl")]
#[command(about = "Control the grooved music player daemon")]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// `groovectl` subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start or unpause playback
    Play,
    /// Pause playback
    Pause,
    /// Toggle the pause status
    Toggle,
    /// Skip to the next track
    Next,
    /// Go back to the previous track
    Prev,
    /// Stop playback
    Stop,
    /// Append tracks, or a random one when none is given
    Add {
        /// Files or URLs to append
        tracks: Vec<String>,
    },
    /// Load a playlist file
    Load {
        /// Keep the current tracklist instead of replacing it
        #[arg(short, long)]
        append: bool,
        /// Playlist file
        file: String,
    },
    /// Skip to a track in the tracklist
    Goto {
        /// Zero-based tracklist index
        index: u64,
    },
    /// Remove a track from the tracklist
    Rm {
        /// Zero-based tracklist index, negative for the current track
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Show the tracklist
    Ls,
    /// Show the player status
    Status,
    /// Seek by a relative amount of seconds
    Seek {
        /// Seconds, negative to seek backwards
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Set the loop mode
    Loop {
        /// Loop mode
        #[arg(value_enum)]
        mode: LoopArg,
    },
    /// Show or set the volume
    Volume {
        /// New volume in percent
        value: Option<f64>,
    },
    /// Shut the player down
    Quit,
}

/// Loop modes accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopArg {
    /// Play the list once
    None,
    /// Repeat the current track
    Track,
    /// Repeat the whole list
    List,
    /// Repeat the whole list, including failed tracks
    Force,
}

impl LoopArg {
    /// Wire name sent to the daemon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Track => "track",
            Self::List => "list",
            Self::Force => "force",
        }
    }
}
