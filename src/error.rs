// Error types for loading and inspecting sound waves

use std::path::PathBuf;

use thiserror::Error;

/// The Vorbis headers at the front of a buffer could not be read.
///
/// Failure is deliberately not classified: a truncated page, a bad capture
/// pattern and a non-Vorbis stream all end up here. The reason string is for
/// logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("can't read Vorbis header: {reason}")]
pub struct HeaderError {
    reason: String,
}

impl HeaderError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        HeaderError {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Loading a sound wave from disk failed; no asset was produced.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read, so there is no buffer
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its header could not be parsed
    #[error("failed to load {}: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: HeaderError,
    },
}

/// Looking up the playback source for a sound wave failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindSourceError {
    #[error("no audio device available")]
    NoDevice,

    #[error("sound wave is not playing on the audio device")]
    NotFound,
}
