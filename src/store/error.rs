//! Store error types

use crate::record::RecordError;
use std::io;
use std::path::PathBuf;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Coarse error classification shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Collection or song list is full
    Capacity,
    /// Empty list or index out of range
    NotFound,
    /// Storage could not be read or written
    Io,
}

/// Errors that can occur when operating on the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Collection already holds the maximum number of playlists
    #[error("Maximum playlists reached! ({max})")]
    CollectionFull { max: usize },

    /// Playlist song table is full
    #[error("Playlist '{name}' is full! ({max} songs)")]
    PlaylistFull { name: String, max: usize },

    /// No playlists exist
    #[error("No playlists available!")]
    NoPlaylists,

    /// Playlist index out of range
    #[error("Playlist {index} not found (collection has {len} playlists)")]
    PlaylistNotFound { index: usize, len: usize },

    /// Playlist has no songs
    #[error("Playlist '{name}' is already empty!")]
    PlaylistEmpty { name: String },

    /// Song index out of range
    #[error("Song {index} not found (playlist has {len} songs)")]
    SongNotFound { index: usize, len: usize },

    /// Store file exists but could not be read
    #[error("Error loading playlists from {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Store file could not be written
    #[error("Error saving playlists to {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Store file contents failed validation
    #[error("Store file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
}

impl StoreError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::CollectionFull { .. } | StoreError::PlaylistFull { .. } => {
                ErrorKind::Capacity
            }
            StoreError::NoPlaylists
            | StoreError::PlaylistNotFound { .. }
            | StoreError::PlaylistEmpty { .. }
            | StoreError::SongNotFound { .. } => ErrorKind::NotFound,
            StoreError::Load { .. } | StoreError::Save { .. } | StoreError::Corrupt { .. } => {
                ErrorKind::Io
            }
        }
    }
}
