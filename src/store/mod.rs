//! Playlist store
//!
//! Owns the [`Collection`] and keeps the store file in sync with it: every
//! successful mutation rewrites the whole file before returning.
//!
//! Inputs are expected to be validated by the caller (name length is
//! bounded by the model, rating range is checked by the shell). The store
//! only enforces capacity and index bounds.

mod error;

pub use error::{ErrorKind, Result, StoreError};

use crate::model::{Collection, Playlist, MAX_PLAYLISTS, MAX_SONGS};
use crate::record;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "playlists.dat";

/// In-memory collection backed by a store file
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    collection: Collection,
}

impl Store {
    /// Create an empty store that will persist to `path`
    ///
    /// Nothing is written until the first mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            collection: Collection::new(),
        }
    }

    /// Load the store file at `path`
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No store file at {:?}, starting empty", path);
                return Ok(Self::new(path));
            }
            Err(source) => return Err(StoreError::Load { path, source }),
        };

        let collection = match record::decode(&bytes) {
            Ok(collection) => collection,
            Err(source) => return Err(StoreError::Corrupt { path, source }),
        };

        log::info!(
            "Loaded {} playlist(s) from {:?}",
            collection.len(),
            path
        );

        Ok(Self { path, collection })
    }

    /// Load the store file, falling back to an empty store on failure
    ///
    /// The failure is returned alongside the store so the caller can report
    /// it. The bad file is left in place until the next save.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => (store, None),
            Err(e) => {
                log::warn!("{}; starting with an empty collection", e);
                (Self::new(path), Some(e))
            }
        }
    }

    /// Write the whole collection to the store file, replacing its contents
    pub fn save(&self) -> Result<()> {
        let bytes = record::encode(&self.collection).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, &bytes).map_err(|source| StoreError::Save {
            path: self.path.clone(),
            source,
        })?;

        log::debug!(
            "Saved {} playlist(s) ({} bytes) to {:?}",
            self.collection.len(),
            bytes.len(),
            self.path
        );
        Ok(())
    }

    /// Append a new empty playlist and persist
    pub fn add_playlist(&mut self, name: &str, rating: f32) -> Result<()> {
        self.collection
            .push(Playlist::new(name, rating))
            .map_err(|_| StoreError::CollectionFull { max: MAX_PLAYLISTS })?;

        log::info!("Added playlist '{}' (rating {:.2})", name, rating);
        self.save()
    }

    /// Remove the playlist at `index` and persist
    ///
    /// Later playlists shift down by one.
    pub fn remove_playlist(&mut self, index: usize) -> Result<Playlist> {
        if self.collection.is_empty() {
            return Err(StoreError::NoPlaylists);
        }

        let len = self.collection.len();
        let removed = self
            .collection
            .remove(index)
            .ok_or(StoreError::PlaylistNotFound { index, len })?;

        log::info!("Removed playlist '{}'", removed.name);
        self.save()?;
        Ok(removed)
    }

    /// Append a song to a playlist and persist
    pub fn add_song(&mut self, playlist_index: usize, song: &str) -> Result<()> {
        let playlist = self.playlist_mut(playlist_index)?;
        if !playlist.push_song(song) {
            return Err(StoreError::PlaylistFull {
                name: playlist.name.clone(),
                max: MAX_SONGS,
            });
        }

        log::info!("Added song '{}' to '{}'", song, playlist.name);
        self.save()
    }

    /// Remove a song from a playlist and persist
    ///
    /// Later songs shift down by one.
    pub fn remove_song(&mut self, playlist_index: usize, song_index: usize) -> Result<String> {
        let playlist = self.playlist_mut(playlist_index)?;
        if playlist.is_empty() {
            return Err(StoreError::PlaylistEmpty {
                name: playlist.name.clone(),
            });
        }

        let len = playlist.song_count();
        let song = playlist
            .remove_song(song_index)
            .ok_or(StoreError::SongNotFound {
                index: song_index,
                len,
            })?;

        log::info!("Removed song '{}' from '{}'", song, playlist.name);
        self.save()?;
        Ok(song)
    }

    /// Overwrite a playlist's rating and persist
    pub fn set_rating(&mut self, playlist_index: usize, rating: f32) -> Result<()> {
        let playlist = self.playlist_mut(playlist_index)?;
        playlist.rating = rating;

        log::info!("Rated '{}' {:.2}", playlist.name, rating);
        self.save()
    }

    /// Iterate playlists in display order
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn list(&self) -> std::slice::Iter<'_, Playlist> {
        self.collection.iter()
    }

    /// Get a playlist by position
    pub fn playlist(&self, index: usize) -> Option<&Playlist> {
        self.collection.get(index)
    }

    /// The whole collection
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Path of the backing store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn playlist_mut(&mut self, index: usize) -> Result<&mut Playlist> {
        let len = self.collection.len();
        self.collection
            .get_mut(index)
            .ok_or(StoreError::PlaylistNotFound { index, len })
    }
}
