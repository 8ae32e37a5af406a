//! Store file codec
//!
//! Reads and writes the fixed-size binary layout used by `playlists.dat`.
//! The layout is byte-compatible with files written by the legacy tool:
//! a little-endian `i32` playlist count followed by that many
//! [`types::RECORD_SIZE`]-byte playlist records.

mod strings;
pub mod types;

use crate::model::{is_valid_rating, Collection, Playlist, MAX_PLAYLISTS, MAX_SONGS};
use binrw::{binrw, BinRead, BinWrite};
use std::io::Cursor;
use strings::{decode_fixed, encode_fixed};
use types::{HEADER_SIZE, NAME_FIELD_LEN, RECORD_SIZE};

/// Errors raised while decoding or encoding a store file
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Layout-level failure (truncated data, count out of range)
    #[error("malformed store data: {0}")]
    Binary(#[from] binrw::Error),

    /// A used name field has no NUL terminator
    #[error("{0} is not NUL-terminated")]
    Unterminated(String),

    /// Stored rating is NaN or outside the accepted range
    #[error("playlist {index} has rating {rating} outside 0-5")]
    Rating { index: usize, rating: f32 },

    /// Extra bytes after the declared records
    #[error("{0} unexpected trailing bytes after last record")]
    TrailingBytes(u64),
}

/// One on-disk playlist record
#[binrw]
#[brw(little)]
#[derive(Debug, Clone)]
pub struct PlaylistRecord {
    pub name: [u8; NAME_FIELD_LEN],

    pub rating: f32,

    /// Fixed song table; slots at and past `song_count` are unused
    pub songs: [[u8; NAME_FIELD_LEN]; MAX_SONGS],

    #[br(assert(
        (0..=MAX_SONGS as i32).contains(&song_count),
        "song count {} out of range", song_count
    ))]
    pub song_count: i32,
}

/// Whole-file image: count header plus records
#[binrw]
#[brw(little)]
#[derive(Debug, Clone)]
pub struct StoreImage {
    #[br(temp, assert(
        (0..=MAX_PLAYLISTS as i32).contains(&count),
        "playlist count {} out of range", count
    ))]
    #[bw(calc = playlists.len() as i32)]
    count: i32,

    #[br(count = count as usize)]
    pub playlists: Vec<PlaylistRecord>,
}

impl PlaylistRecord {
    /// Lay a playlist out into a fixed-size record
    pub fn from_playlist(playlist: &Playlist) -> Self {
        let mut songs = [[0u8; NAME_FIELD_LEN]; MAX_SONGS];
        for (slot, song) in songs.iter_mut().zip(playlist.songs()) {
            *slot = encode_fixed(song);
        }

        Self {
            name: encode_fixed(&playlist.name),
            rating: playlist.rating,
            songs,
            song_count: playlist.song_count() as i32,
        }
    }

    /// Rebuild a playlist, validating every used field
    pub fn to_playlist(&self, index: usize) -> Result<Playlist, RecordError> {
        let name = decode_fixed(&self.name)
            .ok_or_else(|| RecordError::Unterminated(format!("name of playlist {}", index)))?;

        if !is_valid_rating(self.rating) {
            return Err(RecordError::Rating {
                index,
                rating: self.rating,
            });
        }

        let mut playlist = Playlist::new(name, self.rating);
        for (song_index, slot) in self.songs.iter().take(self.song_count as usize).enumerate() {
            let song = decode_fixed(slot).ok_or_else(|| {
                RecordError::Unterminated(format!("song {} of playlist {}", song_index, index))
            })?;
            playlist.push_song(&song);
        }

        Ok(playlist)
    }
}

/// Decode a complete store file
///
/// The buffer must contain exactly the declared number of records.
pub fn decode(bytes: &[u8]) -> Result<Collection, RecordError> {
    let mut cursor = Cursor::new(bytes);
    let image = StoreImage::read(&mut cursor)?;

    let consumed = cursor.position();
    let total = bytes.len() as u64;
    if consumed != total {
        return Err(RecordError::TrailingBytes(total - consumed));
    }

    let collection = image
        .playlists
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_playlist(index))
        .collect::<Result<Collection, _>>()?;

    log::debug!(
        "Decoded {} playlist(s), {} song(s)",
        collection.len(),
        collection.song_total()
    );

    Ok(collection)
}

/// Encode a complete collection into store file bytes
pub fn encode(collection: &Collection) -> Result<Vec<u8>, RecordError> {
    let image = StoreImage {
        playlists: collection.iter().map(PlaylistRecord::from_playlist).collect(),
    };

    let mut cursor = Cursor::new(Vec::with_capacity(
        HEADER_SIZE + collection.len() * RECORD_SIZE,
    ));
    image.write(&mut cursor)?;
    Ok(cursor.into_inner())
}
