//! Store file layout constants

use crate::model::MAX_SONGS;

/// Width of every name field, including its NUL terminator
pub const NAME_FIELD_LEN: usize = 100;

/// Size of the leading playlist count
pub const HEADER_SIZE: usize = 4;

/// Byte offset of the rating within a record
pub const RATING_OFFSET: usize = NAME_FIELD_LEN;

/// Byte offset of the song table within a record
pub const SONGS_OFFSET: usize = RATING_OFFSET + 4;

/// Byte offset of the song count within a record
pub const SONG_COUNT_OFFSET: usize = SONGS_OFFSET + MAX_SONGS * NAME_FIELD_LEN;

/// Size of one playlist record (10108 bytes)
pub const RECORD_SIZE: usize = SONG_COUNT_OFFSET + 4;
