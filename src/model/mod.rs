//! In-memory data model for the playlist collection
//!
//! These types know nothing about the store file layout or the shell;
//! capacity limits live here so both sides agree on them.

mod collection;
mod playlist;

pub use collection::Collection;
pub use playlist::Playlist;

/// Maximum number of playlists in a collection
pub const MAX_PLAYLISTS: usize = 100;

/// Maximum number of songs in a single playlist
pub const MAX_SONGS: usize = 100;

/// Maximum length in bytes of a playlist or song name
pub const MAX_NAME_LEN: usize = 99;

/// Lowest accepted rating
pub const MIN_RATING: f32 = 0.0;

/// Highest accepted rating
pub const MAX_RATING: f32 = 5.0;

/// Truncate a name to [`MAX_NAME_LEN`] bytes without splitting a character
pub fn bounded_name(name: &str) -> &str {
    if name.len() <= MAX_NAME_LEN {
        return name;
    }

    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// Drop NUL characters and bound the result with [`bounded_name`]
///
/// NUL terminates a stored name field, so it can never be part of a name.
pub fn clean_name(name: &str) -> String {
    if name.contains('\0') {
        bounded_name(&name.replace('\0', "")).to_string()
    } else {
        bounded_name(name).to_string()
    }
}

/// Whether a rating lies in the accepted range
pub fn is_valid_rating(rating: f32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
