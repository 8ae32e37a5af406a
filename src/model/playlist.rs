use super::{clean_name, MAX_SONGS};

/// A named, rated playlist of song names
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    /// Playlist name (at most `MAX_NAME_LEN` bytes)
    pub name: String,

    /// Rating in `MIN_RATING..=MAX_RATING`
    pub rating: f32,

    /// Song names in insertion order
    songs: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist, truncating an over-long name
    pub fn new(name: impl Into<String>, rating: f32) -> Self {
        let name = name.into();
        Self {
            name: clean_name(&name),
            rating,
            songs: Vec::new(),
        }
    }

    /// Song names in order
    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    /// Number of songs in this playlist
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Check if the song table has reached `MAX_SONGS`
    pub fn is_full(&self) -> bool {
        self.songs.len() >= MAX_SONGS
    }

    /// Append a song. Returns false (and leaves the playlist untouched) when full.
    pub fn push_song(&mut self, song: &str) -> bool {
        if self.is_full() {
            return false;
        }
        self.songs.push(clean_name(song));
        true
    }

    /// Remove the song at `index`, shifting later songs down
    pub fn remove_song(&mut self, index: usize) -> Option<String> {
        if index < self.songs.len() {
            Some(self.songs.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove_preserve_order() {
        let mut playlist = Playlist::new("Mix", 3.0);
        assert!(playlist.push_song("A"));
        assert!(playlist.push_song("B"));
        assert!(playlist.push_song("C"));

        assert_eq!(playlist.remove_song(1).as_deref(), Some("B"));
        assert_eq!(playlist.songs(), ["A", "C"]);
        assert_eq!(playlist.song_count(), 2);
        assert!(playlist.remove_song(2).is_none());
    }

    #[test]
    fn test_push_rejected_when_full() {
        let mut playlist = Playlist::new("Full", 1.0);
        for i in 0..MAX_SONGS {
            assert!(playlist.push_song(&format!("Song {i}")));
        }
        assert!(playlist.is_full());
        assert!(!playlist.push_song("One too many"));
        assert_eq!(playlist.song_count(), MAX_SONGS);
    }

    #[test]
    fn test_duplicate_songs_allowed() {
        let mut playlist = Playlist::new("Loop", 5.0);
        playlist.push_song("Same");
        playlist.push_song("Same");
        assert_eq!(playlist.song_count(), 2);
    }
}
