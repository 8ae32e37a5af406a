use super::{Playlist, MAX_PLAYLISTS};

/// Ordered, capacity-bounded set of playlists
///
/// Insertion order is display order. Names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    playlists: Vec<Playlist>,
}

impl Collection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a playlist. Returns the playlist back when the collection is full.
    pub fn push(&mut self, playlist: Playlist) -> Result<(), Playlist> {
        if self.is_full() {
            return Err(playlist);
        }
        self.playlists.push(playlist);
        Ok(())
    }

    /// Remove the playlist at `index`, shifting later playlists down
    pub fn remove(&mut self, index: usize) -> Option<Playlist> {
        if index < self.playlists.len() {
            Some(self.playlists.remove(index))
        } else {
            None
        }
    }

    /// Get a playlist by position
    pub fn get(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    /// Get a mutable playlist by position
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Playlist> {
        self.playlists.get_mut(index)
    }

    /// Iterate playlists in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Playlist> {
        self.playlists.iter()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.playlists.len() >= MAX_PLAYLISTS
    }

    /// Total number of songs across all playlists
    pub fn song_total(&self) -> usize {
        self.playlists.iter().map(Playlist::song_count).sum()
    }
}

/// Collects at most `MAX_PLAYLISTS` playlists; any beyond that are dropped
impl FromIterator<Playlist> for Collection {
    fn from_iter<I: IntoIterator<Item = Playlist>>(iter: I) -> Self {
        Self {
            playlists: iter.into_iter().take(MAX_PLAYLISTS).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Playlist;
    type IntoIter = std::slice::Iter<'a, Playlist>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_creation() {
        let collection = Collection::new();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert_eq!(collection.song_total(), 0);
    }

    #[test]
    fn test_push_until_full() {
        let mut collection = Collection::new();
        for i in 0..MAX_PLAYLISTS {
            assert!(collection.push(Playlist::new(format!("P{i}"), 1.0)).is_ok());
        }
        let rejected = collection.push(Playlist::new("Extra", 2.0));
        assert_eq!(rejected.unwrap_err().name, "Extra");
        assert_eq!(collection.len(), MAX_PLAYLISTS);
    }

    #[test]
    fn test_remove_shifts_down() {
        let mut collection = Collection::new();
        for name in ["A", "B", "C", "D"] {
            collection.push(Playlist::new(name, 0.0)).unwrap();
        }

        let removed = collection.remove(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = collection.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "C", "D"]);
        assert!(collection.remove(3).is_none());
    }

    #[test]
    fn test_collect_stops_at_capacity() {
        let collection: Collection = (0..MAX_PLAYLISTS + 5)
            .map(|i| Playlist::new(format!("P{i}"), 1.0))
            .collect();
        assert_eq!(collection.len(), MAX_PLAYLISTS);
        assert_eq!(collection.get(MAX_PLAYLISTS - 1).unwrap().name, "P99");
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut collection = Collection::new();
        collection.push(Playlist::new("One", 1.0)).unwrap();
        collection.push(Playlist::new("Two", 2.0)).unwrap();

        assert_eq!(collection.iter().count(), 2);
        assert_eq!((&collection).into_iter().count(), 2);
    }
}
