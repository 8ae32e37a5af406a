//! Offline store file validation

use crate::record::types::{HEADER_SIZE, RECORD_SIZE};
use crate::store::Store;
use anyhow::{Context, Result};
use std::path::Path;

/// Summary of a store file that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub file_size: u64,
    pub playlists: usize,
    pub songs: usize,
}

/// Validate a store file by decoding it strictly
///
/// # Arguments
/// * `path` - Store file to check
///
/// # Returns
/// A summary if every record decodes cleanly, Err otherwise
pub fn validate_store_file(path: &Path) -> Result<ValidationReport> {
    log::info!("Validating store file at: {:?}", path);

    if !path.exists() {
        anyhow::bail!("Store file not found at: {:?}", path);
    }

    let metadata =
        std::fs::metadata(path).with_context(|| format!("Failed to stat {:?}", path))?;
    let file_size = metadata.len();
    log::info!("Store file size: {} bytes", file_size);

    let expected_records = (file_size as usize).saturating_sub(HEADER_SIZE) / RECORD_SIZE;
    log::debug!("Size allows for {} record(s)", expected_records);

    let store = Store::open(path).context("Store file validation failed")?;
    let collection = store.collection();

    for (idx, playlist) in collection.iter().enumerate() {
        log::info!(
            "  Playlist {}: {:?} rating {:.2}, {} song(s)",
            idx + 1,
            playlist.name,
            playlist.rating,
            playlist.song_count()
        );
    }

    Ok(ValidationReport {
        file_size,
        playlists: collection.len(),
        songs: collection.song_total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_file_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlists.dat");

        let mut store = Store::new(&path);
        store.add_playlist("One", 1.0).unwrap();
        store.add_song(0, "A").unwrap();
        store.add_song(0, "B").unwrap();
        store.add_playlist("Two", 2.0).unwrap();

        let report = validate_store_file(&path).unwrap();
        assert_eq!(report.playlists, 2);
        assert_eq!(report.songs, 2);
        assert_eq!(report.file_size, (HEADER_SIZE + 2 * RECORD_SIZE) as u64);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(validate_store_file(&dir.path().join("none.dat")).is_err());
    }

    #[test]
    fn test_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlists.dat");
        std::fs::write(&path, [2u8, 0, 0, 0, 9, 9]).unwrap();
        assert!(validate_store_file(&path).is_err());
    }
}
