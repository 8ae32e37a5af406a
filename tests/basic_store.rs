use playlist_manager::model::{Playlist, MAX_PLAYLISTS, MAX_SONGS};
use playlist_manager::shell::ConsoleTerminal;
use playlist_manager::store::ErrorKind;
use playlist_manager::{AppConfig, Shell, Store, StoreError};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a store in a fresh temp directory
fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::new(temp_dir.path().join("playlists.dat"));
    (temp_dir, store)
}

/// Build a store with a few playlists and songs
fn create_populated_store() -> (TempDir, Store) {
    let (dir, mut store) = create_test_store();

    store.add_playlist("Road Trip", 4.5).unwrap();
    store.add_song(0, "Song A").unwrap();
    store.add_song(0, "Song B").unwrap();

    store.add_playlist("Workout", 3.0).unwrap();
    store.add_song(1, "Déjà Vu").unwrap();

    store.add_playlist("Empty", 0.0).unwrap();

    // Duplicate names are allowed
    store.add_playlist("Road Trip", 1.25).unwrap();

    (dir, store)
}

#[test]
fn test_adds_up_to_capacity() {
    let (_dir, mut store) = create_test_store();

    for i in 0..MAX_PLAYLISTS {
        store.add_playlist(&format!("Playlist {}", i), 2.0).unwrap();
        assert_eq!(store.len(), i + 1);
    }

    let err = store.add_playlist("One more", 2.0).unwrap_err();
    assert!(matches!(err, StoreError::CollectionFull { .. }));
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert_eq!(store.len(), MAX_PLAYLISTS);

    // A full collection still reloads intact
    let reloaded = Store::open(store.path()).unwrap();
    assert_eq!(reloaded.len(), MAX_PLAYLISTS);
}

#[test]
fn test_remove_preserves_relative_order() {
    let (_dir, mut store) = create_populated_store();
    let before: Vec<Playlist> = store.list().cloned().collect();

    store.remove_playlist(1).unwrap();

    let after: Vec<Playlist> = store.list().cloned().collect();
    let mut expected = before.clone();
    expected.remove(1);
    assert_eq!(after, expected);
}

#[test]
fn test_save_then_load_round_trip() {
    let (_dir, store) = create_populated_store();

    let reloaded = Store::open(store.path()).unwrap();
    assert_eq!(reloaded.collection(), store.collection());

    let workout = reloaded.playlist(1).unwrap();
    assert_eq!(workout.songs(), ["Déjà Vu"]);
    assert_eq!(workout.song_count(), 1);
}

#[test]
fn test_full_playlist_round_trip() {
    let (_dir, mut store) = create_test_store();
    store.add_playlist("Long", 5.0).unwrap();
    for i in 0..MAX_SONGS {
        store.add_song(0, &format!("Track {:03}", i)).unwrap();
    }

    let reloaded = Store::open(store.path()).unwrap();
    let playlist = reloaded.playlist(0).unwrap();
    assert_eq!(playlist.song_count(), MAX_SONGS);
    assert_eq!(playlist.songs()[99], "Track 099");
}

#[test]
fn test_road_trip_scenario() {
    let (_dir, mut store) = create_test_store();

    store.add_playlist("Road Trip", 4.5).unwrap();
    store.add_song(0, "Song A").unwrap();
    store.add_song(0, "Song B").unwrap();
    store.remove_song(0, 0).unwrap();

    let playlists: Vec<&Playlist> = store.list().collect();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].name, "Road Trip");
    assert_eq!(playlists[0].rating, 4.5);
    assert_eq!(playlists[0].songs(), ["Song B"]);
}

#[test]
fn test_remove_on_empty_writes_nothing() {
    let (_dir, mut store) = create_test_store();

    let err = store.remove_playlist(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!store.path().exists());
}

#[test]
fn test_legacy_file_layout_is_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playlists.dat");

    // Hand-built legacy file: one playlist "Old" rated 2.5 with one song
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&1i32.to_le_bytes());
    let mut name = [0u8; 100];
    name[..3].copy_from_slice(b"Old");
    bytes.extend_from_slice(&name);
    bytes.extend_from_slice(&2.5f32.to_le_bytes());
    let mut songs = vec![0u8; 100 * 100];
    songs[..5].copy_from_slice(b"Track");
    bytes.extend_from_slice(&songs);
    bytes.extend_from_slice(&1i32.to_le_bytes());
    fs::write(&path, &bytes).unwrap();

    let store = Store::open(&path).unwrap();
    let playlist = store.playlist(0).unwrap();
    assert_eq!(playlist.name, "Old");
    assert_eq!(playlist.rating, 2.5);
    assert_eq!(playlist.songs(), ["Track"]);
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playlists.dat");
    fs::write(&path, b"not a playlist file").unwrap();

    let (store, warning) = Store::open_or_empty(&path);
    assert!(store.is_empty());
    assert_eq!(warning.map(|e| e.kind()), Some(ErrorKind::Io));
}

#[test]
fn test_shell_session_persists_changes() {
    let (dir, mut store) = create_test_store();
    let config = AppConfig::new(dir.path().join("playlists.dat")).plain();

    let script = "1\nRoad Trip\n4.5\n3\n1\n1\nSong A\n1\nSong B\n2\n1\n4\n5\n";
    let terminal = ConsoleTerminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
        .with_color(false)
        .with_clear_screen(false);
    let mut shell = Shell::new(&mut store, terminal, &config);
    shell.run().unwrap();

    let output = String::from_utf8(shell.into_terminal().into_output()).unwrap();
    assert!(output.contains("[SUCCESS] Playlist added successfully!"));
    assert!(output.ends_with("Goodbye!\n"));

    let reloaded = Store::open(PathBuf::from(&config.store_path)).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.playlist(0).unwrap().songs(), ["Song B"]);
}

#[test]
fn test_shell_rejects_nul_in_names() {
    let (dir, mut store) = create_test_store();
    let config = AppConfig::new(dir.path().join("playlists.dat")).plain();

    let script = "1\nAB\0CD\n  Spaced  \n3\n5\n";
    let terminal = ConsoleTerminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
        .with_color(false)
        .with_clear_screen(false);
    let mut shell = Shell::new(&mut store, terminal, &config);
    shell.run().unwrap();

    assert_eq!(store.playlist(0).unwrap().name, "  Spaced  ");
    let reloaded = Store::open(store.path()).unwrap();
    assert_eq!(reloaded.collection(), store.collection());
}
