//! Playlist Manager - terminal playlist collection manager
//!
//! This library keeps a small collection of rated playlists in a
//! fixed-layout binary file and drives it from a menu shell.

pub mod config;
pub mod model;
pub mod record;
pub mod shell;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use shell::Shell;
pub use store::{Store, StoreError};
