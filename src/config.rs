//! Application configuration

use crate::store::DEFAULT_STORE_FILE;
use std::path::PathBuf;

/// Runtime settings for a playlist manager session
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store file location
    pub store_path: PathBuf,

    /// Emit ANSI colour tags on messages
    pub color: bool,

    /// Clear the screen before each menu
    pub clear_screen: bool,

    /// Wait for Enter after each action before redrawing the menu
    pub pause: bool,
}

impl AppConfig {
    /// Create a configuration with interactive defaults
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path,
            color: true,
            clear_screen: true,
            pause: true,
        }
    }

    /// Enable or disable colour output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable screen clearing
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Enable or disable "Press Enter" pauses
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Non-interactive settings: no colour, no clearing, no pauses
    pub fn plain(self) -> Self {
        self.with_color(false).with_clear_screen(false).with_pause(false)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_STORE_FILE))
    }
}
