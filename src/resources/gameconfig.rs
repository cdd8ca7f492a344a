//! Game configuration resource.
//!
//! Settings are loaded from an INI file. Anything missing from the file keeps
//! its default, and a missing file leaves every default in place.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 320
//!
//! [window]
//! width = 1280
//! height = 640
//! target_fps = 30
//!
//! [level]
//! dir = assets/level_1
//! file = level2.txt
//!
//! [assets]
//! dir = assets
//!
//! [hero]
//! spawn_x = 20
//! spawn_y = 290
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 320;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 30;
const DEFAULT_LEVEL_DIR: &str = "assets/level_1";
const DEFAULT_LEVEL_FILE: &str = "level2.txt";
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_HERO_SPAWN: (i32, i32) = (20, 290);
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Back-buffer width in pixels. All gameplay coordinates live in this space.
    pub render_width: u32,
    pub render_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    /// Simulation and frame rate. One tick per frame.
    pub target_fps: u32,
    /// Folder holding the level grid and its block textures.
    pub level_dir: PathBuf,
    /// Grid file name inside `level_dir`.
    pub level_file: String,
    /// Folder holding sprites and sounds.
    pub assets_dir: PathBuf,
    /// Hero start position in render pixels.
    pub hero_spawn: (i32, i32),
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            level_dir: PathBuf::from(DEFAULT_LEVEL_DIR),
            level_file: DEFAULT_LEVEL_FILE.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            hero_spawn: DEFAULT_HERO_SPAWN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from `config_path`.
    ///
    /// A missing file is not an error. A file that exists but cannot be parsed,
    /// or holds values of the wrong type, is.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        if !self.config_path.exists() {
            info!(
                "No config file at {:?}, using defaults",
                self.config_path
            );
            return Ok(());
        }
        let text = std::fs::read_to_string(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&text)?;

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, level={:?}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.level_path()
        );
        Ok(())
    }

    /// Apply settings from INI text on top of the current values.
    pub fn apply_ini(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;

        let get_u32 = |section: &str, key: &str| -> Result<Option<u32>, String> {
            let value = config
                .getuint(section, key)
                .map_err(|e| format!("[{}] {}: {}", section, key, e))?;
            value
                .map(|v| u32::try_from(v).map_err(|_| format!("[{}] {}: out of range", section, key)))
                .transpose()
        };
        let get_i32 = |section: &str, key: &str| -> Result<Option<i32>, String> {
            let value = config
                .getint(section, key)
                .map_err(|e| format!("[{}] {}: {}", section, key, e))?;
            value
                .map(|v| i32::try_from(v).map_err(|_| format!("[{}] {}: out of range", section, key)))
                .transpose()
        };

        // [render] section
        if let Some(width) = get_u32("render", "width")? {
            self.render_width = width;
        }
        if let Some(height) = get_u32("render", "height")? {
            self.render_height = height;
        }

        // [window] section
        if let Some(width) = get_u32("window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = get_u32("window", "height")? {
            self.window_height = height;
        }
        if let Some(fps) = get_u32("window", "target_fps")? {
            self.target_fps = fps;
        }

        // [level] section
        if let Some(dir) = config.get("level", "dir") {
            self.level_dir = PathBuf::from(dir);
        }
        if let Some(file) = config.get("level", "file") {
            self.level_file = file;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        // [hero] section
        if let Some(x) = get_i32("hero", "spawn_x")? {
            self.hero_spawn.0 = x;
        }
        if let Some(y) = get_i32("hero", "spawn_y")? {
            self.hero_spawn.1 = y;
        }

        self.validate()
    }

    fn validate(&self) -> Result<(), String> {
        if self.render_width == 0 || self.render_height == 0 {
            return Err("render size must be non-zero".into());
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err("window size must be non-zero".into());
        }
        if self.target_fps == 0 {
            return Err("target_fps must be non-zero".into());
        }
        Ok(())
    }

    /// Override the level folder, as the `--level` flag does.
    pub fn set_level_dir(&mut self, dir: impl AsRef<Path>) {
        self.level_dir = dir.as_ref().to_path_buf();
    }

    /// Full path of the level grid file.
    pub fn level_path(&self) -> PathBuf {
        self.level_dir.join(&self.level_file)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Get the render target size as signed pixels, the unit gameplay uses.
    pub fn render_size(&self) -> (i32, i32) {
        (self.render_width as i32, self.render_height as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.render_size(), (640, 320));
        assert_eq!(config.window_size(), (1280, 640));
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.hero_spawn, (20, 290));
        assert_eq!(config.level_path(), PathBuf::from("assets/level_1/level2.txt"));
    }

    #[test]
    fn test_apply_ini_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .apply_ini("[window]\ntarget_fps = 60\n[level]\ndir = levels/two\n[hero]\nspawn_x = -4\n")
            .unwrap();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.level_dir, PathBuf::from("levels/two"));
        assert_eq!(config.level_file, "level2.txt");
        assert_eq!(config.hero_spawn, (-4, 290));
    }

    #[test]
    fn test_apply_ini_rejects_bad_values() {
        let mut config = GameConfig::new();
        assert!(config.apply_ini("[render]\nwidth = wide\n").is_err());
        let mut config = GameConfig::new();
        assert!(config.apply_ini("[window]\ntarget_fps = 0\n").is_err());
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/no/such/config.ini");
        assert!(config.load_from_file().is_ok());
        assert_eq!(config, GameConfig::with_path("/no/such/config.ini"));
    }

    #[test]
    fn test_set_level_dir() {
        let mut config = GameConfig::new();
        config.set_level_dir("other");
        assert_eq!(config.level_path(), PathBuf::from("other/level2.txt"));
    }
}
