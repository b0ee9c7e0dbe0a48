//! Configuration module for the Decarbonator dashboard
//!
//! Only UI preferences are persisted. The active page and the plant list are
//! session state and always start fresh.
//!
//! # App Data Location
//!
//! - **Linux**: `~/.local/share/dev.decarbonator.dashboard/`
//! - **macOS**: `~/Library/Application Support/dev.decarbonator.dashboard/`
//! - **Windows**: `%APPDATA%\dev.decarbonator.dashboard\`
//!
//! # Files
//!
//! - `app_state.json` - UI preferences and last window size
//!
//! # Example
//!
//! ```ignore
//! use decarbonator_dashboard::config::AppState;
//!
//! let mut state = AppState::load_or_default();
//! state.ui_preferences.dark_mode = false;
//! state.save()?;
//! ```

use crate::error::{DashboardError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.decarbonator.dashboard";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Default window size in logical points
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];

/// Smallest window the layout still fits in
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

/// Smallest accepted font scale
pub const MIN_FONT_SCALE: f32 = 0.5;

/// Largest accepted font scale
pub const MAX_FONT_SCALE: f32 = 3.0;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        DashboardError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).context("Failed to create app data directory")?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== App State ====================

/// Persistent application state
///
/// Survives restarts. Routing state is never written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Window size on last exit
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
}

fn default_app_state_version() -> u32 {
    1
}

fn default_window_size() -> [f32; 2] {
    DEFAULT_WINDOW_SIZE
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            DashboardError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(path)
    }

    /// Load app state from a specific file
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read app state {:?}", path))?;

        let mut state = serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse app state {:?}", path))?;
        state.ui_preferences.sanitize();
        Ok(state)
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_STATE_FILE))
    }

    /// Save app state to a specific file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create app state directory")?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize app state")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write app state {:?}", path))
    }

    /// Record the window size seen on exit
    pub fn update_window_size(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() {
            self.window_size = [
                width.max(MIN_WINDOW_SIZE[0]),
                height.max(MIN_WINDOW_SIZE[1]),
            ];
        }
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor, changed with the sidebar's A-/A+ buttons
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_scale: 1.0,
        }
    }
}

impl UiPreferences {
    /// Clamp values a hand-edited file could have broken
    pub fn sanitize(&mut self) {
        if !self.font_scale.is_finite() {
            self.font_scale = default_font_scale();
        }
        self.font_scale = self.font_scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
    }

    /// Set the font scale, clamped to the accepted range
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = scale;
        self.sanitize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.version, 1);
        assert!(state.ui_preferences.dark_mode);
        assert_eq!(state.window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_app_state_serialization() {
        let mut state = AppState::default();
        state.ui_preferences.dark_mode = false;
        state.ui_preferences.font_scale = 1.25;

        let json = serde_json::to_string_pretty(&state).unwrap();
        let parsed: AppState = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, state);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppState::default());

        let parsed: AppState =
            serde_json::from_str(r#"{"ui_preferences": {"dark_mode": false}}"#).unwrap();
        assert!(!parsed.ui_preferences.dark_mode);
        assert_eq!(parsed.ui_preferences.font_scale, 1.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed: AppState =
            serde_json::from_str(r#"{"version": 1, "page": "map"}"#).unwrap();
        assert_eq!(parsed, AppState::default());
    }

    #[test]
    fn test_sanitize_font_scale() {
        let mut prefs = UiPreferences {
            dark_mode: true,
            font_scale: 42.0,
        };
        prefs.sanitize();
        assert_eq!(prefs.font_scale, MAX_FONT_SCALE);

        prefs.font_scale = f32::NAN;
        prefs.sanitize();
        assert_eq!(prefs.font_scale, 1.0);
    }

    #[test]
    fn test_set_font_scale_clamps() {
        let mut prefs = UiPreferences::default();
        prefs.set_font_scale(1.5);
        assert_eq!(prefs.font_scale, 1.5);
        prefs.set_font_scale(0.1);
        assert_eq!(prefs.font_scale, MIN_FONT_SCALE);
    }

    #[test]
    fn test_update_window_size_clamps() {
        let mut state = AppState::default();
        state.update_window_size(100.0, 2000.0);
        assert_eq!(state.window_size, [MIN_WINDOW_SIZE[0], 2000.0]);

        state.update_window_size(f32::INFINITY, 900.0);
        assert_eq!(state.window_size, [MIN_WINDOW_SIZE[0], 2000.0]);
    }
}
