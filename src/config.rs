//! Preferences persistence for regis-portfolio.
//!
//! One small JSON file under the user config directory holding the
//! explicitly chosen theme. Absence of the file (or of the key) means
//! "no preference" — the app falls back to ambient detection.
//!
//! Structure:
//! - Pure functions: path computation
//! - Effect functions: file I/O

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{Preferences, Theme};

/// Application directory name under the platform config dir.
const APP_DIR: &str = "regis-portfolio";

/// Preferences filename within the application directory.
const PREFERENCES_FILENAME: &str = "preferences.json";

// ============================================================================
// PURE FUNCTIONS (Paths)
// ============================================================================

/// Returns the default preferences file path.
///
/// On Linux: ~/.config/regis-portfolio/preferences.json
pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(PREFERENCES_FILENAME)
}

// ============================================================================
// EFFECT FUNCTIONS (I/O)
// ============================================================================

/// Load preferences from a file.
///
/// A missing file is an empty preference set, not an error. A corrupt
/// file is also treated as empty — a broken preferences file should
/// never keep the portfolio from starting.
pub fn load_preferences(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Preferences::default(),
    }
}

/// Save preferences, creating parent directories as needed.
pub fn save_preferences(path: &Path, prefs: &Preferences) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Persist a theme choice, preserving any other keys already stored.
pub fn store_theme(path: &Path, theme: Theme) -> io::Result<()> {
    let mut prefs = load_preferences(path);
    prefs.theme = Some(theme);
    save_preferences(path, &prefs)
}

/// Remove the stored theme choice, if any.
pub fn clear_theme(path: &Path) -> io::Result<()> {
    let mut prefs = load_preferences(path);
    prefs.theme = None;
    save_preferences(path, &prefs)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn prefs_path(dir: &TempDir) -> PathBuf {
        dir.path().join("prefs").join(PREFERENCES_FILENAME)
    }

    #[test]
    fn default_path_is_under_app_dir() {
        let path = default_preferences_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.contains(APP_DIR));
        assert!(path_str.ends_with(PREFERENCES_FILENAME));
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = load_preferences(&prefs_path(&dir));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_preferences(&path), Preferences::default());
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = prefs_path(&dir);

        store_theme(&path, Theme::Light).unwrap();
        assert_eq!(load_preferences(&path).theme, Some(Theme::Light));

        store_theme(&path, Theme::Dark).unwrap();
        assert_eq!(load_preferences(&path).theme, Some(Theme::Dark));
    }

    #[test]
    fn repeated_identical_stores_are_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = prefs_path(&dir);

        store_theme(&path, Theme::Light).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        store_theme(&path, Theme::Light).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_removes_only_the_theme() {
        let dir = TempDir::new().unwrap();
        let path = prefs_path(&dir);

        store_theme(&path, Theme::Dark).unwrap();
        clear_theme(&path).unwrap();
        assert_eq!(load_preferences(&path).theme, None);
        // File still exists and parses.
        assert!(path.exists());
    }
}
