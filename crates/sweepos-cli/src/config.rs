//! Configuration vault – reads/writes `~/.sweepos/config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted user configuration stored in `~/.sweepos/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Declared room width in cells. Recorded on the robot; movement is not
    /// clamped against it.
    #[serde(default = "default_room_x")]
    pub room_x: i32,

    /// Declared room depth in cells.
    #[serde(default = "default_room_y")]
    pub room_y: i32,

    /// Battery level the simulated gauge starts at, in percent.
    #[serde(default = "default_start_battery_percent")]
    pub start_battery_percent: u8,
}

fn default_room_x() -> i32 {
    10
}
fn default_room_y() -> i32 {
    10
}
fn default_start_battery_percent() -> u8 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            room_x: default_room_x(),
            room_y: default_room_y(),
            start_battery_percent: default_start_battery_percent(),
        }
    }
}

/// Return the path to `~/.sweepos/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
/// Extracted for testability without mutating environment variables.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".sweepos").join("config.toml")
}

/// Load the config from disk.  Returns `None` if the file does not exist.
pub fn load() -> Result<Option<Config>, String> {
    load_from(&config_path())
}

/// Load the config from a specific path.
pub(crate) fn load_from(path: &PathBuf) -> Result<Option<Config>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
    let mut cfg: Config =
        toml::from_str(&raw).map_err(|e| format!("Failed to parse config: {}", e))?;
    apply_env_overrides(&mut cfg);
    Ok(Some(cfg))
}

/// Apply `SWEEPOS_*` environment variable overrides to `cfg`.
///
/// Supported variables:
///
/// | Variable | Config field |
/// |---|---|
/// | `SWEEPOS_ROOM_X` | `room_x` |
/// | `SWEEPOS_ROOM_Y` | `room_y` |
/// | `SWEEPOS_START_BATTERY` | `start_battery_percent` |
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("SWEEPOS_ROOM_X")
        && let Ok(cells) = v.parse::<i32>()
    {
        cfg.room_x = cells;
    }
    if let Ok(v) = std::env::var("SWEEPOS_ROOM_Y")
        && let Ok(cells) = v.parse::<i32>()
    {
        cfg.room_y = cells;
    }
    if let Ok(v) = std::env::var("SWEEPOS_START_BATTERY")
        && let Ok(percent) = v.parse::<u8>()
    {
        cfg.start_battery_percent = percent;
    }
}

/// Save the config to disk, creating `~/.sweepos/` if necessary.
pub fn save(cfg: &Config) -> Result<(), String> {
    save_to(cfg, &config_path())
}

/// Save the config to a specific path.
pub(crate) fn save_to(cfg: &Config, path: &PathBuf) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let raw =
        toml::to_string_pretty(cfg).map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, raw).map_err(|e| format!("Failed to write config at {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());

        let cfg = Config::default();
        save_to(&cfg, &path).expect("save");

        let loaded = load_from(&path).expect("load ok").expect("some");
        assert_eq!(loaded.room_x, 10);
        assert_eq!(loaded.room_y, 10);
        assert_eq!(loaded.start_battery_percent, 100);
    }

    #[test]
    fn config_path_points_to_sweepos_dir() {
        let p = config_path_for_home("/home/testuser");
        assert!(p.to_string_lossy().contains(".sweepos"));
        assert!(p.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn load_from_returns_none_when_missing() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        let result = load_from(&path).expect("no error");
        assert!(result.is_none());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "room_x = 4\n").unwrap();

        let loaded = load_from(&path).expect("load ok").expect("some");
        assert_eq!(loaded.room_x, 4);
        assert_eq!(loaded.room_y, 10);
        assert_eq!(loaded.start_battery_percent, 100);
    }

    #[test]
    fn apply_env_overrides_changes_room() {
        // SAFETY: single-threaded test; no data races on env vars.
        unsafe { std::env::set_var("SWEEPOS_ROOM_X", "7") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.room_x, 7);
        unsafe { std::env::remove_var("SWEEPOS_ROOM_X") };
    }

    #[test]
    fn apply_env_overrides_changes_start_battery() {
        // SAFETY: single-threaded test; no data races on env vars.
        unsafe { std::env::set_var("SWEEPOS_START_BATTERY", "15") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.start_battery_percent, 15);
        unsafe { std::env::remove_var("SWEEPOS_START_BATTERY") };
    }

    #[test]
    fn apply_env_overrides_ignores_invalid_value() {
        // SAFETY: single-threaded test; no data races on env vars.
        unsafe { std::env::set_var("SWEEPOS_ROOM_Y", "not-a-number") };
        let mut cfg = Config::default();
        let original = cfg.room_y;
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.room_y, original);
        unsafe { std::env::remove_var("SWEEPOS_ROOM_Y") };
    }
}
