use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    fn new(settings: SettingsData, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load settings for start-up, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> SettingsData {
    let path = settings_path();
    match load_settings_from_path(&path) {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::info!("settings loaded from {}", path.display());
                },
                SettingsLoadStatus::Missing => {
                    log::debug!(
                        "no settings at {}, using defaults",
                        path.display()
                    );
                },
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!(
                        "invalid settings at {}, using defaults: {message}",
                        path.display()
                    );
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("failed to load settings, using defaults: {err}");
            SettingsData::default()
        },
    }
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(SettingsLoad::new(
        SettingsData::from_json(&parsed),
        SettingsLoadStatus::Loaded,
    ))
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("curtain")
            .join("settings.json");
    }

    std::env::temp_dir().join("curtain").join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use curtain_surface::TransitionMode;

    use super::{
        SettingsData, SettingsError, SettingsLoadStatus,
        load_settings_from_path,
    };

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let loaded = load_settings_from_path(&path)
            .expect("missing settings should not fail");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Missing));
        assert_eq!(settings, SettingsData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_settings_are_parsed() {
        let root = test_temp_dir("valid");
        let path = root.join("settings.json");
        fs::write(
            &path,
            r#"{ "transition": { "mode": "immediate", "hide_delay_ms": 50 } }"#,
        )
        .expect("test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Loaded));
        let config = settings.transition_config();
        assert_eq!(config.mode, TransitionMode::Immediate);
        assert_eq!(config.hide_delay, Duration::from_millis(50));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("loading invalid settings should not fail with io error");
        let (settings, status) = loaded.into_parts();

        assert_eq!(settings, SettingsData::default());
        match status {
            SettingsLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_in_place_of_file_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        let result = load_settings_from_path(&root);

        assert!(matches!(result, Err(SettingsError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "curtain-settings-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
