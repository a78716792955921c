//! VS Code workspace settings merge

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::defaults::default_settings;
use crate::error::{SetupError, SetupResult};

/// Directory holding workspace editor settings.
pub const SETTINGS_DIR: &str = ".vscode";

/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_FILE: &str = "settings.json";

/// Write the default editor settings under `root`, shallow-merging on
/// top of an existing file. On key conflict the defaults win; unrelated
/// existing keys are preserved.
///
/// # Errors
/// Returns an I/O error if the file cannot be read or written, or a
/// `Json` error if existing settings are not a JSON object.
pub fn merge_settings(root: &Path) -> SetupResult<()> {
    let dir = root.join(SETTINGS_DIR);
    fs::create_dir_all(&dir)?;
    let path = dir.join(SETTINGS_FILE);

    let merged = if path.exists() {
        let raw = fs::read_to_string(&path)?;
        let mut existing: Value = serde_json::from_str(&raw).map_err(|err| SetupError::Json {
            path: path.clone(),
            message: err.to_string(),
        })?;

        let Some(existing_obj) = existing.as_object_mut() else {
            return Err(SetupError::Json {
                path,
                message: "settings root is not an object".to_string(),
            });
        };
        if let Value::Object(defaults) = default_settings() {
            for (key, value) in defaults {
                existing_obj.insert(key, value);
            }
        }
        existing
    } else {
        default_settings()
    };

    fs::write(&path, serde_json::to_string_pretty(&merged)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_settings(root: &Path) -> Value {
        let raw = fs::read_to_string(root.join(SETTINGS_DIR).join(SETTINGS_FILE)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_creates_settings_fresh() {
        let dir = TempDir::new().unwrap();

        merge_settings(dir.path()).unwrap();

        let settings = read_settings(dir.path());
        assert_eq!(settings["editor.formatOnSave"], true);
        assert_eq!(settings["editor.defaultFormatter"], "esbenp.prettier-vscode");
        assert_eq!(settings["files.exclude"]["**/node_modules"], true);
    }

    #[test]
    fn test_defaults_win_on_conflict() {
        let dir = TempDir::new().unwrap();
        let vscode = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&vscode).unwrap();
        fs::write(
            vscode.join(SETTINGS_FILE),
            r#"{"editor.formatOnSave": false}"#,
        )
        .unwrap();

        merge_settings(dir.path()).unwrap();

        let settings = read_settings(dir.path());
        assert_eq!(settings["editor.formatOnSave"], true);
    }

    #[test]
    fn test_unrelated_keys_preserved() {
        let dir = TempDir::new().unwrap();
        let vscode = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&vscode).unwrap();
        fs::write(
            vscode.join(SETTINGS_FILE),
            r#"{"workbench.colorTheme": "Monokai"}"#,
        )
        .unwrap();

        merge_settings(dir.path()).unwrap();

        let settings = read_settings(dir.path());
        assert_eq!(settings["workbench.colorTheme"], "Monokai");
        assert_eq!(settings["eslint.format.enable"], true);
    }

    #[test]
    fn test_invalid_settings_json_is_error() {
        let dir = TempDir::new().unwrap();
        let vscode = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&vscode).unwrap();
        fs::write(vscode.join(SETTINGS_FILE), "not json").unwrap();

        let err = merge_settings(dir.path()).unwrap_err();
        assert!(matches!(err, SetupError::Json { .. }));
    }
}
