//! `package.json` scripts merge

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::defaults::default_scripts;
use crate::error::{SetupError, SetupResult};

/// The project manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Seed the default scripts into the project manifest, if one exists.
/// User-defined scripts of the same name win; every other key in the
/// manifest is preserved. A missing manifest is a logged no-op.
///
/// # Errors
/// Returns an I/O error if the file cannot be read or written, or a
/// `Json` error if it is not a JSON object.
pub fn merge_scripts(root: &Path) -> SetupResult<()> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
        println!("No package.json found; skipping script setup.");
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let mut manifest: Value = serde_json::from_str(&raw).map_err(|err| SetupError::Json {
        path: path.clone(),
        message: err.to_string(),
    })?;

    let Some(root_obj) = manifest.as_object_mut() else {
        return Err(SetupError::Json {
            path,
            message: "manifest root is not an object".to_string(),
        });
    };

    let scripts = root_obj
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(scripts) = scripts.as_object_mut() else {
        return Err(SetupError::Json {
            path,
            message: "\"scripts\" is not an object".to_string(),
        });
    };

    for (name, command) in default_scripts() {
        scripts
            .entry(name)
            .or_insert_with(|| Value::String(command.to_string()));
    }

    fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
    Ok(())
}
