//! Bundle download, extraction, and entry-script execution
//!
//! One operation is in flight at a time: extraction is gated on the
//! download finishing, script execution on extraction. The script run is
//! awaited and its failure propagates to the caller instead of being
//! logged and dropped.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::command::run_command;
use crate::defaults::ENTRY_SCRIPT;
use crate::error::{SetupError, SetupResult};

/// Name under which the downloaded archive is stored in the work dir.
const ARCHIVE_NAME: &str = "setup.zip";

/// Download the bundle at `url`, extract it into `dest_dir`, and return
/// the path of the extracted entry script.
///
/// # Errors
/// Returns `Network` on transport errors or non-success HTTP status,
/// `Extraction` on malformed archive data, and `EntryScriptMissing` if
/// the bundle does not contain the expected script.
pub async fn fetch(url: &str, dest_dir: &Path) -> SetupResult<PathBuf> {
    fs::create_dir_all(dest_dir)?;

    let archive_path = dest_dir.join(ARCHIVE_NAME);
    download(url, &archive_path).await?;
    extract(&archive_path, dest_dir)?;

    let script = dest_dir.join(ENTRY_SCRIPT);
    if !script.exists() {
        return Err(SetupError::EntryScriptMissing(script));
    }
    Ok(script)
}

/// Run the extracted entry script with `node`, stdio inherited, and wait
/// for it to finish.
///
/// # Errors
/// Returns `CommandFailure` if the script cannot be spawned or exits
/// non-zero.
pub fn run_entry_script(script: &Path) -> SetupResult<()> {
    let script_arg = script.to_string_lossy();
    run_command("node", &[script_arg.as_ref()])
}

async fn download(url: &str, dest: &Path) -> SetupResult<()> {
    let network_err = |message: String| SetupError::Network {
        url: url.to_string(),
        message,
    };

    let response = reqwest::get(url)
        .await
        .map_err(|err| network_err(err.to_string()))?;

    if !response.status().is_success() {
        return Err(network_err(format!("HTTP {}", response.status())));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| network_err(err.to_string()))?;

    // Remove a partially written archive rather than leave it behind
    if let Err(err) = fs::write(dest, &body) {
        let _ = fs::remove_file(dest);
        return Err(err.into());
    }
    Ok(())
}

fn extract(archive_path: &Path, dest_dir: &Path) -> SetupResult<()> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        // Skip entries whose names would escape the destination
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            continue;
        };
        let out_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
        }
    }

    Ok(())
}
