use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::constants::{OUTPUT_DIR_NAME, QUANT_DATA_DIR_NAME, SYMBOLS_CSV_FILE_NAME};

/// Turns `path` into an absolute, lexically normalized path.
///
/// Relative paths are anchored at the current working directory.
/// `.` segments are dropped and `..` removes the preceding segment, but never climbs
/// above the root. Symbolic links are not resolved.
///
/// # Errors
/// - The working directory can't be read (only for relative paths).
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("Couldn't resolve the current working directory.")?
            .join(path)
    };

    Ok(normalize(&path))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            // Popping the root is a no-op, so `/..` stays `/`.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// `<base>/../quant_data`, absolute
pub fn resolve_data_save_path(base_dir: &Path) -> Result<PathBuf> {
    let path = absolutize(&base_dir.join("..").join(QUANT_DATA_DIR_NAME))?;
    debug!(path = %path.display(), "resolved quant data path");
    Ok(path)
}

/// `<data_save_path>/top_100_trending_crypto.csv`
///
/// The file itself is neither created nor read.
pub fn resolve_symbols_csv_path(data_save_path: &Path) -> PathBuf {
    data_save_path.join(SYMBOLS_CSV_FILE_NAME)
}

/// `<base>/../quant_data/7_days_data`, absolute
///
/// Built from the base directory rather than from the data path.
pub fn resolve_output_folder_path(base_dir: &Path) -> Result<PathBuf> {
    let path = absolutize(
        &base_dir
            .join("..")
            .join(QUANT_DATA_DIR_NAME)
            .join(OUTPUT_DIR_NAME),
    )?;
    debug!(path = %path.display(), "resolved output folder path");
    Ok(path)
}

/// Makes sure `path` exists as a directory, creating missing parents as needed.
///
/// A directory that already exists is not an error, including one created
/// concurrently by another process.
///
/// # Errors
/// - A path segment exists but is not a directory.
/// - The OS refuses to create the directory (permissions, full disk, ...).
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        info!(path = %path.display(), "directory already exists");
        return Ok(());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Could not create directory \"{}\".", path.display()))?;
    info!(path = %path.display(), "created directory");

    Ok(())
}
