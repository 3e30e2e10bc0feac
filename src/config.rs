use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::constants::{NUM_DAYS, NUM_SYMBOLS_TO_FETCH, START_TIME};
use crate::paths::{
    ensure_dir, resolve_data_save_path, resolve_output_folder_path, resolve_symbols_csv_path,
};

/// Resolved paths and fetch constants for the data pipeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    data_save_path_quant: PathBuf,
    symbols_csv_path: PathBuf,
    start_time: &'static str,
    num_days: u32,
    num_symbols_to_fetch: usize,
    output_folder_path: PathBuf,
}

impl Config {
    /// Computes all values relative to `base_dir` without touching the file system.
    ///
    /// # Errors
    /// - `base_dir` is relative and the working directory can't be read.
    pub fn resolve(base_dir: &Path) -> Result<Self> {
        let data_save_path_quant = resolve_data_save_path(base_dir)?;
        let symbols_csv_path = resolve_symbols_csv_path(&data_save_path_quant);
        let output_folder_path = resolve_output_folder_path(base_dir)?;

        Ok(Self {
            data_save_path_quant,
            symbols_csv_path,
            start_time: START_TIME,
            num_days: NUM_DAYS,
            num_symbols_to_fetch: NUM_SYMBOLS_TO_FETCH,
            output_folder_path,
        })
    }

    /// Resolves the configuration and makes sure both data directories exist.
    ///
    /// Safe to call repeatedly: existing directories and their contents are left alone.
    ///
    /// # Errors
    /// - Path resolution fails, see [`Config::resolve`].
    /// - Either directory can't be created. The error names the failing path.
    pub fn init(base_dir: &Path) -> Result<Self> {
        let config = Self::resolve(base_dir)?;

        ensure_dir(&config.data_save_path_quant)?;
        ensure_dir(&config.output_folder_path)?;

        info!(
            data = %config.data_save_path_quant.display(),
            output = %config.output_folder_path.display(),
            "configuration initialized"
        );

        Ok(config)
    }

    /// [`Config::init`] anchored at the current working directory
    pub fn init_from_current_dir() -> Result<Self> {
        let cwd = env::current_dir().context("Couldn't resolve the current working directory.")?;
        Self::init(&cwd)
    }

    /// Root directory for quantitative data
    pub fn data_save_path_quant(&self) -> &Path {
        &self.data_save_path_quant
    }

    /// CSV listing the trading symbols, it may not exist yet
    pub fn symbols_csv_path(&self) -> &Path {
        &self.symbols_csv_path
    }

    pub fn start_time(&self) -> &'static str {
        self.start_time
    }

    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    pub fn num_symbols_to_fetch(&self) -> usize {
        self.num_symbols_to_fetch
    }

    /// Destination for per-symbol output files
    pub fn output_folder_path(&self) -> &Path {
        &self.output_folder_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_matches_the_documented_layout() {
        let config = Config::resolve(Path::new("/home/user/project/scripts")).unwrap();

        assert_eq!(
            config.data_save_path_quant(),
            Path::new("/home/user/project/quant_data")
        );
        assert_eq!(
            config.symbols_csv_path(),
            Path::new("/home/user/project/quant_data/top_100_trending_crypto.csv")
        );
        assert_eq!(
            config.output_folder_path(),
            Path::new("/home/user/project/quant_data/7_days_data")
        );
        assert_eq!(config.start_time(), "2024-10-26 01:00:00");
        assert_eq!(config.num_days(), 7);
        assert_eq!(config.num_symbols_to_fetch(), 100);
    }

    #[test]
    fn resolve_does_not_create_anything() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("scripts");

        let config = Config::resolve(&base).unwrap();

        assert!(!config.data_save_path_quant().exists());
        assert!(!config.output_folder_path().exists());
    }

    #[test]
    fn output_folder_equals_data_path_join() {
        let config = Config::resolve(Path::new("/opt/a/b")).unwrap();
        assert_eq!(
            config.output_folder_path(),
            config.data_save_path_quant().join("7_days_data")
        );
    }

    #[test]
    fn init_creates_both_directories_but_not_the_csv() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("scripts");

        let config = Config::init(&base).unwrap();

        assert!(config.data_save_path_quant().is_dir());
        assert!(config.output_folder_path().is_dir());
        assert!(!config.symbols_csv_path().exists());
    }

    #[test]
    fn serializes_paths_and_constants() {
        let config = Config::resolve(Path::new("/home/user/project/scripts")).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["data_save_path_quant"], "/home/user/project/quant_data");
        assert_eq!(json["start_time"], "2024-10-26 01:00:00");
        assert_eq!(json["num_days"], 7);
        assert_eq!(json["num_symbols_to_fetch"], 100);
    }
}
