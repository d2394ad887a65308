//! Where quire looks for its configuration, search index and log file.
//!
//! `QUIRE_CONFIG_DIR` and `QUIRE_DATA_DIR` win over the platform locations.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "QUIRE_CONFIG_DIR";
const DATA_DIR_ENV: &str = "QUIRE_DATA_DIR";

/// Index the site build exports, looked up in the data directory.
pub const INDEX_FILE_NAME: &str = "search-index.json";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from("io", "quire", "quire")
		.ok_or_else(|| anyhow!("no home directory to place quire's files in"))
}

/// Read a directory override. An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	match dir_from_env(CONFIG_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.config_local_dir().to_path_buf()),
	}
}

/// Directory for the log file and the default search index.
pub fn get_data_dir() -> Result<PathBuf> {
	match dir_from_env(DATA_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.data_local_dir().to_path_buf()),
	}
}

pub fn default_index_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(INDEX_FILE_NAME))
}
