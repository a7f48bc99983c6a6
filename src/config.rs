//! Resolution of runtime settings that have no explicit value.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DATABASE_FILE: &str = "mission-logistics.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Platform data directory holding the default database
pub struct DataDir {
    dir: PathBuf,
}

impl DataDir {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "mission-logistics-db").ok_or_else(|| {
                    Error::Config("could not determine a data directory".to_string())
                })?;
                proj_dirs.data_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn database_path(&self) -> PathBuf {
        self.dir.join(DATABASE_FILE)
    }
}

/// The explicit database path, or the default one inside the data directory
pub fn resolve_database_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(DataDir::new(None)?.database_path()),
    }
}
