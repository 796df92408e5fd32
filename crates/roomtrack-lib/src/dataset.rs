use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::db::SqliteSource;
use crate::error::{Error, Result};
use crate::source::{RecordSet, RecordSource};

/// Default filename for the dataset in the platform data directory.
const DATASET_FILENAME: &str = "roomtrack.db";

/// On-disk dataset flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Sqlite,
}

impl DatasetFormat {
    /// `.json` files are JSON documents; everything else is treated as SQLite.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DatasetFormat::Json,
            _ => DatasetFormat::Sqlite,
        }
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "roomtrack", "roomtrack").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Pick the explicit path when given, otherwise the platform default.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_dataset_path()?,
    };
    if !path.exists() {
        return Err(Error::DatasetNotFound { path });
    }
    Ok(path)
}

/// Open the dataset at `path` as a record source.
pub fn open_dataset(path: &Path) -> Result<Box<dyn RecordSource>> {
    let format = DatasetFormat::detect(path);
    debug!(path = %path.display(), ?format, "opening dataset");
    match format {
        DatasetFormat::Json => Ok(Box::new(RecordSet::from_json_path(path)?)),
        DatasetFormat::Sqlite => Ok(Box::new(SqliteSource::open(path)?)),
    }
}
