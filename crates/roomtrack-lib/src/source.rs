use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::records::{Group, Indication, Location};

/// Read-only record queries the routing pipeline depends on.
///
/// Each call is a fresh fetch; implementations must not hand out partially
/// loaded data when they fail.
pub trait RecordSource {
    /// Fetch every location record.
    fn locations(&self) -> Result<Vec<Location>>;

    /// Fetch every indication record.
    fn indications(&self) -> Result<Vec<Indication>>;

    /// Fetch every group alias record.
    fn groups(&self) -> Result<Vec<Group>>;

    /// Fetch indications touching the named location. The default filters
    /// [`RecordSource::indications`].
    fn indications_for(&self, name: &str) -> Result<Vec<Indication>> {
        Ok(self
            .indications()?
            .into_iter()
            .filter(|indication| indication.name_a == name || indication.name_b == name)
            .collect())
    }
}

/// Fully in-memory record collection, also the JSON dataset format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub indications: Vec<Indication>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl RecordSet {
    /// Fetch every record from `source` once.
    pub fn from_source<S>(source: &S) -> Result<Self>
    where
        S: RecordSource + ?Sized,
    {
        Ok(Self {
            locations: source.locations()?,
            indications: source.indications()?,
            groups: source.groups()?,
        })
    }

    /// Load a JSON dataset with `locations`, `indications` and `groups` arrays.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let records: RecordSet = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            locations = records.locations.len(),
            indications = records.indications.len(),
            groups = records.groups.len(),
            "loaded JSON dataset"
        );
        Ok(records)
    }
}

impl RecordSource for RecordSet {
    fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn indications(&self) -> Result<Vec<Indication>> {
        Ok(self.indications.clone())
    }

    fn groups(&self) -> Result<Vec<Group>> {
        Ok(self.groups.clone())
    }
}
