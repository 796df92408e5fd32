use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{Error, Result};
use crate::records::{Group, Indication, Location};
use crate::source::{RecordSet, RecordSource};

/// SQLite-backed record store.
///
/// Expects `Locations(name, lat, lng, alt, rad)` and
/// `Indications(nameA, nameB, forwardInfo, backwardInfo)` tables with the
/// coordinates stored as decimal text. A `Groups(name, of)` table is optional;
/// when absent there are no aliases.
#[derive(Debug)]
pub struct SqliteSource {
    path: PathBuf,
    connection: Connection,
    has_groups: bool,
}

impl SqliteSource {
    /// Open a dataset and verify its tables.
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(Error::DatasetNotFound {
                path: db_path.to_path_buf(),
            });
        }
        let connection = Connection::open(db_path)?;
        let has_core_tables =
            table_exists(&connection, "Locations")? && table_exists(&connection, "Indications")?;
        if !has_core_tables {
            return Err(Error::UnsupportedDataset {
                path: db_path.to_path_buf(),
            });
        }
        let has_groups = table_exists(&connection, "Groups")?;
        debug!(path = %db_path.display(), has_groups, "opened SQLite dataset");

        Ok(Self {
            path: db_path.to_path_buf(),
            connection,
            has_groups,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for SqliteSource {
    fn locations(&self) -> Result<Vec<Location>> {
        let mut statement = self
            .connection
            .prepare("SELECT name, lat, lng, alt, rad FROM Locations ORDER BY rowid")?;
        let rows = statement.query_map([], read_location_row)?;

        let mut locations = Vec::new();
        for row in rows {
            let (name, lat, lng, alt, rad) = row?;
            locations.push(Location::parse(name, &lat, &lng, &alt, &rad)?);
        }
        Ok(locations)
    }

    fn indications(&self) -> Result<Vec<Indication>> {
        let mut statement = self.connection.prepare(
            "SELECT nameA, nameB, forwardInfo, backwardInfo FROM Indications ORDER BY rowid",
        )?;
        let rows = statement.query_map([], read_indication_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn groups(&self) -> Result<Vec<Group>> {
        if !self.has_groups {
            return Ok(Vec::new());
        }
        let mut statement = self
            .connection
            .prepare(r#"SELECT name, "of" FROM "Groups" ORDER BY rowid"#)?;
        let rows = statement.query_map([], |row| {
            Ok(Group {
                name: row.get(0)?,
                of: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn indications_for(&self, name: &str) -> Result<Vec<Indication>> {
        let mut statement = self.connection.prepare(
            "SELECT nameA, nameB, forwardInfo, backwardInfo FROM Indications \
             WHERE nameA = ?1 OR nameB = ?1 ORDER BY rowid",
        )?;
        let rows = statement.query_map([name], read_indication_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

/// Load every record from a SQLite dataset into memory.
pub fn load_records(db_path: &Path) -> Result<RecordSet> {
    RecordSet::from_source(&SqliteSource::open(db_path)?)
}

type LocationRow = (String, String, String, String, String);

fn read_location_row(row: &Row<'_>) -> rusqlite::Result<LocationRow> {
    Ok((
        row.get(0)?,
        read_text(row, 1)?,
        read_text(row, 2)?,
        read_text(row, 3)?,
        read_text(row, 4)?,
    ))
}

fn read_indication_row(row: &Row<'_>) -> rusqlite::Result<Indication> {
    Ok(Indication {
        name_a: row.get(0)?,
        name_b: row.get(1)?,
        forward_info: row.get(2)?,
        backward_info: row.get(3)?,
    })
}

/// Coordinates are stored as decimal text; integer cells are accepted too.
/// REAL cells are rejected.
fn read_text(row: &Row<'_>, index: usize) -> rusqlite::Result<String> {
    use rusqlite::types::ValueRef;

    match row.get_ref(index)? {
        ValueRef::Text(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(value) => Ok(value.to_string()),
        _ => row.get(index),
    }
}

fn table_exists(connection: &Connection, table: &str) -> Result<bool> {
    let found: Option<String> = connection
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}
