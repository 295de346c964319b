//! SQLite-backed port registry.

use std::{
    fmt,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use thiserror::Error;

use crate::Port;

use super::{PortRegistry, RegistryError};

/// Accepted page sizes for [`SqlitePortRegistry::list_ports`].
pub const CATALOGUE_PAGE_LIMIT: RangeInclusive<usize> = 1..=100;

const PORT_COLUMNS: &str = "name, country, latitude, longitude";

/// Error raised when opening or browsing the port database.
#[derive(Debug, Error)]
pub enum SqlitePortRegistryError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// The database has no `ports` table.
    #[error("database at {path} has no ports table; import a port catalogue first")]
    MissingTable {
        /// Location of the SQLite database on disk.
        path: PathBuf,
    },
    /// A catalogue page size was outside [`CATALOGUE_PAGE_LIMIT`].
    #[error("page limit must be between 1 and 100, got {limit}")]
    InvalidPageLimit {
        /// Requested page size.
        limit: usize,
    },
    /// Generic SQLite error when reading port rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only port registry backed by the `ports` table of a SQLite database.
///
/// Rows are returned in insertion (`rowid`) order, which is the registry's
/// native order for region listings.
pub struct SqlitePortRegistry {
    connection: Connection,
    path: PathBuf,
}

impl fmt::Debug for SqlitePortRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlitePortRegistry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqlitePortRegistry {
    /// Open an existing port database read-only.
    pub fn open<P>(database_path: P) -> Result<Self, SqlitePortRegistryError>
    where
        P: AsRef<Path>,
    {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqlitePortRegistryError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let has_table: bool = connection.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'ports')",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Err(SqlitePortRegistryError::MissingTable {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    /// Location of the backing database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Page through the whole catalogue in storage order.
    pub fn list_ports(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Port>, SqlitePortRegistryError> {
        if !CATALOGUE_PAGE_LIMIT.contains(&limit) {
            return Err(SqlitePortRegistryError::InvalidPageLimit { limit });
        }
        let query = format!("SELECT {PORT_COLUMNS} FROM ports ORDER BY rowid LIMIT ?1 OFFSET ?2");
        let mut statement = self.connection.prepare(&query)?;
        let rows = statement.query_map(params![to_sql_int(limit), to_sql_int(offset)], port_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Distinct, non-empty region labels in alphabetical order.
    pub fn regions(&self) -> Result<Vec<String>, SqlitePortRegistryError> {
        let mut statement = self.connection.prepare(
            "SELECT DISTINCT country FROM ports \
             WHERE country IS NOT NULL AND country != '' ORDER BY country",
        )?;
        let rows = statement.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Port>, rusqlite::Error> {
        let query = format!(
            "SELECT {PORT_COLUMNS} FROM ports WHERE LOWER(name) = LOWER(?1) ORDER BY rowid LIMIT 1"
        );
        self.connection
            .query_row(&query, params![name.trim()], port_from_row)
            .optional()
    }

    fn find_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, rusqlite::Error> {
        let query = format!(
            "SELECT {PORT_COLUMNS} FROM ports \
             WHERE LOWER(country) LIKE LOWER(?1) ESCAPE '\\' ORDER BY rowid LIMIT ?2"
        );
        let pattern = format!("%{}%", escape_like(region.trim()));
        let mut statement = self.connection.prepare(&query)?;
        let rows = statement.query_map(params![pattern, to_sql_int(limit)], port_from_row)?;
        rows.collect()
    }
}

impl PortRegistry for SqlitePortRegistry {
    fn lookup_by_name(&self, name: &str) -> Result<Option<Port>, RegistryError> {
        self.find_by_name(name).map_err(RegistryError::backend)
    }

    fn list_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, RegistryError> {
        self.find_by_region(region, limit)
            .map_err(RegistryError::backend)
    }
}

fn port_from_row(row: &Row<'_>) -> Result<Port, rusqlite::Error> {
    let name: String = row.get(0)?;
    let region: String = row.get(1)?;
    let latitude: f64 = row.get(2)?;
    let longitude: f64 = row.get(3)?;
    Ok(Port::from_lat_lon(name, region, latitude, longitude))
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
