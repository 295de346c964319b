//! CSV port catalogue import.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use rusqlite::Error as SqliteError;
use thiserror::Error;

mod reader;
mod sqlite;

pub use reader::{CatalogueRows, REQUIRED_COLUMNS, read_port_catalogue};
pub use sqlite::persist_ports_to_sqlite;

/// Errors raised while importing a port catalogue.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The CSV file could not be opened.
    #[error("failed to open port catalogue at {path}")]
    OpenCsv {
        /// Location of the CSV file.
        path: Utf8PathBuf,
        /// Source error returned by `csv`.
        #[source]
        source: csv::Error,
    },
    /// The CSV header row could not be read.
    #[error("failed to read port catalogue headers")]
    ReadHeaders {
        /// Source error returned by `csv`.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("port catalogue is missing the {column} column")]
    MissingColumn {
        /// Expected header name.
        column: &'static str,
    },
    /// A data row could not be read.
    #[error("failed to read port catalogue row")]
    ReadRecord {
        /// Source error returned by `csv`.
        #[source]
        source: csv::Error,
    },
    /// Failed to create the parent directory for the SQLite artefact.
    #[error("failed to create parent directory {path:?}")]
    CreateDirectory {
        /// Path of the directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path:?}")]
    OpenDatabase {
        /// Destination database path.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Beginning the transaction failed.
    #[error("failed to begin port import transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Dropping or recreating the `ports` table failed.
    #[error("failed to replace ports table")]
    ReplaceTable {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Preparing the insert statement failed.
    #[error("failed to prepare port insert statement")]
    PrepareInsert {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Writing a port row failed.
    #[error("failed to persist port {name}")]
    PersistRow {
        /// Name of the port being persisted.
        name: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Committing the transaction failed.
    #[error("failed to commit port import transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
}

/// Counts reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Ports written to the database.
    pub imported: usize,
    /// Rows dropped because a required field was empty.
    pub skipped_incomplete: usize,
    /// Rows dropped because their coordinates were unusable.
    pub skipped_invalid: usize,
    /// Rows dropped because an earlier row already used the name.
    pub skipped_duplicate: usize,
}

/// Import a CSV port catalogue into the SQLite database at `db_path`.
///
/// The existing `ports` table is replaced inside a single transaction, so a
/// failed import leaves the previous catalogue untouched. Parent directories
/// of `db_path` are created when missing.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use tidewater_data::import_ports_csv;
///
/// # fn main() -> Result<(), tidewater_data::ImportError> {
/// let summary = import_ports_csv(Utf8Path::new("ports.csv"), Utf8Path::new("ports.db"))?;
/// assert!(summary.imported > 0);
/// # Ok(())
/// # }
/// ```
pub fn import_ports_csv(
    csv_path: &Utf8Path,
    db_path: &Utf8Path,
) -> Result<ImportSummary, ImportError> {
    let file = std::fs::File::open(csv_path.as_std_path()).map_err(|err| ImportError::OpenCsv {
        path: csv_path.to_path_buf(),
        source: csv::Error::from(err),
    })?;
    let rows = read_port_catalogue(file)?;
    persist_ports_to_sqlite(db_path, &rows.ports)?;

    let summary = ImportSummary {
        imported: rows.ports.len(),
        skipped_incomplete: rows.skipped_incomplete,
        skipped_invalid: rows.skipped_invalid,
        skipped_duplicate: rows.skipped_duplicate,
    };
    info!(
        "imported {} ports from {csv_path} into {db_path} ({} incomplete, {} invalid, {} duplicate rows skipped)",
        summary.imported,
        summary.skipped_incomplete,
        summary.skipped_invalid,
        summary.skipped_duplicate
    );
    Ok(summary)
}

#[cfg(test)]
mod tests;
