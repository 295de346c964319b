//! SQLite persistence for imported port catalogues.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use rusqlite::{Connection, Transaction, params};
use tidewater_core::Port;

use super::ImportError;

/// Replace the `ports` table of the database at `path` with `ports`.
///
/// Parent directories are created automatically. The table is dropped and
/// recreated inside one transaction, so readers see either the previous
/// catalogue or the complete new one. Names must be unique ignoring case;
/// a repeated name fails the import with [`ImportError::PersistRow`].
pub fn persist_ports_to_sqlite(path: &Utf8Path, ports: &[Port]) -> Result<(), ImportError> {
    ensure_parent_dir(path)?;
    let mut connection =
        Connection::open(path.as_std_path()).map_err(|source| ImportError::OpenDatabase {
            path: path.as_std_path().to_path_buf(),
            source,
        })?;

    let transaction = connection
        .transaction()
        .map_err(|source| ImportError::BeginTransaction { source })?;

    replace_schema(&transaction)?;
    persist_rows(&transaction, ports)?;

    transaction
        .commit()
        .map_err(|source| ImportError::Commit { source })
}

fn ensure_parent_dir(path: &Utf8Path) -> Result<(), ImportError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    base_dir
        .create_dir_all(&relative)
        .map_err(|source| ImportError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })
}

fn base_dir_and_relative(parent: &Utf8Path) -> Result<(fs_utf8::Dir, Utf8PathBuf), ImportError> {
    let (base, relative) = if parent.is_absolute() {
        ("/", parent.strip_prefix("/").unwrap_or(parent))
    } else {
        (".", parent)
    };

    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority()).map_err(|source| {
        ImportError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        }
    })?;

    Ok((dir, relative.to_path_buf()))
}

fn replace_schema(transaction: &Transaction<'_>) -> Result<(), ImportError> {
    transaction
        .execute_batch(
            "DROP TABLE IF EXISTS ports;
             CREATE TABLE ports (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL UNIQUE COLLATE NOCASE,
                 country TEXT NOT NULL,
                 latitude REAL NOT NULL,
                 longitude REAL NOT NULL
             );",
        )
        .map_err(|source| ImportError::ReplaceTable { source })
}

fn persist_rows(transaction: &Transaction<'_>, ports: &[Port]) -> Result<(), ImportError> {
    if ports.is_empty() {
        return Ok(());
    }

    let mut statement = transaction
        .prepare("INSERT INTO ports (name, country, latitude, longitude) VALUES (?1, ?2, ?3, ?4)")
        .map_err(|source| ImportError::PrepareInsert { source })?;

    for port in ports {
        statement
            .execute(params![
                port.name,
                port.region,
                port.latitude(),
                port.longitude()
            ])
            .map_err(|source| ImportError::PersistRow {
                name: port.name.clone(),
                source,
            })?;
    }

    Ok(())
}
