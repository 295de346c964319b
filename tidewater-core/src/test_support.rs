//! Test-only registries and fixtures used by unit and behaviour tests.

use std::cell::Cell;

use crate::{Port, PortRegistry, RegistryError};

/// In-memory `PortRegistry` implementation used in tests.
///
/// Lookups perform a linear scan and follow the same matching rules as the
/// SQLite registry.
#[derive(Default, Debug, Clone)]
pub struct MemoryRegistry {
    ports: Vec<Port>,
}

impl MemoryRegistry {
    /// Create a registry from a collection of ports.
    pub fn with_ports<I>(ports: I) -> Self
    where
        I: IntoIterator<Item = Port>,
    {
        Self {
            ports: ports.into_iter().collect(),
        }
    }
}

impl PortRegistry for MemoryRegistry {
    fn lookup_by_name(&self, name: &str) -> Result<Option<Port>, RegistryError> {
        Ok(self.ports.iter().find(|port| port.matches_name(name)).cloned())
    }

    fn list_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, RegistryError> {
        let needle = region.trim().to_lowercase();
        Ok(self
            .ports
            .iter()
            .filter(|port| port.region.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Registry whose every call fails, simulating a storage fault.
#[derive(Default, Debug)]
pub struct FailingRegistry {
    calls: Cell<usize>,
}

impl FailingRegistry {
    /// Number of lookups attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn fail(&self) -> RegistryError {
        self.calls.set(self.calls.get() + 1);
        RegistryError::unavailable("registry offline")
    }
}

impl PortRegistry for FailingRegistry {
    fn lookup_by_name(&self, _name: &str) -> Result<Option<Port>, RegistryError> {
        Err(self.fail())
    }

    fn list_by_region(&self, _region: &str, _limit: usize) -> Result<Vec<Port>, RegistryError> {
        Err(self.fail())
    }
}

/// Seed a SQLite database with a `ports` table holding `ports` in order.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_ports(
    path: &std::path::Path,
    ports: &[Port],
) -> Result<(), rusqlite::Error> {
    let mut connection = rusqlite::Connection::open(path)?;
    let transaction = connection.transaction()?;
    transaction.execute(
        "CREATE TABLE IF NOT EXISTS ports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            country TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL
        )",
        [],
    )?;
    {
        let mut insert = transaction.prepare(
            "INSERT INTO ports (name, country, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for port in ports {
            insert.execute(rusqlite::params![
                port.name,
                port.region,
                port.latitude(),
                port.longitude()
            ])?;
        }
    }
    transaction.commit()
}
