//! Port registry collaborator.
//!
//! The `PortRegistry` trait is the planner's only window onto stored port
//! data. It resolves a single port by name and lists the ports of a region.
//! Lookups are synchronous; failures surface as [`RegistryError`] and are
//! never retried by the caller.

use std::error::Error as StdError;

use thiserror::Error;

use crate::Port;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{CATALOGUE_PAGE_LIMIT, SqlitePortRegistry, SqlitePortRegistryError};

/// Failure of the registry itself, as opposed to a lookup miss.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry could not serve the request.
    #[error("{message}")]
    Unavailable {
        /// Description of the fault.
        message: String,
    },
    /// The storage backend reported an error.
    #[error("registry backend failed: {0}")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}

impl RegistryError {
    /// Build an [`RegistryError::Unavailable`] from a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Wrap a backend error.
    pub fn backend<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Backend(Box::new(source))
    }
}

/// Read-only access to stored ports.
///
/// Both lookups compare case-insensitively. `list_by_region` performs a
/// substring match against the region label and returns at most `limit`
/// ports in the registry's own order; an empty vector means no match.
///
/// # Examples
///
/// ```rust
/// use tidewater_core::{Port, PortRegistry, RegistryError};
///
/// struct MemoryRegistry {
///     ports: Vec<Port>,
/// }
///
/// impl PortRegistry for MemoryRegistry {
///     fn lookup_by_name(&self, name: &str) -> Result<Option<Port>, RegistryError> {
///         Ok(self.ports.iter().find(|p| p.matches_name(name)).cloned())
///     }
///
///     fn list_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, RegistryError> {
///         let needle = region.to_lowercase();
///         Ok(self
///             .ports
///             .iter()
///             .filter(|p| p.region.to_lowercase().contains(&needle))
///             .take(limit)
///             .cloned()
///             .collect())
///     }
/// }
///
/// let registry = MemoryRegistry {
///     ports: vec![Port::from_lat_lon("Bergen", "Norway", 60.39, 5.32)],
/// };
/// assert!(registry.lookup_by_name("BERGEN")?.is_some());
/// assert_eq!(registry.list_by_region("norw", 5)?.len(), 1);
/// # Ok::<(), RegistryError>(())
/// ```
pub trait PortRegistry {
    /// Resolve a port by exact, case-insensitive name.
    fn lookup_by_name(&self, name: &str) -> Result<Option<Port>, RegistryError>;

    /// List up to `limit` ports whose region label contains `region`.
    fn list_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, RegistryError>;
}

impl<T: PortRegistry + ?Sized> PortRegistry for &T {
    fn lookup_by_name(&self, name: &str) -> Result<Option<Port>, RegistryError> {
        (**self).lookup_by_name(name)
    }

    fn list_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, RegistryError> {
        (**self).list_by_region(region, limit)
    }
}

impl<T: PortRegistry + ?Sized> PortRegistry for Box<T> {
    fn lookup_by_name(&self, name: &str) -> Result<Option<Port>, RegistryError> {
        (**self).lookup_by_name(name)
    }

    fn list_by_region(&self, region: &str, limit: usize) -> Result<Vec<Port>, RegistryError> {
        (**self).list_by_region(region, limit)
    }
}
