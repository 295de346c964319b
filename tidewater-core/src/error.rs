use thiserror::Error;

use crate::{RegistryError, RouteError};

/// Errors returned by the route planning operations.
///
/// Every variant aborts the planning call; no partial route is produced.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A supplied port name did not resolve in the registry.
    #[error("port '{name}' not found")]
    PortNotFound {
        /// Name as supplied by the caller.
        name: String,
    },
    /// Fewer than two port names were supplied.
    #[error("at least 2 ports are required, got {found}")]
    InsufficientPorts {
        /// Number of names supplied.
        found: usize,
    },
    /// Fewer than two regions were supplied.
    #[error("at least 2 regions are required, got {found}")]
    InsufficientRegions {
        /// Number of regions supplied.
        found: usize,
    },
    /// A region yielded no ports.
    #[error("no ports found for region '{region}'")]
    RegionEmpty {
        /// Region as supplied by the caller.
        region: String,
    },
    /// An argument was outside its accepted range or malformed.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The registry lookup itself failed.
    #[error("port registry unavailable: {0}")]
    RegistryUnavailable(#[from] RegistryError),
    /// The resolved ports could not form a route.
    #[error(transparent)]
    InvalidRoute(#[from] RouteError),
}

impl PlanError {
    /// Whether the error was caused by the caller's input rather than a
    /// service fault.
    ///
    /// # Examples
    /// ```
    /// use tidewater_core::{PlanError, RegistryError};
    ///
    /// let missing = PlanError::PortNotFound { name: "Atlantis".into() };
    /// assert!(missing.is_client_error());
    ///
    /// let fault = PlanError::from(RegistryError::unavailable("disk on fire"));
    /// assert!(!fault.is_client_error());
    /// ```
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::PortNotFound { .. }
                | Self::InsufficientPorts { .. }
                | Self::InsufficientRegions { .. }
                | Self::RegionEmpty { .. }
                | Self::InvalidArgument { .. }
        )
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
