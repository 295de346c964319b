//! Error types emitted by the Tidewater CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tidewater_core::{PlanError, SqlitePortRegistryError};
use tidewater_data::ImportError;

/// Exit status for failures caused by the caller's input.
pub const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors emitted by the Tidewater CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A `region-ports` limit fell outside its accepted range.
    #[error("limit must be between 1 and 200, got {limit}")]
    InvalidRegionLimit { limit: usize },
    /// Opening or browsing the port database failed.
    #[error(transparent)]
    PortDatabase(#[from] SqlitePortRegistryError),
    /// Route planning failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// Importing the port catalogue failed.
    #[error("failed to import port catalogue: {0}")]
    Import(#[from] ImportError),
    /// Serialising a report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing a report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Input mistakes such as missing options, out-of-range values or unknown
    /// ports map to [`EXIT_USAGE`]; faults map to [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Plan(err) if err.is_client_error() => EXIT_USAGE,
            Self::ArgumentParsing(_)
            | Self::MissingArgument { .. }
            | Self::MissingSourceFile { .. }
            | Self::SourcePathNotFile { .. }
            | Self::InvalidRegionLimit { .. }
            | Self::PortDatabase(SqlitePortRegistryError::InvalidPageLimit { .. }) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
