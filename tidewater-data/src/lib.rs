//! Port catalogue ingestion for Tidewater.
//!
//! Responsibilities:
//! - Parse port catalogues published as CSV (`PortName`, `Country`,
//!   `Latitude`, `Longitude`).
//! - Persist the cleaned catalogue to the SQLite `ports` table read by
//!   `tidewater_core::SqlitePortRegistry`.
//!
//! Boundaries:
//! - Do not encode routing rules (live in `tidewater-core` and
//!   `tidewater-planner`).
//!
//! Invariants:
//! - An import replaces the whole table atomically; readers never observe a
//!   partially written catalogue.
//! - No global mutable state.

mod catalogue;

pub use catalogue::{
    CatalogueRows, ImportError, ImportSummary, REQUIRED_COLUMNS, import_ports_csv,
    persist_ports_to_sqlite, read_port_catalogue,
};
