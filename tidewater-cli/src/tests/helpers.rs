//! Test helpers for seeding port databases and driving the CLI in-process.

use super::*;
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use tidewater_core::Port;
use tidewater_core::test_support::write_sqlite_ports;

/// Temporary workspace holding a seeded `ports.db`.
#[derive(Debug)]
pub(super) struct Catalogue {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Catalogue {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let ports = [
            Port::from_lat_lon("A", "Equator", 0.0, 0.0),
            Port::from_lat_lon("B", "Equator", 0.0, 1.0),
            Port::from_lat_lon("C", "Equator", 0.0, 2.0),
            Port::from_lat_lon("Bergen", "Norway", 60.39, 5.32),
            Port::from_lat_lon("Oslo", "Norway", 59.91, 10.75),
            Port::from_lat_lon("Aarhus", "Denmark", 56.15, 10.21),
        ];
        write_sqlite_ports(root.join("ports.db").as_std_path(), &ports).expect("seed ports.db");
        Self { _dir: dir, root }
    }

    pub(super) fn db(&self) -> Utf8PathBuf {
        self.root.join("ports.db")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

/// Parse `args` as a `tidewater` invocation and return the printed JSON.
pub(super) fn run_cli(args: &[&str]) -> Result<serde_json::Value, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("tidewater").chain(args.iter().copied()))?;
    let mut output = Vec::new();
    run_with(cli, &mut output)?;
    Ok(serde_json::from_slice(&output).expect("CLI prints valid JSON"))
}
