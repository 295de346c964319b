//! Tests for `import_ports_csv`.

use std::fs;

use super::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tidewater_core::{PortRegistry, SqlitePortRegistry};

const CATALOGUE: &str = "PortName,Country,Latitude,Longitude\n\
    Bergen,Norway,60.39,5.32\n\
    Aarhus,Denmark,56.15,10.21\n\
    ,Norway,59.0,5.0\n\
    Atlantis,Ocean,95.0,0.0\n\
    bergen,Norway,0.0,0.0\n\
    Oslo,Norway,59.91,10.75\n";

#[fixture]
fn workspace() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
    fs::write(root.join("ports.csv"), CATALOGUE).expect("write catalogue");
    (dir, root)
}

#[rstest]
fn import_reports_counts(workspace: (TempDir, Utf8PathBuf)) {
    let (_dir, root) = workspace;
    let summary =
        import_ports_csv(&root.join("ports.csv"), &root.join("ports.db")).expect("import");
    assert_eq!(
        summary,
        ImportSummary {
            imported: 3,
            skipped_incomplete: 1,
            skipped_invalid: 1,
            skipped_duplicate: 1,
        }
    );
}

#[rstest]
fn imported_catalogue_is_readable_by_registry(workspace: (TempDir, Utf8PathBuf)) {
    let (_dir, root) = workspace;
    let db_path = root.join("ports.db");
    import_ports_csv(&root.join("ports.csv"), &db_path).expect("import");

    let registry = SqlitePortRegistry::open(db_path.as_std_path()).expect("open registry");
    let bergen = registry
        .lookup_by_name("BERGEN")
        .expect("lookup")
        .expect("bergen imported");
    assert_eq!(bergen.latitude(), 60.39);
    let norway: Vec<String> = registry
        .list_by_region("norway", 10)
        .expect("list")
        .into_iter()
        .map(|port| port.name)
        .collect();
    assert_eq!(norway, ["Bergen", "Oslo"]);
    assert_eq!(registry.regions().expect("regions"), ["Denmark", "Norway"]);
}

#[rstest]
fn missing_csv_is_reported(workspace: (TempDir, Utf8PathBuf)) {
    let (_dir, root) = workspace;
    let missing = root.join("missing.csv");
    let err = import_ports_csv(&missing, &root.join("ports.db")).expect_err("missing csv");
    assert!(matches!(err, ImportError::OpenCsv { ref path, .. } if *path == missing));
    assert!(!root.join("ports.db").exists());
}
