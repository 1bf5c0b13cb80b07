//! End-to-end tests for the sync pipeline.
//!
//! These exercise the full path from export files on disk through mapping,
//! diffing against baselines, pushing to a store, and persisting the new
//! baseline, using the in-memory store and temp directories.

use std::fs;
use std::path::Path;

use vitagraph::baseline::BaselineStore;
use vitagraph::config::SyncConfig;
use vitagraph::datasets::{DatasetCatalog, DatasetGroup};
use vitagraph::store::{MemoryStore, TripleStore};
use vitagraph::sync::{SyncDriver, SyncOptions};
use vitagraph::vocab::Namespaces;

fn xml_rows(rows: &[&[(&str, &str)]]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\"?>\n<resultset xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n",
    );
    for row in rows {
        out.push_str("<row>");
        for (name, value) in *row {
            out.push_str(&format!("<field name=\"{name}\">{value}</field>"));
        }
        out.push_str("</row>\n");
    }
    out.push_str("</resultset>\n");
    out
}

fn write_faculty(data_dir: &Path, rows: &[&[(&str, &str)]]) {
    fs::write(data_dir.join("fis_faculty.xml"), xml_rows(rows)).unwrap();
    fs::write(
        data_dir.join("vivo_demographic.txt"),
        "EMPLOYEEID|NETID\n1000123|jdoe\n1000456|asmith\n",
    )
    .unwrap();
}

struct Fixture {
    _data: tempfile::TempDir,
    _graphs: tempfile::TempDir,
    catalog: DatasetCatalog,
    baselines: BaselineStore,
    store: MemoryStore,
}

impl Fixture {
    fn new() -> Self {
        let data = tempfile::tempdir().unwrap();
        let graphs = tempfile::tempdir().unwrap();
        let config = SyncConfig {
            data_dir: data.path().to_path_buf(),
            graph_dir: graphs.path().to_path_buf(),
            ..SyncConfig::default()
        };
        let catalog = DatasetCatalog::new(&config, None, None).unwrap();
        let baselines = BaselineStore::new(graphs.path(), Namespaces::standard());
        Self {
            _data: data,
            _graphs: graphs,
            catalog,
            baselines,
            store: MemoryStore::new(),
        }
    }

    fn data_dir(&self) -> &Path {
        self._data.path()
    }

    fn driver(&self) -> SyncDriver<'_> {
        SyncDriver::new(&self.baselines, &self.store, SyncOptions::default())
    }
}

#[test]
fn faculty_sync_pushes_profiles_and_persists_a_baseline() {
    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[
            &[
                ("person_id", "1000123"),
                ("role", "Faculty"),
                ("home_college", "Arts and Sciences"),
                ("home_department", "Chemistry"),
                ("personal_statement", "Studies interesting things."),
                ("scholarly_interest", "catalysis; kinetics"),
            ],
            // Filtered out: role not in the allow-list.
            &[("person_id", "1000456"), ("role", "Staff")],
        ],
    );

    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    let report = fx.driver().run(&mapper).unwrap().unwrap();
    assert!(report.added > 0);
    assert_eq!(report.deleted, 0);
    assert!(report.baseline.is_some());

    let snapshot = fx.store.snapshot();
    let objects: Vec<String> = snapshot.iter().map(|t| t.object.to_string()).collect();
    assert!(objects.contains(&"\"Studies interesting things.\"".to_string()));
    assert!(objects.contains(&"\"Catalysis\"".to_string()));
    assert!(fx.baselines.load_latest("faculty").unwrap().is_some());
}

#[test]
fn second_run_is_a_noop_when_nothing_changed() {
    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[&[
            ("person_id", "1000123"),
            ("role", "Faculty"),
            ("personal_statement", "Unchanged."),
        ]],
    );

    let driver = fx.driver();
    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    let first = driver.run(&mapper).unwrap().unwrap();
    let second = driver.run(&mapper).unwrap().unwrap();
    assert_eq!(second.added, 0);
    assert_eq!(second.deleted, 0);
    assert_eq!(second.common, first.added);
}

#[test]
fn changed_records_push_only_the_delta() {
    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[&[
            ("person_id", "1000123"),
            ("role", "Faculty"),
            ("personal_statement", "First statement."),
        ]],
    );

    let driver = fx.driver();
    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    driver.run(&mapper).unwrap().unwrap();

    write_faculty(
        fx.data_dir(),
        &[&[
            ("person_id", "1000123"),
            ("role", "Faculty"),
            ("personal_statement", "Second statement."),
        ]],
    );
    let report = driver.run(&mapper).unwrap().unwrap();
    // Only the overview literal changed; the type statement is common.
    assert_eq!(report.added, 1);
    assert_eq!(report.deleted, 1);
    assert!(report.common > 0);

    let objects: Vec<String> = fx
        .store
        .snapshot()
        .iter()
        .map(|t| t.object.to_string())
        .collect();
    assert!(objects.contains(&"\"Second statement.\"".to_string()));
    assert!(!objects.contains(&"\"First statement.\"".to_string()));
}

#[test]
fn empty_export_leaves_store_and_baseline_alone() {
    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[&[
            ("person_id", "1000123"),
            ("role", "Faculty"),
            ("personal_statement", "Present."),
        ]],
    );

    let driver = fx.driver();
    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    driver.run(&mapper).unwrap().unwrap();
    let baseline_before = fx.baselines.latest_path("faculty").unwrap();
    let statements_before = fx.store.snapshot().len();

    // A truncated export yields no rows at all.
    write_faculty(fx.data_dir(), &[]);
    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    assert!(driver.run(&mapper).unwrap().is_none());
    assert_eq!(fx.store.snapshot().len(), statements_before);
    assert_eq!(fx.baselines.latest_path("faculty").unwrap(), baseline_before);
}

#[test]
fn departments_build_the_hierarchy_under_the_institution() {
    let fx = Fixture::new();
    fs::write(
        fx.data_dir().join("fis_department.xml"),
        xml_rows(&[
            &[
                ("college", "Arts and Sciences"),
                ("department", "Chemistry"),
            ],
            &[
                ("college", "Arts and Sciences"),
                ("department", "Physics"),
            ],
            &[("college", "No College Designated"), ("department", "Chemistry")],
        ]),
    )
    .unwrap();

    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Departments)
        .unwrap()
        .remove(0);
    fx.driver().run(&mapper).unwrap().unwrap();

    let objects: Vec<String> = fx
        .store
        .snapshot()
        .iter()
        .map(|t| t.object.to_string())
        .collect();
    assert!(objects.contains(&"\"Example University\"".to_string()));
    assert!(objects.contains(&"\"Chemistry\"".to_string()));
    assert!(objects.contains(&"\"Physics\"".to_string()));
}

#[test]
fn grants_sync_drops_bad_role_codes_but_keeps_the_rest() {
    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[&[("person_id", "1000123"), ("role", "Faculty")]],
    );
    fs::write(
        fx.data_dir().join("fis_grants.xml"),
        xml_rows(&[
            &[
                ("person_id", "1000123"),
                ("title", "A Study"),
                ("grant_role_code", "PI"),
                ("award_amount", "$250,000.00"),
                ("award_begin_year", "2020"),
                ("award_begin_month", "9"),
            ],
            &[
                ("person_id", "1000123"),
                ("title", "Rejected Study"),
                ("grant_role_code", "Mystery"),
            ],
        ]),
    )
    .unwrap();

    let mapper = fx.catalog.mappers(DatasetGroup::Grants).unwrap().remove(0);
    fx.driver().run(&mapper).unwrap().unwrap();

    let objects: Vec<String> = fx
        .store
        .snapshot()
        .iter()
        .map(|t| t.object.to_string())
        .collect();
    assert!(objects.contains(&"\"A Study\"".to_string()));
    assert!(objects.contains(&"\"$250,000\"".to_string()));
    assert!(!objects.contains(&"\"Rejected Study\"".to_string()));
}

#[test]
fn full_reload_reasserts_without_deletes() {
    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[&[
            ("person_id", "1000123"),
            ("role", "Faculty"),
            ("personal_statement", "Stable."),
        ]],
    );

    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    fx.driver().run(&mapper).unwrap().unwrap();

    let options = SyncOptions {
        full_reload: true,
        ..SyncOptions::default()
    };
    let driver = SyncDriver::new(&fx.baselines, &fx.store, options);
    let report = driver.run(&mapper).unwrap().unwrap();
    assert_eq!(report.deleted, 0);
    assert_eq!(report.common, 0);
    assert!(report.added > 0);
    // The store already held these statements; re-inserting is idempotent.
    let snapshot = fx.store.snapshot();
    assert_eq!(snapshot.len(), report.added);
}

#[test]
fn failing_store_leaves_the_baseline_unwritten() {
    struct FailingStore;

    impl TripleStore for FailingStore {
        fn insert(&self, _: &vitagraph::Graph) -> Result<(), vitagraph::error::StoreError> {
            Err(vitagraph::error::StoreError::Rejected { status: 500 })
        }

        fn delete(&self, _: &vitagraph::Graph) -> Result<(), vitagraph::error::StoreError> {
            Err(vitagraph::error::StoreError::Rejected { status: 500 })
        }
    }

    let fx = Fixture::new();
    write_faculty(
        fx.data_dir(),
        &[&[
            ("person_id", "1000123"),
            ("role", "Faculty"),
            ("personal_statement", "Doomed push."),
        ]],
    );

    let driver = SyncDriver::new(&fx.baselines, &FailingStore, SyncOptions::default());
    let mapper = fx
        .catalog
        .mappers(DatasetGroup::Faculty)
        .unwrap()
        .remove(0);
    assert!(driver.run(&mapper).is_err());
    assert!(fx.baselines.latest_path("faculty").unwrap().is_none());
}
