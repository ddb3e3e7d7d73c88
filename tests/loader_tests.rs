//! Integration tests for catalog loading

use curriculum_progress::core::loader::load_catalog;
use curriculum_progress::core::models::CourseKind;
use curriculum_progress::core::progress::ProgressEngine;
use std::fs;
use tempfile::TempDir;

const TOML_SAMPLE: &str = "samples/catalogs/ici.toml";
const CSV_SAMPLE: &str = "samples/catalogs/ici.csv";

#[test]
fn test_load_toml_sample() {
    let result = load_catalog(TOML_SAMPLE);
    assert!(
        result.is_ok(),
        "Failed to load TOML catalog: {:?}",
        result.err()
    );
    let catalog = result.unwrap();

    assert_eq!(catalog.name.as_deref(), Some("Ingeniería Civil Industrial"));
    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.total_credits(), 118);
    assert_eq!(catalog.last_term(), 4);

    let mechanics = catalog.get_course("Mecánica").unwrap();
    assert_eq!(mechanics.kind, CourseKind::Spanning);
    assert_eq!(
        mechanics.prerequisites,
        vec!["Física General".to_string(), "Cálculo II".to_string()]
    );
    assert_eq!(catalog.get_course("Cálculo I").unwrap().grade, Some(70));
}

#[test]
fn test_csv_and_toml_samples_agree() {
    let from_toml = load_catalog(TOML_SAMPLE).expect("TOML sample should load");
    let from_csv = load_catalog(CSV_SAMPLE).expect("CSV sample should load");

    assert_eq!(from_toml.name, from_csv.name);
    assert_eq!(from_toml.courses(), from_csv.courses());
}

#[test]
fn test_sample_engine_has_no_warnings() {
    let catalog = load_catalog(TOML_SAMPLE).unwrap();
    let engine = ProgressEngine::new(catalog);

    assert!(engine.catalog_warnings().is_empty());
    assert_eq!(engine.total_terms(), 4);
    assert_eq!(engine.current_grade("Cálculo I").unwrap(), Some(70));
    assert!((engine.progress_percent() - 8.5).abs() < 1e-9);
    assert!(engine.is_unlocked("Física General").unwrap());
    assert!(!engine.is_unlocked("Cálculo II").unwrap());
}

#[test]
fn test_load_from_temp_files() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let toml_path = dir.path().join("plan.TOML");
    fs::write(
        &toml_path,
        "[[course]]\nname = \"A\"\ncredits = 4\nkind = \"spanning\"\nterm = 5\n",
    )
    .unwrap();
    let catalog = load_catalog(&toml_path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.last_term(), 6);

    let csv_path = dir.path().join("plan.csv");
    fs::write(&csv_path, "Courses\nName,Credits,Kind,Term\nA,4,Anual,5\n").unwrap();
    assert_eq!(load_catalog(&csv_path).unwrap().courses(), catalog.courses());
}

#[test]
fn test_seeded_grade_on_locked_course_is_dropped() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("seeded.csv");
    fs::write(
        &path,
        "Courses\nName,Credits,Kind,Term,Prerequisites,Grade\nA,10,Semestral,1,,40\nB,10,Semestral,2,A,90\n",
    )
    .unwrap();

    let engine = ProgressEngine::new(load_catalog(&path).unwrap());

    assert_eq!(engine.current_grade("A").unwrap(), Some(40));
    assert_eq!(engine.current_grade("B").unwrap(), None);
    assert_eq!(engine.catalog_warnings().len(), 1);
}

#[test]
fn test_invalid_files_are_errors() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let bad_toml = dir.path().join("bad.toml");
    fs::write(&bad_toml, "[[course]]\nname = \"A\"\n").unwrap();
    assert!(load_catalog(&bad_toml).is_err());

    let bad_csv = dir.path().join("bad.csv");
    fs::write(&bad_csv, "Courses\nName,Credits,Kind,Term\nA,4,Weekly,1\n").unwrap();
    let err = load_catalog(&bad_csv).unwrap_err();
    assert!(err.to_string().contains("Line 3"), "{err}");

    assert!(load_catalog(dir.path().join("plan.txt")).is_err());
}
