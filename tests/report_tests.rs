//! Integration tests for report generation

use curriculum_progress::core::loader::load_catalog;
use curriculum_progress::core::progress::ProgressEngine;
use curriculum_progress::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use std::fs;
use tempfile::TempDir;

fn sample_engine() -> ProgressEngine {
    let catalog = load_catalog("samples/catalogs/ici.toml").expect("sample should load");
    let mut engine = ProgressEngine::new(catalog);
    engine.set_grade("Álgebra", "65").unwrap();
    engine.set_grade("Cálculo II", "58").unwrap();
    engine.set_grade("Física General", "80").unwrap();
    engine
}

#[test]
fn test_generate_reports_to_files() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let engine = sample_engine();
    let ctx = ReportContext::new(&engine);

    let reporters: [(ReportFormat, Box<dyn ReportGenerator>); 2] = [
        (ReportFormat::Markdown, Box::new(MarkdownReporter::new())),
        (ReportFormat::Html, Box::new(HtmlReporter::new())),
    ];

    for (format, reporter) in reporters {
        let path = dir.path().join(format!("ici.{}", format.extension()));
        reporter
            .generate(&ctx, &path)
            .unwrap_or_else(|e| panic!("{format} report failed: {e}"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Ingeniería Civil Industrial"));
        assert!(content.contains("Cálculo II"));
        assert!(content.contains("Term IV"));
    }
}

#[test]
fn test_markdown_report_reflects_engine_state() {
    let engine = sample_engine();
    let report = MarkdownReporter::new()
        .render(&ReportContext::new(&engine))
        .unwrap();

    // (70*10 + 65*10 + 58*10 + 80*12) / 42
    assert!(report.contains("| Weighted average | 68.81 |"));
    assert!(report.contains("| Credits earned | 42 / 118 |"));
    assert!(report.contains("| Courses passed | 4 / 13 |"));
    assert!(report.contains("| Mecánica | 14 | Spanning | — |"));
    assert!(report.contains("| Mecánica | 14 | Spanning | _ |"));
    assert!(report.contains("| Contabilidad | 6 | Single-Term | locked |"));
}
