//! Progress report generation
//!
//! Reports are a read-only view over a [`ProgressEngine`]: the catalog laid out
//! year by year and term by term, a status cell per course, and the headline
//! statistics. Markdown and HTML renderers share the view model built here.

pub mod formats;

use crate::core::models::CourseKind;
use crate::core::progress::terms::displayed_terms;
use crate::core::progress::{
    roman_label, year_layout, CourseStatus, ProgressEngine, ProgressSummary,
};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One course as shown under one term block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCell {
    /// Course name
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Single-term or spanning
    pub kind: CourseKind,
    /// Display decision for this term
    pub status: CourseStatus,
}

impl CourseCell {
    /// Cell text: grade, `_` for an empty editable cell, `—` or `locked`
    #[must_use]
    pub fn status_text(&self) -> String {
        self.status.display_text()
    }

    /// Whether the course is locked
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status == CourseStatus::Locked
    }
}

/// One term block with the courses rendered under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermView {
    /// Term number
    pub term: u32,
    /// Roman ordinal label (e.g., "III")
    pub label: String,
    /// Courses shown under this term, in catalog order
    pub courses: Vec<CourseCell>,
}

/// One academic year with its two terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    /// Year number, starting at 1
    pub year: u32,
    /// Odd term first, then even term
    pub terms: Vec<TermView>,
}

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Engine holding catalog and grades
    pub engine: &'a ProgressEngine,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(engine: &'a ProgressEngine) -> Self {
        Self { engine }
    }

    /// Curriculum title, or a generic one when the catalog is unnamed
    #[must_use]
    pub fn title(&self) -> &str {
        self.engine
            .catalog()
            .name
            .as_deref()
            .unwrap_or("Curriculum Progress")
    }

    /// Headline statistics
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.engine.summary()
    }

    /// Year-by-year layout; spanning courses appear under both terms of their pair
    #[must_use]
    pub fn years(&self) -> Vec<YearView> {
        year_layout(self.engine.total_terms())
            .into_iter()
            .map(|block| YearView {
                year: block.year,
                terms: block.terms().iter().map(|&t| self.term_view(t)).collect(),
            })
            .collect()
    }

    fn term_view(&self, term: u32) -> TermView {
        let courses = self
            .engine
            .catalog()
            .courses()
            .iter()
            .filter(|course| displayed_terms(course).contains(&term))
            .filter_map(|course| {
                self.engine
                    .course_status(&course.name, term)
                    .ok()
                    .map(|status| CourseCell {
                        name: course.name.clone(),
                        credits: course.credits,
                        kind: course.kind,
                        status,
                    })
            })
            .collect();

        TermView {
            term,
            label: roman_label(term).unwrap_or_default(),
            courses,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course};

    fn engine() -> ProgressEngine {
        let (catalog, _) = Catalog::from_courses(vec![
            Course::new("A".to_string(), 10, CourseKind::SingleTerm, 1),
            Course::new("Física".to_string(), 12, CourseKind::Spanning, 1).with_prerequisite("A"),
            Course::new("C".to_string(), 8, CourseKind::SingleTerm, 3),
        ]);
        ProgressEngine::new(catalog.with_name("Demo"))
    }

    #[test]
    fn test_years_cover_all_terms() {
        let engine = engine();
        let ctx = ReportContext::new(&engine);
        let years = ctx.years();

        assert_eq!(years.len(), 2);
        assert_eq!(years[0].terms[0].label, "I");
        assert_eq!(years[1].terms[1].term, 4);
        assert!(years[1].terms[1].courses.is_empty());
    }

    #[test]
    fn test_spanning_course_shown_in_both_terms() {
        let mut engine = engine();
        engine.set_grade("A", "60").unwrap();
        let ctx = ReportContext::new(&engine);
        let years = ctx.years();

        let first = &years[0].terms[0].courses;
        let second = &years[0].terms[1].courses;
        assert_eq!(first[1].name, "Física");
        assert_eq!(first[1].status, CourseStatus::NoEntry);
        assert_eq!(second[0].name, "Física");
        assert_eq!(second[0].status, CourseStatus::Editable(None));
    }

    #[test]
    fn test_title_falls_back_when_unnamed() {
        let engine = ProgressEngine::new(Catalog::new());
        assert_eq!(ReportContext::new(&engine).title(), "Curriculum Progress");
        assert!(ReportContext::new(&engine).years().is_empty());
    }
}
