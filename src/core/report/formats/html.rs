//! HTML report generator
//!
//! Produces a self-contained page (embedded CSS, no scripts) with the headline
//! statistics, a progress bar, and a two-column term grid per year. Rendered
//! through an askama template; course names are HTML-escaped.

use crate::core::progress::{CourseStatus, PASSING_GRADE};
use crate::core::report::{CourseCell, ReportContext, ReportGenerator, TermView, YearView};
use askama::Template;
use std::error::Error;

/// Table row for one course cell
struct HtmlRow {
    name: String,
    credits: u32,
    kind: &'static str,
    text: String,
    class: &'static str,
}

impl HtmlRow {
    fn from_cell(cell: &CourseCell) -> Self {
        let class = match cell.status {
            CourseStatus::Locked => "locked",
            CourseStatus::NoEntry => "no-entry",
            CourseStatus::Editable(Some(grade)) if grade >= PASSING_GRADE => "passed",
            CourseStatus::Editable(Some(_)) => "failed",
            CourseStatus::Editable(None) => "open",
        };
        Self {
            name: cell.name.clone(),
            credits: cell.credits,
            kind: cell.kind.label(),
            text: cell.status_text(),
            class,
        }
    }
}

struct HtmlTerm {
    label: String,
    rows: Vec<HtmlRow>,
}

impl From<&TermView> for HtmlTerm {
    fn from(term: &TermView) -> Self {
        Self {
            label: term.label.clone(),
            rows: term.courses.iter().map(HtmlRow::from_cell).collect(),
        }
    }
}

struct HtmlYear {
    year: u32,
    terms: Vec<HtmlTerm>,
}

impl From<YearView> for HtmlYear {
    fn from(year: YearView) -> Self {
        Self {
            year: year.year,
            terms: year.terms.iter().map(HtmlTerm::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate<'a> {
    title: &'a str,
    weighted_average: String,
    progress_percent: String,
    earned_credits: u64,
    total_credits: u64,
    passed_courses: usize,
    course_count: usize,
    years: Vec<HtmlYear>,
    warnings: Vec<String>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let summary = ctx.summary();
        let template = HtmlReportTemplate {
            title: ctx.title(),
            weighted_average: format!("{:.2}", summary.weighted_average),
            progress_percent: format!("{:.1}", summary.progress_percent),
            earned_credits: summary.earned_credits,
            total_credits: summary.total_credits,
            passed_courses: summary.passed_courses,
            course_count: ctx.engine.catalog().len(),
            years: ctx.years().into_iter().map(HtmlYear::from).collect(),
            warnings: ctx
                .engine
                .catalog_warnings()
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
        Ok(template.render()?)
    }
}
