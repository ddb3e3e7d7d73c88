//! Markdown report generator
//!
//! One table per academic year, one row per course under each term. Renders
//! well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator, TermView};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary();
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", ctx.title());
        output = output.replace(
            "{{weighted_average}}",
            &format!("{:.2}", summary.weighted_average),
        );
        output = output.replace(
            "{{progress_percent}}",
            &format!("{:.1}", summary.progress_percent),
        );
        output = output.replace("{{earned_credits}}", &summary.earned_credits.to_string());
        output = output.replace("{{total_credits}}", &summary.total_credits.to_string());
        output = output.replace("{{passed_courses}}", &summary.passed_courses.to_string());
        output = output.replace(
            "{{course_count}}",
            &ctx.engine.catalog().len().to_string(),
        );

        output = output.replace("{{years}}", &Self::generate_year_tables(ctx));
        output = output.replace("{{warnings}}", &Self::generate_warnings(ctx));

        output
    }

    /// Generate one section per year, each term as its own table
    fn generate_year_tables(ctx: &ReportContext) -> String {
        let mut out = String::new();

        for year in ctx.years() {
            let _ = writeln!(out, "## Year {}\n", year.year);
            for term in &year.terms {
                Self::write_term_table(&mut out, term);
            }
        }

        out
    }

    fn write_term_table(out: &mut String, term: &TermView) {
        let _ = writeln!(out, "### Term {}\n", term.label);

        if term.courses.is_empty() {
            out.push_str("_No courses._\n\n");
            return;
        }

        out.push_str("| Course | Credits | Kind | Grade |\n");
        out.push_str("|---|---|---|---|\n");
        for cell in &term.courses {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                escape_cell(&cell.name),
                cell.credits,
                cell.kind.label(),
                cell.status_text()
            );
        }
        out.push('\n');
    }

    fn generate_warnings(ctx: &ReportContext) -> String {
        let warnings = ctx.engine.catalog_warnings();
        if warnings.is_empty() {
            return String::new();
        }

        let mut out = String::from("## Catalog warnings\n\n");
        for warning in warnings {
            let _ = writeln!(out, "- {warning}");
        }
        out
    }
}

/// Escape pipes so a value stays inside its table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
