//! Headline statistics, recomputed from scratch on every query

use super::grades::{is_passing, GradeState};
use crate::core::models::Catalog;

/// Both headline numbers plus the sums behind them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    /// Credit-weighted mean of passing grades, 2 decimals
    pub weighted_average: f64,
    /// Share of catalog credits earned, percent with 1 decimal
    pub progress_percent: f64,
    /// Credits of passed courses
    pub earned_credits: u64,
    /// Credits of the whole catalog
    pub total_credits: u64,
    /// Number of passed courses
    pub passed_courses: usize,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `(grade, credits)` for every catalog course with a recorded passing grade
fn passed<'a>(catalog: &'a Catalog, grades: &'a GradeState) -> impl Iterator<Item = (u8, u32)> + 'a {
    catalog.courses().iter().filter_map(move |course| {
        grades
            .get(&course.name)
            .filter(|&g| is_passing(g))
            .map(|g| (g, course.credits))
    })
}

/// Credit-weighted average of passing grades, rounded to 2 decimals; 0 when nothing is passed
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weighted_average(catalog: &Catalog, grades: &GradeState) -> f64 {
    let (weighted, credits) = passed(catalog, grades).fold((0u64, 0u64), |(sum, cred), (g, c)| {
        (sum + u64::from(g) * u64::from(c), cred + u64::from(c))
    });

    if credits == 0 {
        return 0.0;
    }
    round_to(weighted as f64 / credits as f64, 2)
}

fn earned_credits(catalog: &Catalog, grades: &GradeState) -> u64 {
    passed(catalog, grades).map(|(_, c)| u64::from(c)).sum()
}

/// Passed credits over total catalog credits, as a percentage rounded to 1 decimal;
/// 0 when the catalog carries no credits
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(catalog: &Catalog, grades: &GradeState) -> f64 {
    let total = catalog.total_credits();
    if total == 0 {
        return 0.0;
    }
    let earned = earned_credits(catalog, grades);
    round_to(earned as f64 / total as f64 * 100.0, 1)
}

/// All aggregates at once
#[must_use]
pub fn summarize(catalog: &Catalog, grades: &GradeState) -> ProgressSummary {
    ProgressSummary {
        weighted_average: weighted_average(catalog, grades),
        progress_percent: progress_percent(catalog, grades),
        earned_credits: earned_credits(catalog, grades),
        total_credits: catalog.total_credits(),
        passed_courses: passed(catalog, grades).count(),
    }
}
