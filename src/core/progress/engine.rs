//! The curriculum progress engine
//!
//! Owns the grade map for one catalog, is the only write path into it, and
//! answers every eligibility and aggregate query the view layer needs. After
//! each mutation a cascade pass drops grades of courses that no longer unlock.

use super::aggregates::{self, ProgressSummary};
use super::eligibility::{self, CourseStatus, EligibilityResolver};
use super::grades::{clamp_grade, parse_grade, GradeState};
use super::terms::{closing_term, whole_year_terms};
use crate::core::error::ProgressError;
use crate::core::models::{Catalog, Course, PrerequisiteGraph};
use crate::{debug, info, warn};
use std::collections::HashSet;
use std::fmt;

/// Catalog integrity problem found when the engine is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// Course lies on a prerequisite cycle and stays locked
    CycleMember(String),
    /// Course names a prerequisite that is not in the catalog
    UnknownPrerequisite {
        /// Course declaring the reference
        course: String,
        /// Missing prerequisite name
        prerequisite: String,
    },
    /// A grade seeded by the catalog was dropped because the course is locked
    SeededGradeCleared(String),
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CycleMember(course) => {
                write!(f, "'{course}' is part of a prerequisite cycle and will stay locked")
            }
            Self::UnknownPrerequisite {
                course,
                prerequisite,
            } => write!(
                f,
                "'{course}' requires '{prerequisite}', which is not in the catalog"
            ),
            Self::SeededGradeCleared(course) => {
                write!(f, "initial grade for '{course}' dropped: course is locked")
            }
        }
    }
}

/// Grades removed by a cascade pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Courses whose grade was cleared, in catalog order
    pub cleared: Vec<String>,
}

impl CascadeOutcome {
    /// Whether the pass removed nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cleared.is_empty()
    }
}

/// Progress engine bound to one catalog
#[derive(Debug, Clone)]
pub struct ProgressEngine {
    catalog: Catalog,
    graph: PrerequisiteGraph,
    resolver: EligibilityResolver,
    grades: GradeState,
    warnings: Vec<CatalogWarning>,
}

impl ProgressEngine {
    /// Build an engine for `catalog`
    ///
    /// Seeds grades declared by the catalog (clamped to `0..=100`), reports
    /// integrity problems as warnings, then runs one cascade pass so that no
    /// seeded grade survives on a locked course.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let graph = catalog.build_graph();
        let mut warnings = Vec::new();

        let cycle_members = graph.cycle_members();
        for course in &cycle_members {
            warnings.push(CatalogWarning::CycleMember(course.clone()));
        }
        for (course, prerequisite) in catalog.dangling_prerequisites() {
            warnings.push(CatalogWarning::UnknownPrerequisite {
                course,
                prerequisite,
            });
        }

        let mut grades = GradeState::new();
        for course in catalog.courses() {
            if let Some(seed) = course.grade {
                grades.insert(&course.name, clamp_grade(seed));
            }
        }

        let mut engine = Self {
            resolver: EligibilityResolver::new(cycle_members.into_iter().collect::<HashSet<_>>()),
            catalog,
            graph,
            grades,
            warnings,
        };

        let seeded = engine.cascade();
        engine
            .warnings
            .extend(seeded.cleared.into_iter().map(CatalogWarning::SeededGradeCleared));

        for warning in &engine.warnings {
            warn!("Catalog: {warning}");
        }
        debug!(
            "Progress engine ready: {} courses, {} seeded grades",
            engine.catalog.len(),
            engine.grades.len()
        );

        engine
    }

    /// The catalog this engine was built for
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current grade map
    #[must_use]
    pub const fn grades(&self) -> &GradeState {
        &self.grades
    }

    /// Integrity warnings collected at construction
    #[must_use]
    pub fn catalog_warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Number of terms in the layout (last occupied term, rounded up to whole years)
    #[must_use]
    pub fn total_terms(&self) -> u32 {
        whole_year_terms(self.catalog.last_term())
    }

    fn course(&self, name: &str) -> Result<&Course, ProgressError> {
        self.catalog
            .get_course(name)
            .ok_or_else(|| ProgressError::UnknownCourse(name.to_string()))
    }

    fn check_term(&self, term: u32) -> Result<(), ProgressError> {
        let max = self.total_terms();
        if term == 0 || term > max {
            return Err(ProgressError::TermOutOfRange { term, max });
        }
        Ok(())
    }

    /// Whether every prerequisite of the course has a recorded passing grade
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn is_unlocked(&self, name: &str) -> Result<bool, ProgressError> {
        let course = self.course(name)?;
        Ok(self.resolver.is_unlocked(course, &self.grades))
    }

    /// Whether the course takes its grade in `term`
    ///
    /// # Errors
    /// `UnknownCourse` for an unknown name, `TermOutOfRange` for a term outside the layout
    pub fn accepts_grade_in_term(&self, name: &str, term: u32) -> Result<bool, ProgressError> {
        let course = self.course(name)?;
        self.check_term(term)?;
        Ok(eligibility::accepts_grade_in_term(course, term))
    }

    /// Whether a grade can be entered for the course under `term`
    ///
    /// # Errors
    /// `UnknownCourse` for an unknown name, `TermOutOfRange` for a term outside the layout
    pub fn can_enter_grade(&self, name: &str, term: u32) -> Result<bool, ProgressError> {
        let course = self.course(name)?;
        self.check_term(term)?;
        Ok(self.resolver.can_enter_grade(course, term, &self.grades))
    }

    /// Display decision for the course under `term`
    ///
    /// # Errors
    /// `UnknownCourse` for an unknown name, `TermOutOfRange` for a term outside the layout
    pub fn course_status(&self, name: &str, term: u32) -> Result<CourseStatus, ProgressError> {
        let course = self.course(name)?;
        self.check_term(term)?;
        Ok(self.resolver.status(course, term, &self.grades))
    }

    /// Recorded grade, `None` when ungraded
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn current_grade(&self, name: &str) -> Result<Option<u8>, ProgressError> {
        let course = self.course(name)?;
        Ok(self.grades.get(&course.name))
    }

    /// Term in which the course accepts its grade
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn grading_term(&self, name: &str) -> Result<u32, ProgressError> {
        let course = self.course(name)?;
        Ok(closing_term(course.kind, course.term))
    }

    /// Every course that directly or transitively requires `name`
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn dependents(&self, name: &str) -> Result<Vec<String>, ProgressError> {
        let course = self.course(name)?;
        Ok(self.graph.transitive_dependents(&course.name))
    }

    /// Store a grade from raw user input and run the cascade
    ///
    /// The input is coerced, never rejected: the leading integer is taken,
    /// non-numeric input becomes 0, and the value is clamped to `0..=100`. A
    /// grade stored for a course that cannot currently take one is removed by
    /// the cascade, and shows up in the returned outcome.
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn set_grade(&mut self, name: &str, raw: &str) -> Result<CascadeOutcome, ProgressError> {
        self.store(name, parse_grade(raw))
    }

    /// Store a numeric grade (clamped to `0..=100`) and run the cascade
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn set_grade_value(
        &mut self,
        name: &str,
        value: i64,
    ) -> Result<CascadeOutcome, ProgressError> {
        self.store(name, clamp_grade(value))
    }

    fn store(&mut self, name: &str, grade: u8) -> Result<CascadeOutcome, ProgressError> {
        let key = self.course(name)?.name.clone();
        let previous = self.grades.insert(&key, grade);
        debug!("Grade for '{key}': {previous:?} -> {grade}");
        Ok(self.cascade())
    }

    /// Remove a recorded grade and run the cascade
    ///
    /// # Errors
    /// `UnknownCourse` if `name` is not in the catalog
    pub fn clear_grade(&mut self, name: &str) -> Result<CascadeOutcome, ProgressError> {
        let key = self.course(name)?.name.clone();
        if let Some(previous) = self.grades.remove(&key) {
            debug!("Grade for '{key}' cleared (was {previous})");
        }
        Ok(self.cascade())
    }

    /// Re-derive eligibility from the catalog and the current grades without mutating first
    pub fn reevaluate(&mut self) -> CascadeOutcome {
        self.cascade()
    }

    /// Single pass in catalog order: a recorded grade on a course that cannot
    /// take one in its grading term is removed. Each check reads the live map,
    /// so removals earlier in the pass are visible to later courses.
    fn cascade(&mut self) -> CascadeOutcome {
        let mut outcome = CascadeOutcome::default();

        for course in self.catalog.courses() {
            if self.grades.get(&course.name).is_none() {
                continue;
            }
            let term = closing_term(course.kind, course.term);
            if !self.resolver.can_enter_grade(course, term, &self.grades) {
                self.grades.remove(&course.name);
                info!("Cleared grade for '{}': course is locked", course.name);
                outcome.cleared.push(course.name.clone());
            }
        }

        outcome
    }

    /// Credit-weighted average of passing grades, 2 decimals; 0 when nothing is passed
    #[must_use]
    pub fn weighted_average(&self) -> f64 {
        aggregates::weighted_average(&self.catalog, &self.grades)
    }

    /// Percentage of catalog credits earned, 1 decimal; 0 for a creditless catalog
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        aggregates::progress_percent(&self.catalog, &self.grades)
    }

    /// Both headline numbers with their underlying sums
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        aggregates::summarize(&self.catalog, &self.grades)
    }
}
