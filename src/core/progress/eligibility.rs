//! Eligibility resolution: unlock state and term-gated grade entry

use super::grades::GradeState;
use super::terms::closing_term;
use crate::core::models::{Course, CourseKind};
use std::collections::HashSet;

/// What the view shows for a course in a given term block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    /// Prerequisites are not satisfied
    Locked,
    /// Unlocked, but no grade is entered in this term (opening term of a spanning course)
    NoEntry,
    /// Grade entry is enabled; carries the current grade, if any
    Editable(Option<u8>),
}

impl CourseStatus {
    /// Short cell text for terminal and report views
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Locked => "locked".to_string(),
            Self::NoEntry => "—".to_string(),
            Self::Editable(Some(grade)) => grade.to_string(),
            Self::Editable(None) => "_".to_string(),
        }
    }
}

/// Whether a course takes its grade in `term`
///
/// Single-term courses accept entry under any term block they are shown in.
/// Spanning courses accept it only in the even term that closes their pair.
#[must_use]
pub const fn accepts_grade_in_term(course: &Course, term: u32) -> bool {
    match course.kind {
        CourseKind::SingleTerm => true,
        CourseKind::Spanning => term % 2 == 0 && term == closing_term(course.kind, course.term),
    }
}

/// Decides unlock state against the live grade map
///
/// Courses listed as blocked (prerequisite cycle members) never unlock. A
/// prerequisite outside the catalog can never be graded, so courses naming one
/// stay locked without being listed. Nothing is cached: every query reads the
/// grades it is given.
#[derive(Debug, Clone, Default)]
pub struct EligibilityResolver {
    blocked: HashSet<String>,
}

impl EligibilityResolver {
    /// Resolver with a set of permanently locked courses
    #[must_use]
    pub const fn new(blocked: HashSet<String>) -> Self {
        Self { blocked }
    }

    /// Whether a course can never unlock
    #[must_use]
    pub fn is_blocked(&self, course: &str) -> bool {
        self.blocked.contains(course)
    }

    /// True iff the course is not blocked and every prerequisite has a
    /// recorded passing grade. An ungraded prerequisite is unsatisfied.
    #[must_use]
    pub fn is_unlocked(&self, course: &Course, grades: &GradeState) -> bool {
        !self.is_blocked(&course.name)
            && course
                .prerequisites
                .iter()
                .all(|prereq| grades.is_passed(prereq))
    }

    /// `is_unlocked` and `accepts_grade_in_term` together
    #[must_use]
    pub fn can_enter_grade(&self, course: &Course, term: u32, grades: &GradeState) -> bool {
        self.is_unlocked(course, grades) && accepts_grade_in_term(course, term)
    }

    /// Display decision for a course rendered under `term`
    #[must_use]
    pub fn status(&self, course: &Course, term: u32, grades: &GradeState) -> CourseStatus {
        if !self.is_unlocked(course, grades) {
            CourseStatus::Locked
        } else if accepts_grade_in_term(course, term) {
            CourseStatus::Editable(grades.get(&course.name))
        } else {
            CourseStatus::NoEntry
        }
    }
}
