//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many terms a course occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseKind {
    /// Fully contained in one term and graded in that term
    #[serde(alias = "Semestral", alias = "semestral", alias = "single")]
    SingleTerm,
    /// Occupies an odd term and the following even term; graded once, at the
    /// close of the even term
    #[serde(alias = "Anual", alias = "anual", alias = "annual")]
    Spanning,
}

impl CourseKind {
    /// Human-readable label used by the CLI and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleTerm => "Single-Term",
            Self::Spanning => "Spanning",
        }
    }
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single-term" | "single" | "semestral" | "term" => Ok(Self::SingleTerm),
            "spanning" | "anual" | "annual" | "year" => Ok(Self::Spanning),
            _ => Err(format!("Unknown course kind: '{s}'")),
        }
    }
}

/// Represents a course in the curriculum catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name, used as the key for grades and prerequisite references
    pub name: String,

    /// Credit weight
    pub credits: u32,

    /// Single-term or spanning
    pub kind: CourseKind,

    /// Term in which the course is first offered (the odd opening term for
    /// spanning courses)
    pub term: u32,

    /// Names of courses that must be passed before this course can be graded
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Grade the catalog seeds before any user input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,
}

impl Course {
    /// Create a new course without prerequisites or seeded grade
    ///
    /// # Arguments
    /// * `name` - Unique course name
    /// * `credits` - Credit weight
    /// * `kind` - Single-term or spanning
    /// * `term` - Term in which the course starts
    #[must_use]
    pub const fn new(name: String, credits: u32, kind: CourseKind, term: u32) -> Self {
        Self {
            name,
            credits,
            kind,
            term,
            prerequisites: Vec::new(),
            grade: None,
        }
    }

    /// Add a prerequisite by course name
    pub fn add_prerequisite(&mut self, prereq: String) {
        if !self.prerequisites.contains(&prereq) {
            self.prerequisites.push(prereq);
        }
    }

    /// Builder-style variant of [`add_prerequisite`](Self::add_prerequisite)
    #[must_use]
    pub fn with_prerequisite(mut self, prereq: &str) -> Self {
        self.add_prerequisite(prereq.to_string());
        self
    }

    /// Seed an initial grade
    #[must_use]
    pub fn with_grade(mut self, grade: i64) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Whether the course has no prerequisites
    #[must_use]
    pub fn is_entry_course(&self) -> bool {
        self.prerequisites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("Cálculo I".to_string(), 10, CourseKind::SingleTerm, 1);

        assert_eq!(course.name, "Cálculo I");
        assert_eq!(course.credits, 10);
        assert_eq!(course.kind, CourseKind::SingleTerm);
        assert_eq!(course.term, 1);
        assert!(course.prerequisites.is_empty());
        assert!(course.grade.is_none());
        assert!(course.is_entry_course());
    }

    #[test]
    fn test_add_prerequisite() {
        let mut course = Course::new("Cálculo II".to_string(), 10, CourseKind::SingleTerm, 2);

        course.add_prerequisite("Cálculo I".to_string());
        assert_eq!(course.prerequisites, vec!["Cálculo I".to_string()]);

        // Adding duplicate should not duplicate
        course.add_prerequisite("Cálculo I".to_string());
        assert_eq!(course.prerequisites.len(), 1);
        assert!(!course.is_entry_course());
    }

    #[test]
    fn test_builder_helpers() {
        let course = Course::new("Física".to_string(), 12, CourseKind::Spanning, 3)
            .with_prerequisite("Cálculo I")
            .with_grade(64);

        assert_eq!(course.prerequisites, vec!["Cálculo I".to_string()]);
        assert_eq!(course.grade, Some(64));
    }

    #[test]
    fn test_kind_from_str_accepts_legacy_tags() {
        assert_eq!("Semestral".parse::<CourseKind>(), Ok(CourseKind::SingleTerm));
        assert_eq!("Anual".parse::<CourseKind>(), Ok(CourseKind::Spanning));
        assert_eq!("single-term".parse::<CourseKind>(), Ok(CourseKind::SingleTerm));
        assert_eq!(" SPANNING ".parse::<CourseKind>(), Ok(CourseKind::Spanning));
        assert!("quarterly".parse::<CourseKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CourseKind::SingleTerm.to_string(), "Single-Term");
        assert_eq!(CourseKind::Spanning.to_string(), "Spanning");
    }
}
