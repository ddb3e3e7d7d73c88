//! Grade values and the mutable grade map

use std::collections::HashMap;

/// Lowest grade that counts as passed
pub const PASSING_GRADE: u8 = 50;

/// Highest storable grade
pub const MAX_GRADE: u8 = 100;

/// Whether a grade counts as passed
#[must_use]
pub const fn is_passing(grade: u8) -> bool {
    grade >= PASSING_GRADE
}

/// Clamp any integer into `0..=100`
#[must_use]
pub fn clamp_grade(value: i64) -> u8 {
    // Clamped into range first, so the conversion cannot fail
    u8::try_from(value.clamp(0, i64::from(MAX_GRADE))).unwrap_or(MAX_GRADE)
}

/// Parse raw user input into a grade
///
/// Takes the leading integer of the input: surrounding whitespace is ignored,
/// an optional sign is honoured and parsing stops at the first non-digit
/// (`"85abc"` -> 85, `"7.9"` -> 7). Input without leading digits is 0. The
/// result is clamped into `0..=100`; this never fails.
#[must_use]
pub fn parse_grade(raw: &str) -> u8 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);

    if digits.is_empty() {
        return 0;
    }

    // Anything too long for i64 is far outside the range either way
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    clamp_grade(if negative { -magnitude } else { magnitude })
}

/// Recorded grades keyed by course name
///
/// Absence means "not graded", never "graded 0".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeState {
    grades: HashMap<String, u8>,
}

impl GradeState {
    /// Empty grade map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded grade for a course
    #[must_use]
    pub fn get(&self, course: &str) -> Option<u8> {
        self.grades.get(course).copied()
    }

    /// Whether the course has a recorded passing grade
    #[must_use]
    pub fn is_passed(&self, course: &str) -> bool {
        self.get(course).is_some_and(is_passing)
    }

    /// Record a grade, returning the previous one
    pub fn insert(&mut self, course: &str, grade: u8) -> Option<u8> {
        self.grades.insert(course.to_string(), grade.min(MAX_GRADE))
    }

    /// Remove a grade, returning it if one was recorded
    pub fn remove(&mut self, course: &str) -> Option<u8> {
        self.grades.remove(course)
    }

    /// Number of recorded grades
    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Whether no grade is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Iterate over `(course, grade)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.grades.iter().map(|(name, &grade)| (name.as_str(), grade))
    }
}
