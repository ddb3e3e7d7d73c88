//! Term numbering helpers: years, ordinal labels and spanning-course pairs

use crate::core::models::{Course, CourseKind};

/// Terms per academic year
pub const TERMS_PER_YEAR: u32 = 2;

/// One academic year of the layout with its two terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBlock {
    /// Year number, starting at 1
    pub year: u32,
    /// Odd (first) term of the year
    pub first_term: u32,
    /// Even (second) term of the year
    pub second_term: u32,
}

impl YearBlock {
    /// Both terms of the year, in order
    #[must_use]
    pub const fn terms(&self) -> [u32; 2] {
        [self.first_term, self.second_term]
    }
}

/// Year a term belongs to (terms 1-2 are year 1, 3-4 year 2, ...). Term 0 maps to year 0.
#[must_use]
pub const fn year_of_term(term: u32) -> u32 {
    term.div_ceil(TERMS_PER_YEAR)
}

/// Term in which a course accepts its grade
///
/// Single-term courses close in their own term. A spanning course starting in
/// an odd term closes in the following even term; one declared on an even term
/// is treated as already sitting on its closing term.
#[must_use]
pub const fn closing_term(kind: CourseKind, term: u32) -> u32 {
    match kind {
        CourseKind::SingleTerm => term,
        CourseKind::Spanning if term % 2 == 1 => term.saturating_add(1),
        CourseKind::Spanning => term,
    }
}

/// Term blocks a course is rendered under: its own term, plus the closing
/// term for spanning courses
#[must_use]
pub fn displayed_terms(course: &Course) -> Vec<u32> {
    let closing = closing_term(course.kind, course.term);
    if closing == course.term {
        vec![course.term]
    } else {
        vec![course.term, closing]
    }
}

/// Round a term count up to whole years
#[must_use]
pub const fn whole_year_terms(terms: u32) -> u32 {
    year_of_term(terms).saturating_mul(TERMS_PER_YEAR)
}

/// Year-by-year layout covering `total_terms` (rounded up to whole years)
#[must_use]
pub fn year_layout(total_terms: u32) -> Vec<YearBlock> {
    (1..=year_of_term(total_terms))
        .map(|year| YearBlock {
            year,
            first_term: year.saturating_mul(TERMS_PER_YEAR) - 1,
            second_term: year.saturating_mul(TERMS_PER_YEAR),
        })
        .collect()
}

/// Upper-case roman numeral for a term (`14` -> `"XIV"`); `None` for 0
#[must_use]
pub fn roman_label(term: u32) -> Option<String> {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if term == 0 {
        return None;
    }

    let mut remaining = term;
    let mut label = String::new();
    for (value, numeral) in NUMERALS {
        while remaining >= value {
            label.push_str(numeral);
            remaining -= value;
        }
    }
    Some(label)
}
