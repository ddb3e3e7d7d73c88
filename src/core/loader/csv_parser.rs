//! CSV parser for curriculum catalogs
//!
//! Layout:
//!
//! ```text
//! Curriculum,Ingeniería Civil Industrial
//! Courses
//! Name,Credits,Kind,Term,Prerequisites,Grade
//! Cálculo I,10,Semestral,1,,
//! Cálculo II,10,Semestral,2,Cálculo I,
//! Física General,12,Anual,3,Cálculo I;Cálculo II,
//! ```
//!
//! Metadata lines before the `Courses` marker are optional. Header names are
//! matched case-insensitively; `Prerequisites` and `Grade` columns may be absent.

use crate::core::models::{Catalog, Course, CourseKind};
use crate::warn;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or a course line cannot be parsed
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_csv_str(&content)
}

/// Parse catalog CSV content
///
/// # Errors
/// Returns an error if the `Courses` section or its header is missing, or a
/// course line is malformed
pub fn parse_catalog_csv_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let courses_start = lines
        .iter()
        .position(|line| first_field(line).eq_ignore_ascii_case("courses"))
        .ok_or("No 'Courses' section found in CSV")?;

    let name = parse_metadata(&lines[..courses_start]);

    let header_line = lines
        .get(courses_start + 1)
        .ok_or("No course header found")?;
    let headers = parse_csv_line(header_line);

    for required in ["Name", "Credits", "Kind", "Term"] {
        if column(&headers, required).is_none() {
            return Err(format!("Course header is missing the '{required}' column").into());
        }
    }

    let mut courses = Vec::new();
    for (offset, line) in lines.iter().enumerate().skip(courses_start + 2) {
        if line.trim().is_empty() {
            continue;
        }
        let course = parse_course_line(line, &headers)
            .map_err(|e| format!("Line {}: {e}", offset + 1))?;
        courses.push(course);
    }

    let (catalog, duplicates) = Catalog::from_courses(courses);
    for duplicate in duplicates {
        warn!("Duplicate course '{duplicate}' in CSV catalog; keeping the first entry");
    }

    Ok(match name {
        Some(name) => catalog.with_name(&name),
        None => catalog,
    })
}

/// Curriculum name from the metadata lines, if any
fn parse_metadata(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        let fields = parse_csv_line(line);
        match fields.as_slice() {
            [key, value, ..] if key.eq_ignore_ascii_case("curriculum") && !value.is_empty() => {
                Some(value.clone())
            }
            _ => None,
        }
    })
}

fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or_default().trim()
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',').map(str::trim).map(ToString::to_string).collect()
}

fn column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// Get a field value from a CSV line by header name
fn get_field<'a>(fields: &'a [String], header_name: &str, headers: &[String]) -> Option<&'a str> {
    column(headers, header_name)
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
}

/// Parse a single course line
fn parse_course_line(line: &str, headers: &[String]) -> Result<Course, String> {
    let fields = parse_csv_line(line);

    let name = get_field(&fields, "Name", headers).unwrap_or_default();
    if name.is_empty() {
        return Err("missing course name".to_string());
    }

    let credits_str = get_field(&fields, "Credits", headers).unwrap_or_default();
    let credits = credits_str
        .parse::<u32>()
        .map_err(|_| format!("invalid credits '{credits_str}' for '{name}'"))?;

    let kind = get_field(&fields, "Kind", headers)
        .unwrap_or_default()
        .parse::<CourseKind>()
        .map_err(|e| format!("{e} for '{name}'"))?;

    let term_str = get_field(&fields, "Term", headers).unwrap_or_default();
    let term = term_str
        .parse::<u32>()
        .map_err(|_| format!("invalid term '{term_str}' for '{name}'"))?;

    let mut course = Course::new(name.to_string(), credits, kind, term);

    if let Some(prereq_str) = get_field(&fields, "Prerequisites", headers) {
        for prereq in prereq_str.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            course.add_prerequisite(prereq.to_string());
        }
    }

    if let Some(grade_str) = get_field(&fields, "Grade", headers).filter(|g| !g.is_empty()) {
        let grade = grade_str
            .parse::<i64>()
            .map_err(|_| format!("invalid grade '{grade_str}' for '{name}'"))?;
        course.grade = Some(grade);
    }

    Ok(course)
}
