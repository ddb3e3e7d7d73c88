//! Catalog model: the ordered, read-only list of curriculum courses

use super::{Course, PrerequisiteGraph};
use crate::core::progress::terms::closing_term;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The static, ordered set of course definitions for a whole curriculum
///
/// Courses keep the order in which they were supplied. Names are unique: when a
/// duplicate is added the first record wins and the duplicate is reported back
/// to the caller. Deserialized catalogs go through the same path, so their name
/// index is always built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawCatalog")]
pub struct Catalog {
    /// Optional curriculum label (e.g., "Ingeniería Civil Industrial")
    #[serde(default)]
    pub name: Option<String>,

    /// Courses in catalog order
    #[serde(rename = "course", default)]
    courses: Vec<Course>,

    /// Course name -> position in `courses`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// On-disk catalog shape, before names are indexed
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "course", default)]
    courses: Vec<Course>,
}

impl From<RawCatalog> for Catalog {
    fn from(raw: RawCatalog) -> Self {
        let (mut catalog, duplicates) = Self::from_courses(raw.courses);
        for duplicate in duplicates {
            warn!("Duplicate course '{duplicate}' in catalog; keeping the first entry");
        }
        catalog.name = raw.name;
        catalog
    }
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from courses, returning it together with the names of
    /// duplicates that were dropped
    #[must_use]
    pub fn from_courses(courses: Vec<Course>) -> (Self, Vec<String>) {
        let mut catalog = Self::new();
        let duplicates = courses
            .into_iter()
            .filter_map(|course| {
                let name = course.name.clone();
                (!catalog.add_course(course)).then_some(name)
            })
            .collect();
        (catalog, duplicates)
    }

    /// Set the curriculum label
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Add a course to the end of the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with that name already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.index.contains_key(&course.name) {
            return false;
        }
        self.index.insert(course.name.clone(), self.courses.len());
        self.courses.push(course);
        true
    }

    /// Look up a course by name
    #[must_use]
    pub fn get_course(&self, name: &str) -> Option<&Course> {
        self.index.get(name).map(|&idx| &self.courses[idx])
    }

    /// Check if a course exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses whose starting term is `term`, in catalog order
    pub fn courses_in_term(&self, term: u32) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |c| c.term == term)
    }

    /// Sum of credits over the whole catalog
    #[must_use]
    pub fn total_credits(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credits)).sum()
    }

    /// Highest term any course occupies (the closing term for spanning courses)
    #[must_use]
    pub fn last_term(&self) -> u32 {
        self.courses
            .iter()
            .map(|c| closing_term(c.kind, c.term))
            .max()
            .unwrap_or(0)
    }

    /// Prerequisite references that do not name a course in the catalog,
    /// as `(course, missing prerequisite)` pairs
    #[must_use]
    pub fn dangling_prerequisites(&self) -> Vec<(String, String)> {
        self.courses
            .iter()
            .flat_map(|course| {
                course
                    .prerequisites
                    .iter()
                    .filter(|prereq| !self.contains(prereq))
                    .map(|prereq| (course.name.clone(), prereq.clone()))
            })
            .collect()
    }

    /// Build the prerequisite graph over catalog courses
    ///
    /// References to courses outside the catalog are left out of the graph; see
    /// [`dangling_prerequisites`](Self::dangling_prerequisites).
    #[must_use]
    pub fn build_graph(&self) -> PrerequisiteGraph {
        let mut graph = PrerequisiteGraph::new();

        for course in &self.courses {
            graph.add_course(&course.name);
        }

        for course in &self.courses {
            for prereq in &course.prerequisites {
                if self.contains(prereq) {
                    graph.add_prerequisite(&course.name, prereq);
                }
            }
        }

        graph
    }
}
