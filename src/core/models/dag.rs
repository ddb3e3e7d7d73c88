//! Prerequisite graph over course names

use std::collections::{HashMap, HashSet};

/// Directed graph of course prerequisites
///
/// The graph keeps two association lists:
/// - `dependencies`: maps each course to its prerequisites
/// - `dependents`: maps each course to the courses that require it (reverse graph)
///
/// Catalogs are expected to be acyclic, but nothing here assumes it: every
/// traversal carries a visited set and terminates on cyclic input.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    /// Maps course name -> list of prerequisite course names
    pub dependencies: HashMap<String, Vec<String>>,

    /// Maps course name -> list of courses that depend on it
    pub dependents: HashMap<String, Vec<String>>,

    /// All course names in insertion order
    pub courses: Vec<String>,
}

impl PrerequisiteGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course node
    pub fn add_course(&mut self, course: &str) {
        if !self.dependencies.contains_key(course) {
            self.courses.push(course.to_string());
            self.dependencies.insert(course.to_string(), Vec::new());
            self.dependents.insert(course.to_string(), Vec::new());
        }
    }

    /// Add a prerequisite edge, creating either node if needed
    ///
    /// # Arguments
    /// * `course` - Course that requires the prerequisite
    /// * `prerequisite` - Course that must be passed first
    pub fn add_prerequisite(&mut self, course: &str, prerequisite: &str) {
        self.add_course(course);
        self.add_course(prerequisite);

        if let Some(deps) = self.dependencies.get_mut(course) {
            if !deps.iter().any(|d| d == prerequisite) {
                deps.push(prerequisite.to_string());
            }
        }

        if let Some(deps) = self.dependents.get_mut(prerequisite) {
            if !deps.iter().any(|d| d == course) {
                deps.push(course.to_string());
            }
        }
    }

    /// Prerequisites of a course, or `None` if the course is not in the graph
    #[must_use]
    pub fn get_prerequisites(&self, course: &str) -> Option<&Vec<String>> {
        self.dependencies.get(course)
    }

    /// Courses that directly require `course`, or `None` if it is not in the graph
    #[must_use]
    pub fn get_dependents(&self, course: &str) -> Option<&Vec<String>> {
        self.dependents.get(course)
    }

    /// Number of courses in the graph
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Check if a course exists in the graph
    #[must_use]
    pub fn contains_course(&self, course: &str) -> bool {
        self.dependencies.contains_key(course)
    }

    /// Whether `target` is reachable by following prerequisite edges out of `from`
    /// (excluding `from` itself unless a path leads back to it)
    #[must_use]
    pub fn requires_transitively(&self, from: &str, target: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = self
            .get_prerequisites(from)
            .map(|deps| deps.iter().map(String::as_str).collect())
            .unwrap_or_default();

        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(deps) = self.get_prerequisites(current) {
                stack.extend(deps.iter().map(String::as_str));
            }
        }

        false
    }

    /// Courses that lie on a prerequisite cycle (including self-references),
    /// in insertion order
    #[must_use]
    pub fn cycle_members(&self) -> Vec<String> {
        self.courses
            .iter()
            .filter(|course| self.requires_transitively(course, course))
            .cloned()
            .collect()
    }

    /// Every course that (transitively) requires `course`, in discovery order
    #[must_use]
    pub fn transitive_dependents(&self, course: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut stack: Vec<&str> = vec![course];

        while let Some(current) = stack.pop() {
            if let Some(children) = self.get_dependents(current) {
                for child in children {
                    if child != course && visited.insert(child.as_str()) {
                        order.push(child.clone());
                        stack.push(child.as_str());
                    }
                }
            }
        }

        order
    }
}

impl std::fmt::Display for PrerequisiteGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Prerequisite graph ({} courses):", self.courses.len())?;
        writeln!(f)?;

        for course in &self.courses {
            if let Some(deps) = self.dependencies.get(course) {
                if deps.is_empty() {
                    writeln!(f, "  {course} → (no prerequisites)")?;
                } else {
                    writeln!(f, "  {course} → {}", deps.join(", "))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation() {
        let graph = PrerequisiteGraph::new();
        assert_eq!(graph.course_count(), 0);
    }

    #[test]
    fn test_add_prerequisite() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("Cálculo II", "Cálculo I");

        assert_eq!(graph.course_count(), 2);
        assert!(graph.contains_course("Cálculo II"));
        assert!(graph.contains_course("Cálculo I"));

        let deps = graph.get_prerequisites("Cálculo II").unwrap();
        assert!(deps.contains(&"Cálculo I".to_string()));

        let dependents = graph.get_dependents("Cálculo I").unwrap();
        assert!(dependents.contains(&"Cálculo II".to_string()));
    }

    #[test]
    fn test_duplicate_prerequisite() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("B", "A");
        graph.add_prerequisite("B", "A");

        assert_eq!(graph.get_prerequisites("B").unwrap().len(), 1);
        assert_eq!(graph.get_dependents("A").unwrap().len(), 1);
    }

    #[test]
    fn test_acyclic_graph_has_no_cycle_members() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("B", "A");
        graph.add_prerequisite("C", "B");
        graph.add_prerequisite("C", "A");

        assert!(graph.cycle_members().is_empty());
        assert!(graph.requires_transitively("C", "A"));
        assert!(!graph.requires_transitively("A", "C"));
    }

    #[test]
    fn test_cycle_members_excludes_downstream_courses() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("A", "B");
        graph.add_prerequisite("B", "A");
        graph.add_prerequisite("C", "B");

        assert_eq!(graph.cycle_members(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("Tesis", "Tesis");

        assert_eq!(graph.cycle_members(), vec!["Tesis".to_string()]);
    }

    #[test]
    fn test_transitive_dependents_terminates_on_cycle() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("B", "A");
        graph.add_prerequisite("C", "B");
        graph.add_prerequisite("A", "C");

        let mut dependents = graph.transitive_dependents("A");
        dependents.sort();
        assert_eq!(dependents, vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_graph_display() {
        let mut graph = PrerequisiteGraph::new();
        graph.add_prerequisite("B", "A");
        graph.add_course("Z");

        let display = format!("{graph}");
        assert!(display.contains("Prerequisite graph (3 courses)"));
        assert!(display.contains("B → A"));
        assert!(display.contains("Z → (no prerequisites)"));
    }
}
