//! Curriculum Graph
//!
//! The graph owns the ordered course collection, the canonical id-pair links,
//! and a resolved index over them.
//!
//! # Resolution
//!
//! Courses are stored in an `IndexMap`, so each course has a stable position
//! (its first-occurrence order). When the graph is assembled, every link whose
//! endpoints are both known courses is resolved into the position-based
//! `prerequisites`/`dependents` lists. Links with an unknown endpoint stay in
//! `links` untouched but are inert for layering, traversal and completion.
//! Parallel links collapse to a single index entry.

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use super::course::{Course, Link};
use crate::error::Result;

/// Adjacency list for one course. Most courses have a handful of neighbours.
pub(crate) type Adjacent = SmallVec<[usize; 4]>;

/// A validated curriculum: courses, prerequisite links, and their index.
#[derive(Debug, Clone, Default)]
pub struct CurriculumGraph {
    /// All courses by id, in first-occurrence order.
    courses: IndexMap<String, Course>,

    /// Canonical links, in construction order.
    links: Vec<Link>,

    /// Direct prerequisites of each course, by position.
    prerequisites: Vec<Adjacent>,

    /// Direct dependents of each course, by position.
    dependents: Vec<Adjacent>,
}

impl CurriculumGraph {
    /// Assemble a graph from deduplicated courses and raw links.
    pub(crate) fn assemble(courses: IndexMap<String, Course>, links: Vec<Link>) -> Self {
        let mut prerequisites = vec![Adjacent::new(); courses.len()];
        let mut dependents = vec![Adjacent::new(); courses.len()];

        for link in &links {
            let (Some(source), Some(target)) = (
                courses.get_index_of(&link.source),
                courses.get_index_of(&link.target),
            ) else {
                continue;
            };
            if !prerequisites[target].contains(&source) {
                prerequisites[target].push(source);
                dependents[source].push(target);
            }
        }

        Self {
            courses,
            links,
            prerequisites,
            dependents,
        }
    }

    /// Build a graph from already-typed courses and links.
    ///
    /// The first course with a given id wins; courses with an empty id are
    /// skipped. Links are kept as given.
    pub fn from_parts<C, L>(courses: C, links: L) -> Self
    where
        C: IntoIterator<Item = Course>,
        L: IntoIterator<Item = Link>,
    {
        let mut by_id = IndexMap::new();
        for course in courses {
            if course.id.is_empty() || by_id.contains_key(&course.id) {
                continue;
            }
            by_id.insert(course.id.clone(), course);
        }
        Self::assemble(by_id, links.into_iter().collect())
    }

    /// Courses in first-occurrence order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Course ids in first-occurrence order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Canonical links, dangling ones included.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Look up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Whether the graph has a course with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the graph has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Direct prerequisite ids of a course. Empty for unknown ids.
    pub fn prerequisites_of(&self, id: &str) -> Vec<&str> {
        self.resolve_ids(id, &self.prerequisites)
    }

    /// Direct dependent ids of a course. Empty for unknown ids.
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        self.resolve_ids(id, &self.dependents)
    }

    /// Number of distinct known prerequisites.
    pub fn in_degree(&self, id: &str) -> usize {
        self.index_of(id).map_or(0, |index| self.prerequisites[index].len())
    }

    /// Number of distinct known dependents.
    pub fn out_degree(&self, id: &str) -> usize {
        self.index_of(id).map_or(0, |index| self.dependents[index].len())
    }

    /// Links with at least one endpoint that is not a known course.
    pub fn dangling_links(&self) -> impl Iterator<Item = &Link> {
        self.links
            .iter()
            .filter(|link| !self.contains(&link.source) || !self.contains(&link.target))
    }

    /// Serialize the rendering contract: `{ "nodes": [...], "links": [...] }`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&GraphDocument {
            nodes: self.courses.values().collect(),
            links: &self.links,
        })?)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.courses.get_index_of(id)
    }

    pub(crate) fn id_at(&self, index: usize) -> &str {
        self.courses
            .get_index(index)
            .map_or("", |(id, _)| id.as_str())
    }

    pub(crate) fn prerequisite_indices(&self, index: usize) -> &[usize] {
        self.prerequisites
            .get(index)
            .map(|adj| adj.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn dependent_indices(&self, index: usize) -> &[usize] {
        self.dependents
            .get(index)
            .map(|adj| adj.as_slice())
            .unwrap_or(&[])
    }

    fn resolve_ids(&self, id: &str, adjacency: &[Adjacent]) -> Vec<&str> {
        self.index_of(id)
            .map(|index| adjacency[index].iter().map(|&i| self.id_at(i)).collect())
            .unwrap_or_default()
    }
}

#[derive(Serialize)]
struct GraphDocument<'a> {
    nodes: Vec<&'a Course>,
    links: &'a [Link],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str) -> Course {
        Course::new(id, id, 1, "Core")
    }

    #[test]
    fn resolved_index_ignores_dangling_links() {
        let graph = CurriculumGraph::from_parts(
            [course("A"), course("B")],
            [Link::new("A", "B"), Link::new("GHOST", "B"), Link::new("A", "NOWHERE")],
        );

        assert_eq!(graph.links().len(), 3);
        assert_eq!(graph.prerequisites_of("B"), vec!["A"]);
        assert_eq!(graph.dependents_of("A"), vec!["B"]);
        assert_eq!(graph.in_degree("B"), 1);
        assert_eq!(graph.dangling_links().count(), 2);
    }

    #[test]
    fn parallel_links_collapse_in_index() {
        let graph = CurriculumGraph::from_parts(
            [course("A"), course("B")],
            [Link::new("A", "B"), Link::new("A", "B")],
        );
        assert_eq!(graph.links().len(), 2);
        assert_eq!(graph.in_degree("B"), 1);
        assert_eq!(graph.out_degree("A"), 1);
    }

    #[test]
    fn first_course_wins_in_from_parts() {
        let graph = CurriculumGraph::from_parts(
            [
                Course::new("A", "First", 1, "x"),
                Course::new("A", "Second", 2, "y"),
                Course::new("", "Nameless", 1, "z"),
            ],
            Vec::<Link>::new(),
        );
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.course("A").unwrap().name, "First");
    }

    #[test]
    fn unknown_ids_have_no_neighbours() {
        let graph = CurriculumGraph::from_parts([course("A")], Vec::<Link>::new());
        assert!(graph.prerequisites_of("Z").is_empty());
        assert!(graph.dependents_of("Z").is_empty());
        assert_eq!(graph.in_degree("Z"), 0);
    }

    #[test]
    fn serializes_nodes_and_links() {
        let graph = CurriculumGraph::from_parts(
            [Course::new("A", "Alpha", 1, "Core")],
            [Link::new("A", "B")],
        );
        let value: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(value["nodes"][0]["id"], "A");
        assert_eq!(value["nodes"][0]["semester"], 1);
        assert_eq!(value["links"][0]["source"], "A");
        assert_eq!(value["links"][0]["target"], "B");
    }
}
