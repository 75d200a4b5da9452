//! Graph Builder
//!
//! Turns raw rows into a [`CurriculumGraph`].
//!
//! # Rules
//!
//! Rows are processed in input order:
//!
//! 1. A row with a non-empty id that has not been seen yet becomes a course.
//!    Its semester is coerced with [`parse_semester`]; blank text, and
//!    anything else that is not a non-negative integer, becomes `0` (elective).
//! 2. Every prerequisite piece becomes a link `piece -> row.id`. This holds
//!    even when the row itself was a skipped duplicate, and even when `piece`
//!    never appears as a course.
//! 3. A row without an id contributes no course. Its prerequisite links keep
//!    the empty target, so they are dangling and inert.
//!
//! Nothing here fails: malformed rows, duplicates and dangling links are
//! collected in a [`BuildReport`] and logged.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::course::{Course, Link};
use super::curriculum::CurriculumGraph;
use super::row::{parse_semester, RawRow};

/// Data-quality findings from a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Zero-based positions of rows without an id.
    pub malformed_rows: Vec<usize>,

    /// Rows whose id was already taken by an earlier row.
    pub duplicates: Vec<RowRef>,

    /// Non-blank semester values that could not be read as an integer.
    pub coerced_semesters: Vec<RowRef>,

    /// Links with an endpoint that is not a known course.
    pub dangling: Vec<Link>,
}

/// A row position paired with the id it carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRef {
    /// Zero-based row position.
    pub row: usize,

    /// The row's id.
    pub id: String,
}

impl BuildReport {
    /// Whether the input had no data-quality problems.
    pub fn is_clean(&self) -> bool {
        self.malformed_rows.is_empty()
            && self.duplicates.is_empty()
            && self.coerced_semesters.is_empty()
            && self.dangling.is_empty()
    }
}

/// Incremental row-to-graph builder.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    courses: IndexMap<String, Course>,
    links: Vec<Link>,
    report: BuildReport,
    rows_seen: usize,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next row.
    pub fn push_row(&mut self, row: &RawRow) -> &mut Self {
        let position = self.rows_seen;
        self.rows_seen += 1;

        let Some(id) = row.course_id() else {
            warn!(row = position, "row has no course id; skipping course");
            self.report.malformed_rows.push(position);
            self.push_links(row, "");
            return self;
        };

        if self.courses.contains_key(id) {
            warn!(row = position, id, "duplicate course id; keeping first occurrence");
            self.report.duplicates.push(RowRef {
                row: position,
                id: id.to_string(),
            });
        } else {
            let semester = match parse_semester(&row.semester) {
                Some(semester) => semester,
                None if row.semester.trim().is_empty() => 0,
                None => {
                    warn!(row = position, id, semester = %row.semester, "unreadable semester; treating as elective");
                    self.report.coerced_semesters.push(RowRef {
                        row: position,
                        id: id.to_string(),
                    });
                    0
                }
            };
            self.courses.insert(
                id.to_string(),
                Course::new(id, row.name.as_str(), semester, row.area.as_str()),
            );
        }

        self.push_links(row, id);
        self
    }

    fn push_links(&mut self, row: &RawRow, target: &str) {
        for prerequisite in row.prerequisite_ids() {
            self.links.push(Link::new(prerequisite, target));
        }
    }

    /// Finish the build.
    pub fn finish(mut self) -> (CurriculumGraph, BuildReport) {
        self.report.dangling = self
            .links
            .iter()
            .filter(|link| {
                !self.courses.contains_key(&link.source) || !self.courses.contains_key(&link.target)
            })
            .cloned()
            .collect();
        for link in &self.report.dangling {
            warn!(%link, "prerequisite link references an unknown course");
        }

        debug!(
            courses = self.courses.len(),
            links = self.links.len(),
            rows = self.rows_seen,
            "built curriculum graph"
        );
        (CurriculumGraph::assemble(self.courses, self.links), self.report)
    }
}

/// Build a graph from rows, discarding the report.
pub fn build<'a, I>(rows: I) -> CurriculumGraph
where
    I: IntoIterator<Item = &'a RawRow>,
{
    build_with_report(rows).0
}

/// Build a graph from rows and report data-quality findings.
pub fn build_with_report<'a, I>(rows: I) -> (CurriculumGraph, BuildReport)
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut builder = GraphBuilder::new();
    for row in rows {
        builder.push_row(row);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, semester: &str, prerequisites: &str) -> RawRow {
        RawRow::new(id, format!("{id} name"), semester, "Core", prerequisites)
    }

    #[test]
    fn creates_courses_and_links_from_rows() {
        let rows = vec![
            RawRow::new("CALC1", "Calculus I", "1", "Math", ""),
            RawRow::new("PHY1", "Physics I", "1", "Physics", ""),
            RawRow::new("CALC2", "Calculus II", "2", "Math", "CALC1"),
        ];
        let graph = build(&rows);

        let ids: Vec<_> = graph.ids().collect();
        assert_eq!(ids, vec!["CALC1", "PHY1", "CALC2"]);
        assert_eq!(graph.course("CALC2").unwrap().semester, 2);
        assert_eq!(graph.links(), &[Link::new("CALC1", "CALC2")]);
    }

    #[test]
    fn first_occurrence_wins_but_duplicate_links_survive() {
        let rows = vec![
            row("A", "1", ""),
            row("B", "2", "A"),
            RawRow::new("B", "Other name", "5", "Elsewhere", "C"),
            row("C", "1", ""),
        ];
        let (graph, report) = build_with_report(&rows);

        assert_eq!(graph.len(), 3);
        let b = graph.course("B").unwrap();
        assert_eq!(b.name, "B name");
        assert_eq!(b.semester, 2);
        assert_eq!(graph.links(), &[Link::new("A", "B"), Link::new("C", "B")]);
        assert_eq!(
            report.duplicates,
            vec![RowRef {
                row: 2,
                id: "B".to_string()
            }]
        );
    }

    #[test]
    fn prerequisite_lists_are_trimmed() {
        let graph = build(&[row("X", "3", " A,  B ,")]);
        assert_eq!(graph.links(), &[Link::new("A", "X"), Link::new("B", "X")]);
    }

    #[test]
    fn malformed_and_dangling_rows_are_reported() {
        let rows = vec![row("", "1", "A"), row("A", "two", "MISSING")];
        let (graph, report) = build_with_report(&rows);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.course("A").unwrap().semester, 0);
        assert_eq!(report.malformed_rows, vec![0]);
        assert_eq!(report.coerced_semesters.len(), 1);
        assert_eq!(
            report.dangling,
            vec![Link::new("A", ""), Link::new("MISSING", "A")]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn rows_without_id_keep_inert_links() {
        let rows = vec![row("A", "1", ""), row("  ", "2", "A")];
        let graph = build(&rows);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.links(), &[Link::new("A", "")]);
        assert_eq!(graph.dangling_links().count(), 1);
        assert_eq!(graph.out_degree("A"), 0);
    }

    #[test]
    fn clean_input_has_clean_report() {
        let (graph, report) = build_with_report(&[row("A", "", ""), row("B", "2", "A")]);
        assert!(graph.course("A").unwrap().is_elective());
        assert!(report.is_clean());
    }
}
