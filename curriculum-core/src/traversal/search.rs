//! Course search.

use crate::graph::{Course, CurriculumGraph};

/// Find the first course matching a free-text query.
///
/// The query is trimmed and compared case-insensitively. A course matches
/// when its id equals the query or its name contains it. Courses are checked
/// in input order; a blank query matches nothing.
pub fn find_course<'g>(graph: &'g CurriculumGraph, query: &str) -> Option<&'g Course> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    graph
        .courses()
        .find(|course| {
            course.id.to_lowercase() == query || course.name.to_lowercase().contains(&query)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Link;

    fn graph() -> CurriculumGraph {
        CurriculumGraph::from_parts(
            [
                Course::new("CALC1", "Calculus I", 1, "Core Math"),
                Course::new("CALC2", "Calculus II", 2, "Core Math"),
                Course::new("SIGN", "Signals & Systems", 4, "Electrical"),
            ],
            Vec::<Link>::new(),
        )
    }

    #[test]
    fn matches_id_exactly_or_name_substring() {
        let g = graph();
        assert_eq!(find_course(&g, "calc2").unwrap().id, "CALC2");
        assert_eq!(find_course(&g, "  systems ").unwrap().id, "SIGN");
        // Name substring: the first course in input order wins.
        assert_eq!(find_course(&g, "calculus").unwrap().id, "CALC1");
    }

    #[test]
    fn blank_or_missing_queries_find_nothing() {
        let g = graph();
        assert!(find_course(&g, "   ").is_none());
        assert!(find_course(&g, "thermo").is_none());
        // Ids match whole, not by substring.
        assert!(find_course(&g, "ALC1").is_none());
    }
}
