//! View State
//!
//! The UI's session context: which course is focused, which courses the
//! current filter shows, and whether filtered-out courses fade or disappear.
//! Each operation takes the graph explicitly; the view holds no reference to
//! it, so one graph can back many views.
//!
//! # Example
//!
//! ```rust
//! use curriculum_core::graph::{build, RawRow};
//! use curriculum_core::view::{ViewState, Visibility};
//!
//! let rows = vec![
//!     RawRow::new("CALC1", "Calculus I", "1", "Core Math", ""),
//!     RawRow::new("CALC2", "Calculus II", "2", "Core Math", "CALC1"),
//!     RawRow::new("PHY1", "Physics I", "1", "Physics", ""),
//! ];
//! let graph = build(&rows);
//!
//! let mut view = ViewState::default();
//! view.search(&graph, "calculus ii");
//! assert_eq!(view.focused(), Some("CALC2"));
//! assert_eq!(view.node_visibility("CALC1"), Visibility::Visible);
//! assert_eq!(view.node_visibility("PHY1"), Visibility::Faded);
//! ```

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::config::CurriculumConfig;
use crate::graph::{Course, CurriculumGraph, Link};
use crate::traversal::{find_course, Direction, TraversalEngine};

/// How a renderer should draw a course or link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Inside the current filter.
    Visible,

    /// Outside the filter, drawn dimmed.
    Faded,

    /// Outside the filter, not drawn.
    Hidden,
}

/// Focus and filter state for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    focused: Option<String>,

    /// `None` shows everything.
    visible: Option<IndexSet<String>>,

    isolate: bool,

    /// Depth for the prerequisite/dependent shortcuts.
    chain_depth: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&CurriculumConfig::default())
    }
}

impl ViewState {
    /// A view configured from `config`.
    pub fn from_config(config: &CurriculumConfig) -> Self {
        Self {
            focused: None,
            visible: None,
            isolate: config.isolate,
            chain_depth: config.chain_depth,
        }
    }

    /// The focused course id.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// The filtered id set, or `None` when everything is shown.
    pub fn visible(&self) -> Option<&IndexSet<String>> {
        self.visible.as_ref()
    }

    /// Whether filtered-out courses are hidden rather than faded.
    pub fn isolate(&self) -> bool {
        self.isolate
    }

    /// Hide (`true`) or fade (`false`) filtered-out courses.
    pub fn set_isolate(&mut self, isolate: bool) {
        self.isolate = isolate;
    }

    /// Focus a course and show it with its direct neighbours.
    ///
    /// Unknown ids leave the view unchanged and return `false`.
    pub fn focus(&mut self, graph: &CurriculumGraph, id: &str) -> bool {
        if !graph.contains(id) {
            debug!(id, "focus on unknown course ignored");
            return false;
        }
        self.focused = Some(id.to_string());
        self.show_neighbors(graph);
        true
    }

    /// Focus the first course matching `query`.
    pub fn search<'g>(&mut self, graph: &'g CurriculumGraph, query: &str) -> Option<&'g Course> {
        let found = find_course(graph, query)?;
        self.focus(graph, &found.id);
        Some(found)
    }

    /// Show the focused course with its direct neighbours.
    pub fn show_neighbors(&mut self, graph: &CurriculumGraph) {
        if let Some(id) = &self.focused {
            self.visible = Some(TraversalEngine::new(graph).highlight_set(id));
        }
    }

    /// Show a prerequisite (`Up`) or dependent (`Down`) chain from the focus.
    pub fn show_chain(&mut self, graph: &CurriculumGraph, direction: Direction, depth: usize) {
        if let Some(id) = &self.focused {
            self.visible = Some(TraversalEngine::new(graph).chain(id, direction, depth));
        }
    }

    /// Show the focused course's prerequisites up to the configured depth.
    pub fn show_prerequisites(&mut self, graph: &CurriculumGraph) {
        self.show_chain(graph, Direction::Up, self.chain_depth);
    }

    /// Show the focused course's dependents up to the configured depth.
    pub fn show_dependents(&mut self, graph: &CurriculumGraph) {
        self.show_chain(graph, Direction::Down, self.chain_depth);
    }

    /// Depth used by [`show_prerequisites`](Self::show_prerequisites) and
    /// [`show_dependents`](Self::show_dependents).
    pub fn set_chain_depth(&mut self, depth: usize) {
        self.chain_depth = depth;
    }

    /// Clear focus and filter.
    pub fn show_all(&mut self) {
        self.focused = None;
        self.visible = None;
    }

    /// Whether a course passes the current filter.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.as_ref().map_or(true, |visible| visible.contains(id))
    }

    /// How to draw a course.
    pub fn node_visibility(&self, id: &str) -> Visibility {
        self.classify(self.is_visible(id))
    }

    /// How to draw a link: visible only when both endpoints are.
    pub fn link_visibility(&self, link: &Link) -> Visibility {
        self.classify(self.is_visible(&link.source) && self.is_visible(&link.target))
    }

    fn classify(&self, visible: bool) -> Visibility {
        match (visible, self.isolate) {
            (true, _) => Visibility::Visible,
            (false, false) => Visibility::Faded,
            (false, true) => Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> CurriculumGraph {
        CurriculumGraph::from_parts(
            [
                Course::new("CALC1", "Calculus I", 1, "Core Math"),
                Course::new("CALC2", "Calculus II", 2, "Core Math"),
                Course::new("DIFEQ", "Differential Equations", 3, "Core Math"),
                Course::new("PHY1", "Physics I", 1, "Physics"),
            ],
            [Link::new("CALC1", "CALC2"), Link::new("CALC2", "DIFEQ")],
        )
    }

    #[test]
    fn default_view_shows_everything() {
        let view = ViewState::default();
        assert!(view.focused().is_none());
        assert_eq!(view.node_visibility("PHY1"), Visibility::Visible);
    }

    #[test]
    fn chain_views_need_focus() {
        let g = graph();
        let mut view = ViewState::default();
        view.show_chain(&g, Direction::Up, 3);
        assert!(view.visible().is_none());

        assert!(view.focus(&g, "DIFEQ"));
        view.show_chain(&g, Direction::Up, 1);
        assert!(view.is_visible("CALC2"));
        assert!(!view.is_visible("CALC1"));
    }

    #[test]
    fn shortcuts_use_configured_depth() {
        let g = graph();
        let mut view = ViewState::from_config(&CurriculumConfig {
            chain_depth: 1,
            ..CurriculumConfig::default()
        });
        view.focus(&g, "CALC1");
        view.show_dependents(&g);
        assert!(view.is_visible("CALC2"));
        assert!(!view.is_visible("DIFEQ"));

        view.set_chain_depth(3);
        view.show_dependents(&g);
        assert!(view.is_visible("DIFEQ"));

        view.focus(&g, "DIFEQ");
        view.show_prerequisites(&g);
        assert!(view.is_visible("CALC1"));
        assert!(!view.is_visible("PHY1"));
    }

    #[test]
    fn isolate_hides_instead_of_fading() {
        let g = graph();
        let mut view = ViewState::default();
        view.focus(&g, "CALC1");

        assert_eq!(view.node_visibility("DIFEQ"), Visibility::Faded);
        view.set_isolate(true);
        assert_eq!(view.node_visibility("DIFEQ"), Visibility::Hidden);
        assert_eq!(
            view.link_visibility(&Link::new("CALC1", "CALC2")),
            Visibility::Visible
        );
        assert_eq!(
            view.link_visibility(&Link::new("CALC2", "DIFEQ")),
            Visibility::Hidden
        );
    }

    #[test]
    fn unknown_focus_and_empty_search_change_nothing() {
        let g = graph();
        let mut view = ViewState::default();
        assert!(!view.focus(&g, "NOPE"));
        assert!(view.search(&g, "  ").is_none());
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn show_all_resets_focus() {
        let g = graph();
        let mut view = ViewState::from_config(&CurriculumConfig {
            isolate: true,
            ..CurriculumConfig::default()
        });
        view.search(&g, "physics");
        assert_eq!(view.focused(), Some("PHY1"));
        view.show_all();
        assert!(view.focused().is_none());
        assert!(view.isolate());
        assert_eq!(view.node_visibility("DIFEQ"), Visibility::Visible);
    }
}
