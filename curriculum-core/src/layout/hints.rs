//! Position Hints
//!
//! Target positions a renderer can feed to its layout engine. Nothing here
//! simulates forces; these are the anchors a force layout pulls towards and
//! the cells of a static semester grid.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use serde::Serialize;

use super::levels::Levels;
use crate::config::LayoutConfig;
use crate::graph::{Course, CurriculumGraph};

/// A target position for one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionHint {
    /// Course id.
    pub id: String,

    /// Horizontal target.
    pub x: f64,

    /// Vertical target.
    pub y: f64,
}

/// Where the semester grid puts one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridCell {
    /// A scheduled course in its semester column.
    Semester {
        /// Zero-based column, `semester - 1`.
        column: usize,

        /// Zero-based row within the column, in input order.
        row: usize,
    },

    /// An elective placed on the ring around the grid.
    Orbit {
        /// Position among the electives, in input order.
        index: usize,
    },
}

/// A course's position in the semester grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSlot {
    /// Course id.
    pub id: String,

    /// Grid cell or ring position.
    pub cell: GridCell,

    /// Horizontal position.
    pub x: f64,

    /// Vertical position.
    pub y: f64,
}

/// Anchor each course at its semester column and level row.
///
/// Electives anchor at `x = 0`. Courses missing from `levels` anchor at
/// level 0.
pub fn force_anchors(
    graph: &CurriculumGraph,
    levels: &Levels,
    config: &LayoutConfig,
) -> Vec<PositionHint> {
    graph
        .courses()
        .map(|course| {
            let column = course.semester.saturating_sub(1);
            let level = levels.get(&course.id).unwrap_or(0);
            PositionHint {
                id: course.id.clone(),
                x: f64::from(column) * config.column_spacing,
                y: level as f64 * config.row_spacing,
            }
        })
        .collect()
}

/// Lay courses out in a semester grid with electives on a surrounding ring.
///
/// Semester `n` maps to column `n - 1`, spaced `grid_column_spacing` apart.
/// Within a column courses keep input order and are centred on `y = 0`:
/// row `r` of `n` sits at `(r - (n - 1) / 2) * grid_row_spacing`.
///
/// Electives are spread evenly on a circle centred on the grid's bounding
/// box, starting at angle 0. Its radius is half the box diagonal plus
/// `elective_ring_margin`. Without scheduled courses the ring is centred on
/// the origin.
///
/// Slots are returned in node order.
pub fn semester_grid(graph: &CurriculumGraph, config: &LayoutConfig) -> Vec<GridSlot> {
    let mut column_sizes: BTreeMap<usize, usize> = BTreeMap::new();
    for course in graph.courses().filter(|course| !course.is_elective()) {
        *column_sizes.entry(column_of(course)).or_default() += 1;
    }
    let electives = graph.courses().filter(|course| course.is_elective()).count();

    let mut next_row: BTreeMap<usize, usize> = BTreeMap::new();
    let mut bounds = Bounds::default();
    let mut slots: Vec<GridSlot> = graph
        .courses()
        .map(|course| {
            if course.is_elective() {
                return GridSlot {
                    id: course.id.clone(),
                    cell: GridCell::Orbit { index: 0 },
                    x: 0.0,
                    y: 0.0,
                };
            }
            let column = column_of(course);
            let rows = column_sizes.get(&column).copied().unwrap_or(1);
            let row = next_row.entry(column).or_default();
            let slot = GridSlot {
                id: course.id.clone(),
                cell: GridCell::Semester { column, row: *row },
                x: column as f64 * config.grid_column_spacing,
                y: (*row as f64 - (rows - 1) as f64 / 2.0) * config.grid_row_spacing,
            };
            *row += 1;
            bounds.include(slot.x, slot.y);
            slot
        })
        .collect();

    if electives > 0 {
        let (center_x, center_y) = bounds.center();
        let radius = bounds.diagonal() / 2.0 + config.elective_ring_margin;
        let orbit = slots
            .iter_mut()
            .filter(|slot| matches!(slot.cell, GridCell::Orbit { .. }));
        for (index, slot) in orbit.enumerate() {
            let angle = index as f64 / electives as f64 * TAU;
            slot.cell = GridCell::Orbit { index };
            slot.x = center_x + radius * angle.cos();
            slot.y = center_y + radius * angle.sin();
        }
    }
    slots
}

fn column_of(course: &Course) -> usize {
    course.semester.saturating_sub(1) as usize
}

/// Bounding box of the scheduled grid positions.
#[derive(Debug, Default)]
struct Bounds(Option<(f64, f64, f64, f64)>);

impl Bounds {
    fn include(&mut self, x: f64, y: f64) {
        self.0 = Some(match self.0 {
            None => (x, x, y, y),
            Some((min_x, max_x, min_y, max_y)) => {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            }
        });
    }

    fn center(&self) -> (f64, f64) {
        self.0.map_or((0.0, 0.0), |(min_x, max_x, min_y, max_y)| {
            ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
        })
    }

    fn diagonal(&self) -> f64 {
        self.0.map_or(0.0, |(min_x, max_x, min_y, max_y)| {
            (max_x - min_x).hypot(max_y - min_y)
        })
    }
}
