//! Raw Input Rows
//!
//! Rows arrive from an external tabular loader with every field as text.
//! JSON documents may carry numbers (e.g. `"semester": 2`); those are
//! accepted and normalised to text so the builder sees one shape.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One unvalidated curriculum record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRow {
    /// Course id. Rows with an empty id contribute nothing.
    #[serde(deserialize_with = "cell_text")]
    pub id: String,

    /// Display name.
    #[serde(deserialize_with = "cell_text")]
    pub name: String,

    /// Semester as text; coerced by [`parse_semester`].
    #[serde(deserialize_with = "cell_text")]
    pub semester: String,

    /// Subject area.
    #[serde(deserialize_with = "cell_text")]
    pub area: String,

    /// Comma-separated prerequisite ids.
    #[serde(deserialize_with = "cell_text")]
    pub prerequisites: String,
}

impl RawRow {
    /// Create a row from text fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        semester: impl Into<String>,
        area: impl Into<String>,
        prerequisites: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            semester: semester.into(),
            area: area.into(),
            prerequisites: prerequisites.into(),
        }
    }

    /// The row's id with surrounding whitespace removed, if any is left.
    pub fn course_id(&self) -> Option<&str> {
        let id = self.id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// Prerequisite ids in listed order, trimmed, empty pieces dropped.
    pub fn prerequisite_ids(&self) -> impl Iterator<Item = &str> {
        self.prerequisites
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
    }
}

/// Coerce semester text to an integer.
///
/// Accepts surrounding whitespace and whole-valued decimals (`"2.0"`).
/// Returns `None` for empty, non-numeric, negative or fractional text; the
/// builder maps that to `0` (elective).
pub fn parse_semester(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Ok(value) = text.parse::<u32>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// Parse a JSON array of row objects.
pub fn rows_from_json(json: &str) -> Result<Vec<RawRow>> {
    Ok(serde_json::from_str(json)?)
}

/// A non-null JSON cell.
#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

fn cell_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Cell>::deserialize(deserializer)? {
        None => String::new(),
        Some(Cell::Text(text)) => text,
        Some(Cell::Integer(value)) => value.to_string(),
        Some(Cell::Float(value)) => value.to_string(),
        Some(Cell::Flag(value)) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_text_is_coerced() {
        assert_eq!(parse_semester("2"), Some(2));
        assert_eq!(parse_semester(" 7 "), Some(7));
        assert_eq!(parse_semester("3.0"), Some(3));
        assert_eq!(parse_semester(""), None);
        assert_eq!(parse_semester("two"), None);
        assert_eq!(parse_semester("-1"), None);
        assert_eq!(parse_semester("2.5"), None);
        assert_eq!(parse_semester("NaN"), None);
    }

    #[test]
    fn prerequisites_are_split_and_trimmed() {
        let row = RawRow::new("CAP", "Capstone", "8", "Other", " ROBO,  LAB1 ,, STAT ,");
        let ids: Vec<_> = row.prerequisite_ids().collect();
        assert_eq!(ids, vec!["ROBO", "LAB1", "STAT"]);
    }

    #[test]
    fn blank_id_has_no_course_id() {
        assert_eq!(RawRow::new("  ", "", "", "", "").course_id(), None);
        assert_eq!(RawRow::new(" DS ", "", "", "", "").course_id(), Some("DS"));
    }

    #[test]
    fn json_rows_accept_numbers_and_missing_fields() {
        let rows = rows_from_json(
            r#"[
                {"id": "CALC1", "name": "Calculus I", "semester": 1, "area": "Core Math"},
                {"id": "CALC2", "semester": "2", "prerequisites": "CALC1"},
                {"id": "ART", "semester": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].semester, "1");
        assert_eq!(rows[0].prerequisites, "");
        assert_eq!(rows[1].name, "");
        assert_eq!(rows[1].prerequisites, "CALC1");
        assert_eq!(rows[2].semester, "");
    }
}
