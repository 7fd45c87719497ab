//! Click-to-sort state and row ordering

use crate::types::{ColumnDescriptor, Row, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column and direction. No column means input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(column.into()),
            direction,
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.column.as_deref() == Some(key)
    }

    /// Direction for `key` if it is the active column
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.is_active(key).then_some(self.direction)
    }

    /// Header click on `key`: flips the direction of the active column,
    /// otherwise activates `key` ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.is_active(key) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Header click on a column; non-sortable columns are ignored.
    /// Returns whether the state changed.
    pub fn click<V>(&mut self, column: &ColumnDescriptor<V>) -> bool {
        if !column.sortable {
            return false;
        }
        self.toggle(&column.key);
        true
    }

    pub fn clear(&mut self) {
        self.column = None;
        self.direction = SortDirection::Ascending;
    }

    /// Ordering of two rows under this state
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let Some(key) = self.column.as_deref() else {
            return Ordering::Equal;
        };
        let ord = compare_values(a.get(key), b.get(key));
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    /// Rows in display order. The input slice is never reordered.
    pub fn apply<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        let mut sorted: Vec<&Row> = rows.iter().collect();
        if self.column.is_some() {
            sorted.sort_by(|a, b| self.compare(a, b));
        }
        tracing::debug!(
            column = ?self.column,
            direction = ?self.direction,
            rows = sorted.len(),
            "Sorted rows"
        );
        sorted
    }
}

/// Missing values order before present ones
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("id", "T-3").with("client", "Cole").with("duration_mins", 60),
            Row::new().with("id", "T-1").with("client", "Avery").with("duration_mins", 15),
            Row::new().with("id", "T-2").with("client", "Blake").with("duration_mins", 30),
            Row::new().with("id", "T-4").with("duration_mins", 45),
        ]
    }

    fn ids(sorted: &[&Row]) -> Vec<String> {
        sorted.iter().filter_map(|r| r.id()).collect()
    }

    #[test]
    fn test_default_is_input_order() {
        let rows = rows();
        let sorted = SortState::new().apply(&rows);
        assert_eq!(ids(&sorted), vec!["T-3", "T-1", "T-2", "T-4"]);
    }

    #[test]
    fn test_first_click_ascending_second_descending() {
        let rows = rows();
        let column = ColumnDescriptor::<String>::new("duration_mins", "Duration").sortable();
        let mut state = SortState::new();

        assert!(state.click(&column));
        let asc = state.apply(&rows);
        assert!(asc
            .windows(2)
            .all(|w| compare_values(w[0].get("duration_mins"), w[1].get("duration_mins")) != Ordering::Greater));

        assert!(state.click(&column));
        assert_eq!(state.direction, SortDirection::Descending);
        let desc = state.apply(&rows);
        assert!(desc
            .windows(2)
            .all(|w| compare_values(w[0].get("duration_mins"), w[1].get("duration_mins")) != Ordering::Less));
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let mut state = SortState::by("client", SortDirection::Descending);
        state.toggle("duration_mins");
        assert_eq!(state, SortState::by("duration_mins", SortDirection::Ascending));
    }

    #[test]
    fn test_non_sortable_click_ignored() {
        let mut state = SortState::new();
        let column = ColumnDescriptor::<String>::new("notes", "Notes");
        assert!(!state.click(&column));
        assert_eq!(state, SortState::new());
    }

    #[test]
    fn test_missing_values_sort_first_ascending() {
        let rows = rows();
        let sorted = SortState::by("client", SortDirection::Ascending).apply(&rows);
        assert_eq!(ids(&sorted), vec!["T-4", "T-1", "T-2", "T-3"]);
    }

    #[test]
    fn test_repeated_apply_is_identical() {
        let rows = rows();
        let state = SortState::by("client", SortDirection::Descending);
        assert_eq!(ids(&state.apply(&rows)), ids(&state.apply(&rows)));
    }

    #[test]
    fn test_direction_for() {
        let state = SortState::by("client", SortDirection::Descending);
        assert_eq!(state.direction_for("client"), Some(SortDirection::Descending));
        assert_eq!(state.direction_for("carer"), None);
    }
}
