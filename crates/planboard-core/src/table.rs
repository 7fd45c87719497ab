//! Table view derivation
//!
//! [`TableState`] is the per-table local state (sort and optional
//! pagination). [`TableState::derive`] turns a row snapshot into what the
//! body should show: sort first, then slice the current page.

use crate::pagination::PaginationState;
use crate::sort::SortState;
use crate::types::{Cell, ColumnDescriptor, Row};
use crate::EMPTY_MESSAGE;

/// What a table body renders for one pass
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<'a> {
    /// Single full-width placeholder row
    Empty {
        colspan: usize,
        message: &'static str,
    },
    Rows(Vec<&'a Row>),
}

impl<'a> TableBody<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, TableBody::Empty { .. })
    }

    pub fn rows(&self) -> &[&'a Row] {
        match self {
            TableBody::Rows(rows) => rows,
            TableBody::Empty { .. } => &[],
        }
    }

    /// Cell grid for the visible rows, one inner vec per row
    pub fn cells<V>(&self, columns: &[ColumnDescriptor<V>]) -> Vec<Vec<Cell<V>>> {
        self.rows()
            .iter()
            .map(|row| columns.iter().map(|col| col.cell(row)).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub sort: SortState,
    /// `None` renders every row
    pub pagination: Option<PaginationState>,
}

impl TableState {
    pub fn new(page_size: Option<usize>) -> Self {
        Self {
            sort: SortState::new(),
            pagination: page_size.map(PaginationState::new),
        }
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Header click; ignored for non-sortable columns
    pub fn click_header<V>(&mut self, column: &ColumnDescriptor<V>) -> bool {
        self.sort.click(column)
    }

    /// Upstream rows changed. The page returns to 1; sort is kept.
    pub fn rows_changed(&mut self, total_items: usize) {
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.set_total(total_items);
        }
    }

    pub fn set_page(&mut self, page: usize) {
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.set_page(page);
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.set_page_size(page_size);
        }
    }

    /// Pagination state measured against the actual row count
    pub fn pagination_for(&self, total_items: usize) -> Option<PaginationState> {
        self.pagination.map(|p| PaginationState { total_items, ..p })
    }

    /// Body for `rows`: sorted, then sliced to the current page
    pub fn derive<'a, V>(&self, rows: &'a [Row], columns: &[ColumnDescriptor<V>]) -> TableBody<'a> {
        if rows.is_empty() {
            return TableBody::Empty {
                colspan: columns.len(),
                message: EMPTY_MESSAGE,
            };
        }

        let sorted = self.sort.apply(rows);
        let visible = match self.pagination_for(rows.len()) {
            Some(pagination) => pagination.slice(&sorted).to_vec(),
            None => sorted,
        };
        TableBody::Rows(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;
    use crate::EMPTY_CELL;

    fn columns() -> Vec<ColumnDescriptor<String>> {
        vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new("seq", "Seq").sortable(),
            ColumnDescriptor::new("carer", "Carer"),
        ]
    }

    fn rows(n: usize) -> Vec<Row> {
        // Reverse order so sorting is observable
        (0..n)
            .rev()
            .map(|i| Row::new().with("id", format!("T-{:02}", i)).with("seq", i as i64))
            .collect()
    }

    fn seqs(body: &TableBody<'_>) -> Vec<f64> {
        body.rows()
            .iter()
            .filter_map(|r| r.get("seq").and_then(|v| v.as_f64()))
            .collect()
    }

    #[test]
    fn test_empty_rows_render_placeholder() {
        let state = TableState::new(Some(10));
        let body = state.derive(&[], &columns());
        assert_eq!(
            body,
            TableBody::Empty {
                colspan: 3,
                message: "No records found"
            }
        );
    }

    #[test]
    fn test_page_slice_after_sort() {
        let rows = rows(25);
        let cols = columns();
        let mut state = TableState::new(Some(10));
        state.click_header(&cols[1]);
        state.rows_changed(rows.len());
        state.set_page(2);

        let body = state.derive(&rows, &cols);
        let expected: Vec<f64> = (10..20).map(|i| i as f64).collect();
        assert_eq!(seqs(&body), expected);
        assert_eq!(
            state.pagination_for(rows.len()).unwrap().status_text(),
            "Showing 11-20 of 25"
        );
    }

    #[test]
    fn test_unpaginated_renders_all() {
        let rows = rows(25);
        let body = TableState::new(None).derive(&rows, &columns());
        assert_eq!(body.rows().len(), 25);
    }

    #[test]
    fn test_rows_changed_resets_page_keeps_sort() {
        let cols = columns();
        let mut state = TableState::new(Some(10));
        state.click_header(&cols[1]);
        state.click_header(&cols[1]);
        state.rows_changed(40);
        state.set_page(3);

        state.rows_changed(12);
        assert_eq!(state.pagination.unwrap().page, 1);
        assert_eq!(state.sort, SortState::by("seq", SortDirection::Descending));
    }

    #[test]
    fn test_missing_field_renders_placeholder_for_every_row() {
        let rows = rows(5);
        let cols = columns();
        let body = TableState::new(None).derive(&rows, &cols);
        let cells = body.cells(&cols);
        assert_eq!(cells.len(), 5);
        assert!(cells
            .iter()
            .all(|row| row[2] == Cell::Text(EMPTY_CELL.to_string())));
    }

    #[test]
    fn test_derive_is_repeatable() {
        let rows = rows(8);
        let cols = columns();
        let mut state = TableState::new(Some(5));
        state.click_header(&cols[1]);
        assert_eq!(state.derive(&rows, &cols), state.derive(&rows, &cols));
    }
}
