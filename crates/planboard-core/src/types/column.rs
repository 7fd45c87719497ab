//! Column descriptors

use super::{Row, Value};
use crate::EMPTY_CELL;
use std::fmt;
use std::sync::Arc;

/// Maps a cell's raw value (absent when the row lacks the field) and its
/// full row to a rendered representation.
pub type CellRenderer<V> = Arc<dyn Fn(Option<&Value>, &Row) -> V + Send + Sync>;

/// Content of one rendered cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<V> {
    /// Output of the column's render function
    Rendered(V),
    /// Display text of the raw value, or the placeholder dash
    Text(String),
}

impl<V> Cell<V> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Cell::Text(t) if t == EMPTY_CELL)
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Cell<U> {
        match self {
            Cell::Rendered(v) => Cell::Rendered(f(v)),
            Cell::Text(t) => Cell::Text(t),
        }
    }
}

/// Describes how one table column is labelled, sorted and rendered.
///
/// `V` is the render output type: a view in the web front end, plain text in
/// the CLI.
pub struct ColumnDescriptor<V> {
    /// Row field name, or a synthetic key for computed columns
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Fixed width hint, passed through to the renderer as-is
    pub width: Option<String>,
    render: Option<CellRenderer<V>>,
}

impl<V> ColumnDescriptor<V> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &Row) -> V + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }

    /// Raw value of this column in `row`
    pub fn raw<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        row.get(&self.key)
    }

    /// Cell content for `row`.
    ///
    /// A render function always wins. Without one, missing fields and empty
    /// text fall back to the placeholder dash.
    pub fn cell(&self, row: &Row) -> Cell<V> {
        let raw = self.raw(row);
        if let Some(render) = &self.render {
            return Cell::Rendered(render(raw, row));
        }
        match raw {
            Some(value) if !value.is_empty() => Cell::Text(value.to_string()),
            _ => Cell::Text(EMPTY_CELL.to_string()),
        }
    }
}

impl<V> Clone for ColumnDescriptor<V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            render: self.render.clone(),
        }
    }
}

impl<V> fmt::Debug for ColumnDescriptor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
