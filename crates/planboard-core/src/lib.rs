//! Planboard Core Library
//!
//! Row model, column descriptors, sorting, pagination, filters, theming and
//! configuration shared by the Planboard admin UI and CLI.

pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod pagination;
pub mod sort;
pub mod table;
pub mod theme;
pub mod types;
pub mod utils;

pub use config::PlanboardConfig;
pub use error::{Error, Result};
pub use filter::{DateRange, RowFilter};
pub use fixtures::Dataset;
pub use pagination::{PageItem, PaginationState};
pub use sort::{SortDirection, SortState};
pub use table::{TableBody, TableState};
pub use theme::{Theme, ThemePreset};
pub use types::{Cell, ColumnDescriptor, Row, Value};

/// Planboard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the pagination control
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Placeholder shown for missing or empty cells
pub const EMPTY_CELL: &str = "-";

/// Message shown in place of an empty table body
pub const EMPTY_MESSAGE: &str = "No records found";

/// Page strips longer than this are truncated with ellipses
pub const MAX_FULL_PAGE_STRIP: usize = 7;
