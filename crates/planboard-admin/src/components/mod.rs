//! Reusable UI components

mod badge;
mod button;
mod filter_bar;
mod header;
mod pagination;
mod sidebar;
mod stats;
mod table;

pub use badge::{BoolIcon, StatusBadge};
pub use button::{Button, ButtonVariant};
pub use filter_bar::{FilterBar, FilterState};
pub use header::Header;
pub use pagination::PaginationControl;
pub(crate) use sidebar::NAV_ITEMS;
pub use sidebar::Sidebar;
pub use stats::{StatCard, StatIcon};
pub use table::{render_column, Column, TableEmpty, TabularView};
