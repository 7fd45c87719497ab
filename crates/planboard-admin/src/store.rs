//! Fixture rows shared across pages
//!
//! Every dataset is loaded once at startup. Pages read and write the same
//! signals, so an acknowledged alert stays acknowledged after navigating away.

use leptos::prelude::*;
use planboard_core::{Dataset, Row};

#[derive(Clone, Copy)]
pub struct DatasetStore {
    tasks: RwSignal<Vec<Row>>,
    clients: RwSignal<Vec<Row>>,
    rosters: RwSignal<Vec<Row>>,
    alerts: RwSignal<Vec<Row>>,
}

impl DatasetStore {
    pub fn load() -> Self {
        Self {
            tasks: RwSignal::new(load_rows(Dataset::Tasks)),
            clients: RwSignal::new(load_rows(Dataset::Clients)),
            rosters: RwSignal::new(load_rows(Dataset::Rosters)),
            alerts: RwSignal::new(load_rows(Dataset::Alerts)),
        }
    }

    pub fn rows(&self, dataset: Dataset) -> RwSignal<Vec<Row>> {
        match dataset {
            Dataset::Tasks => self.tasks,
            Dataset::Clients => self.clients,
            Dataset::Rosters => self.rosters,
            Dataset::Alerts => self.alerts,
        }
    }
}

fn load_rows(dataset: Dataset) -> Vec<Row> {
    match dataset.load() {
        Ok(rows) => {
            log::debug!("Loaded {} {} rows", rows.len(), dataset);
            rows
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", dataset, e);
            Vec::new()
        }
    }
}

pub fn provide_store() {
    provide_context(DatasetStore::load());
}

/// Rows for `dataset`; empty when no store was provided
pub fn use_rows(dataset: Dataset) -> RwSignal<Vec<Row>> {
    match use_context::<DatasetStore>() {
        Some(store) => store.rows(dataset),
        None => {
            log::warn!("No dataset store in context");
            RwSignal::new(Vec::new())
        }
    }
}

pub fn unacknowledged(rows: &[Row]) -> usize {
    rows.iter()
        .filter(|row| !row.get("acknowledged").and_then(|v| v.as_bool()).unwrap_or(false))
        .count()
}

/// Mark the alert with `id` acknowledged. Returns false when no row matches.
pub fn acknowledge(rows: &mut [Row], id: &str) -> bool {
    match rows.iter_mut().find(|row| row.id().as_deref() == Some(id)) {
        Some(row) => {
            row.insert("acknowledged", true);
            true
        }
        None => false,
    }
}
