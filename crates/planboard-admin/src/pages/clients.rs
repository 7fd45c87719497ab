//! Client register

use leptos::prelude::*;
use planboard_core::{Dataset, Theme, ThemePreset};

use super::{DatasetTable, PageHeading};
use crate::components::{render_column, BoolIcon, Column, StatusBadge};

fn client_columns() -> Vec<Column> {
    let columns = render_column(Dataset::Clients.columns(), "care_level", |value, _| {
        let label = value.map(|v| v.to_string()).unwrap_or_default();
        view! { <StatusBadge label=label /> }.into_any()
    });
    render_column(columns, "active", |value, _| {
        view! { <BoolIcon value=value.and_then(|v| v.as_bool()).unwrap_or(false) /> }.into_any()
    })
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <PageHeading title="Clients" subtitle="People receiving care and their review dates" />
            <DatasetTable
                dataset=Dataset::Clients
                columns=client_columns()
                theme=Theme::preset(ThemePreset::Slate)
                status_label="Care level"
            />
        </div>
    }
}
