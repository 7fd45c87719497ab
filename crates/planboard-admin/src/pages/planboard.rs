//! Visit planboard: every scheduled care visit

use leptos::prelude::*;
use planboard_core::utils::format_minutes;
use planboard_core::{Dataset, EMPTY_CELL};

use super::{DatasetTable, PageHeading};
use crate::components::{render_column, BoolIcon, Column, StatusBadge};

fn visit_columns() -> Vec<Column> {
    let columns = Dataset::Tasks.columns();
    let columns = render_column(columns, "status", |value, _| {
        let label = value.map(|v| v.to_string()).unwrap_or_default();
        view! { <StatusBadge label=label /> }.into_any()
    });
    let columns = render_column(columns, "duration_mins", |value, _| {
        value
            .and_then(|v| v.as_f64())
            .map(format_minutes)
            .unwrap_or_else(|| EMPTY_CELL.to_string())
            .into_any()
    });
    let columns = render_column(columns, "carer", |value, _| match value {
        Some(carer) if !carer.is_empty() => carer.to_string().into_any(),
        _ => view! { <span class="text-orange-400 italic">"Unassigned"</span> }.into_any(),
    });
    render_column(columns, "confirmed", |value, _| {
        view! { <BoolIcon value=value.and_then(|v| v.as_bool()).unwrap_or(false) /> }.into_any()
    })
}

#[component]
pub fn PlanboardPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <PageHeading
                title="Visit Planboard"
                subtitle="Scheduled, completed and missed care visits"
            />
            <DatasetTable dataset=Dataset::Tasks columns=visit_columns() />
        </div>
    }
}
