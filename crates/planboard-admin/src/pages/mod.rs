//! Page components

mod alerts;
mod clients;
mod not_found;
mod planboard;
mod rosters;

pub use alerts::AlertsPage;
pub use clients::ClientsPage;
pub use not_found::NotFoundPage;
pub use planboard::PlanboardPage;
pub use rosters::RostersPage;

use leptos::prelude::*;
use planboard_core::{Dataset, Row, Theme};

use crate::components::{Column, FilterBar, FilterState, TabularView};
use crate::store::use_rows;
use crate::theme::use_pagination_config;

/// Page title block
#[component]
fn PageHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-white">{title}</h1>
            <p class="text-gray-400 mt-1">{subtitle}</p>
        </div>
    }
}

/// Filter bar plus paginated table over one dataset
#[component]
fn DatasetTable(
    dataset: Dataset,
    columns: Vec<Column>,
    #[prop(optional)] theme: Option<Theme>,
    #[prop(optional)] status_label: Option<&'static str>,
) -> impl IntoView {
    let all_rows = use_rows(dataset);
    let filters = FilterState::new();
    let rows: Memo<Vec<Row>> = Memo::new(move |_| {
        let filter = filters.to_filter(dataset);
        all_rows.with(|rows| filter.apply(rows))
    });
    let page_size = use_pagination_config().default_page_size;

    let table = match theme {
        Some(theme) => view! {
            <TabularView rows=rows columns=columns page_size=page_size theme=theme />
        }
        .into_any(),
        None => view! { <TabularView rows=rows columns=columns page_size=page_size /> }.into_any(),
    };

    view! {
        <div>
            {match status_label {
                Some(label) => view! {
                    <FilterBar state=filters dataset=dataset rows=all_rows status_label=label />
                }
                .into_any(),
                None => view! { <FilterBar state=filters dataset=dataset rows=all_rows /> }.into_any(),
            }}
            {table}
        </div>
    }
}
