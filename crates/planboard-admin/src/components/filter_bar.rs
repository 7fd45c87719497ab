//! Search, status and date controls shown above a page's table

use leptos::prelude::*;
use planboard_core::filter::{distinct_values, parse_date};
use planboard_core::{Dataset, DateRange, Row, RowFilter};

/// Raw control values; turned into a [`RowFilter`] on demand
#[derive(Clone, Copy)]
pub struct FilterState {
    pub query: RwSignal<String>,
    pub status: RwSignal<String>,
    pub from: RwSignal<String>,
    pub to: RwSignal<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            from: RwSignal::new(String::new()),
            to: RwSignal::new(String::new()),
        }
    }

    pub fn clear(&self) {
        self.query.set(String::new());
        self.status.set(String::new());
        self.from.set(String::new());
        self.to.set(String::new());
    }

    pub fn is_clear(&self) -> bool {
        self.query.with(String::is_empty)
            && self.status.with(String::is_empty)
            && self.from.with(String::is_empty)
            && self.to.with(String::is_empty)
    }

    /// Build the filter for `dataset`. Tracks every control signal.
    pub fn to_filter(&self, dataset: Dataset) -> RowFilter {
        build_filter(
            dataset,
            &self.query.get(),
            &self.status.get(),
            &self.from.get(),
            &self.to.get(),
        )
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

fn build_filter(dataset: Dataset, query: &str, status: &str, from: &str, to: &str) -> RowFilter {
    let mut filter = RowFilter::new()
        .search(query)
        .in_fields(dataset.search_fields().iter().copied());

    if !status.is_empty() {
        filter = filter.with_exact(dataset.status_field(), status);
    }

    let mut range = DateRange::new(dataset.date_field());
    for (bound, raw) in [("from", from), ("to", to)] {
        if raw.is_empty() {
            continue;
        }
        match parse_date(raw) {
            Ok(date) if bound == "from" => range = range.since(date),
            Ok(date) => range = range.until(date),
            Err(e) => log::warn!("Ignoring {} date: {}", bound, e),
        }
    }
    if range.is_active() {
        filter = filter.with_date_range(range);
    }

    filter
}

#[component]
pub fn FilterBar(
    state: FilterState,
    dataset: Dataset,
    /// Unfiltered rows, used for the status options
    #[prop(into)]
    rows: Signal<Vec<Row>>,
    #[prop(optional)] status_label: Option<&'static str>,
) -> impl IntoView {
    let status_options = Memo::new(move |_| rows.with(|rows| distinct_values(rows, dataset.status_field())));
    let input_class = "bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

    view! {
        <div class="flex flex-wrap items-end gap-3 mb-4">
            <div class="flex-1 min-w-[12rem]">
                <input
                    type="search"
                    placeholder=format!("Search {}...", dataset.title().to_lowercase())
                    class=format!("w-full {}", input_class)
                    prop:value=move || state.query.get()
                    on:input=move |ev| state.query.set(event_target_value(&ev))
                />
            </div>
            <label class="flex flex-col text-xs text-gray-400">
                {status_label.unwrap_or("Status")}
                <select
                    class=input_class
                    prop:value=move || state.status.get()
                    on:change=move |ev| state.status.set(event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    {move || {
                        status_options
                            .get()
                            .into_iter()
                            .map(|value| { let label = value.clone(); view! { <option value=value>{label}</option> } })
                            .collect_view()
                    }}
                </select>
            </label>
            <label class="flex flex-col text-xs text-gray-400">
                "From"
                <input
                    type="date"
                    class=input_class
                    prop:value=move || state.from.get()
                    on:change=move |ev| state.from.set(event_target_value(&ev))
                />
            </label>
            <label class="flex flex-col text-xs text-gray-400">
                "To"
                <input
                    type="date"
                    class=input_class
                    prop:value=move || state.to.get()
                    on:change=move |ev| state.to.set(event_target_value(&ev))
                />
            </label>
            <button
                class="px-3 py-2 text-sm text-gray-300 hover:text-white disabled:opacity-50"
                disabled=move || state.is_clear()
                on:click=move |_| state.clear()
            >
                "Clear"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: &str, date: &str) -> Row {
        Row::new()
            .with("client", "Nora Kelly")
            .with("status", status)
            .with("visit_date", date)
    }

    #[test]
    fn test_build_filter_empty_controls() {
        assert!(build_filter(Dataset::Tasks, "", "", "", "").is_empty());
    }

    #[test]
    fn test_build_filter_status_and_range() {
        let filter = build_filter(Dataset::Tasks, "", "Missed", "2026-03-01", "2026-03-31");
        assert!(filter.matches(&task("Missed", "2026-03-10")));
        assert!(!filter.matches(&task("Completed", "2026-03-10")));
        assert!(!filter.matches(&task("Missed", "2026-04-01")));
    }

    #[test]
    fn test_build_filter_ignores_bad_date() {
        let filter = build_filter(Dataset::Tasks, "", "", "not a date", "");
        assert!(filter.is_empty());
    }
}
