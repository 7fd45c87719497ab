//! Header component with page title and alert bell

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use planboard_core::utils::initials;
use planboard_core::Dataset;

use crate::store::{unacknowledged, use_rows};

/// Title shown for a route path
pub fn page_title(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "" => "Visit Planboard",
        "/clients" => "Clients",
        "/rosters" => "Rosters",
        "/alerts" => "Alerts",
        _ => "Not Found",
    }
}

#[component]
pub fn Header(#[prop(optional)] coordinator: Option<&'static str>) -> impl IntoView {
    let location = use_location();
    let alerts = use_rows(Dataset::Alerts);
    let open_alerts = Memo::new(move |_| alerts.with(|rows| unacknowledged(rows)));
    let coordinator = coordinator.unwrap_or("Care Coordinator");

    view! {
        <header class="h-16 bg-gray-900 border-b border-gray-700 flex items-center justify-between px-6">
            <h1 class="text-lg font-semibold text-white">
                {move || page_title(&location.pathname.get())}
            </h1>

            <div class="flex items-center space-x-4">
                <a
                    href="/alerts"
                    class="relative p-2 text-gray-400 hover:text-white transition-colors rounded-lg hover:bg-gray-800"
                    title="Unacknowledged alerts"
                >
                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d="M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6.002 6.002 0 00-4-5.659V5a2 2 0 10-4 0v.341C7.67 6.165 6 8.388 6 11v3.159c0 .538-.214 1.055-.595 1.436L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9" />
                    </svg>
                    {move || {
                        let count = open_alerts.get();
                        (count > 0).then(|| view! {
                            <span class="absolute -top-1 -right-1 min-w-[1.25rem] h-5 px-1 bg-red-600 text-white text-xs rounded-full flex items-center justify-center">
                                {count}
                            </span>
                        })
                    }}
                </a>

                <div class="flex items-center space-x-3 p-2">
                    <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center">
                        <span class="text-sm font-medium text-white">{initials(coordinator)}</span>
                    </div>
                    <span class="text-sm text-gray-300">{coordinator}</span>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("/"), "Visit Planboard");
        assert_eq!(page_title("/rosters/"), "Rosters");
        assert_eq!(page_title("/payroll"), "Not Found");
    }
}
