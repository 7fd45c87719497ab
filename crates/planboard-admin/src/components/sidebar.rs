//! Sidebar navigation component

use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub(crate) const NAV_ITEMS: [(&str, &str, &str); 4] = [
    (
        "/",
        "Planboard",
        "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
    ),
    (
        "/clients",
        "Clients",
        "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
    ),
    (
        "/rosters",
        "Rosters",
        "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-6 9l2 2 4-4",
    ),
    (
        "/alerts",
        "Alerts",
        "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
    ),
];

fn is_active(current: &str, path: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current.starts_with(path)
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="w-64 bg-gray-900 border-r border-gray-700 flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-gray-700">
                <a href="/" class="flex items-center space-x-3">
                    <svg class="w-8 h-8 text-blue-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d="M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z" />
                    </svg>
                    <span class="text-xl font-bold text-white">"Planboard"</span>
                </a>
            </div>

            <nav class="flex-1 px-4 py-6 space-y-2">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label, icon)| view! {
                        <NavItem
                            href=href
                            icon=icon
                            label=label
                            active=Signal::derive(move || is_active(&pathname.get(), href))
                        />
                    })
                    .collect_view()}
            </nav>

            <div class="px-6 py-4 border-t border-gray-700">
                <div class="text-xs text-gray-500">
                    <div>{format!("Planboard v{}", planboard_core::VERSION)}</div>
                    <div class="mt-1">"Care scheduling admin"</div>
                </div>
            </div>
        </aside>
    }
}

#[component]
fn NavItem(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || {
                let base = "flex items-center px-4 py-3 rounded-lg transition-colors";
                if active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:bg-gray-800 hover:text-white", base)
                }
            }
        >
            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon />
            </svg>
            <span class="ml-3">{label}</span>
        </a>
    }
}
