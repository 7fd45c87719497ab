//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{Button, ButtonVariant, NAV_ITEMS};

/// Board whose path shares the first segment of `path`, ignoring case and
/// trailing parts, e.g. `/Rosters/2026-03` points at Rosters
fn closest_board(path: &str) -> Option<(&'static str, &'static str)> {
    let segment = path.trim_start_matches('/').split('/').next()?.to_lowercase();
    if segment.is_empty() {
        return None;
    }
    NAV_ITEMS
        .iter()
        .find(|(href, _, _)| href.trim_start_matches('/') == segment)
        .map(|(href, label, _)| (*href, *label))
}

fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::warn!("Failed to navigate to {}: {:?}", href, e);
        }
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "There is no board at "
                    <code class="text-gray-200">{move || pathname.get()}</code>
                </p>
                <div class="flex items-center justify-center space-x-4">
                    {move || closest_board(&pathname.get()).map(|(href, label)| view! {
                        <Button on_click=Callback::new(move |_| navigate(href))>
                            {format!("Open {}", label)}
                        </Button>
                    })}
                    <Button variant=ButtonVariant::Ghost on_click=Callback::new(|_| navigate("/"))>
                        "Back to Planboard"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_board_by_first_segment() {
        assert_eq!(closest_board("/Rosters/2026-03"), Some(("/rosters", "Rosters")));
        assert_eq!(closest_board("/alerts/"), Some(("/alerts", "Alerts")));
    }

    #[test]
    fn test_no_suggestion_for_unknown_or_root() {
        assert_eq!(closest_board("/carers"), None);
        assert_eq!(closest_board("/"), None);
        assert_eq!(closest_board(""), None);
    }
}
