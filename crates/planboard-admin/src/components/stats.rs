//! Statistics card component

use leptos::prelude::*;

use super::badge::{tone_class, tone_for};

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub enum StatIcon {
    #[default]
    Bell,
    Warning,
    Clock,
    Cross,
}

impl StatIcon {
    fn path(self) -> &'static str {
        match self {
            Self::Bell => "M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6.002 6.002 0 00-4-5.659V5a2 2 0 10-4 0v.341C7.67 6.165 6 8.388 6 11v3.159c0 .538-.214 1.055-.595 1.436L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9",
            Self::Warning => "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
            Self::Clock => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
            Self::Cross => "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z",
        }
    }
}

/// Icon classes for a card counting rows with `label`, coloured like its badge.
/// Cards without a label count everything and stay blue.
fn icon_class(label: Option<&str>) -> String {
    let tone = label.map(tone_for).unwrap_or("blue");
    format!("p-3 rounded-lg {}", tone_class(tone))
}

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] subtitle: Option<&'static str>,
    /// Status, severity or category label the card counts
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional)] icon: StatIcon,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="flex items-start justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-400">{title}</p>
                    <p class="text-3xl font-bold text-white mt-2">{move || value.get()}</p>
                    {subtitle.map(|s| view! {
                        <p class="text-sm text-gray-500 mt-1">{s}</p>
                    })}
                </div>
                <div class=icon_class(label)>
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon.path() />
                    </svg>
                </div>
            </div>
        </div>
    }
}
