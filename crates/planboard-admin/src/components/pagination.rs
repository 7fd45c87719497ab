//! Pagination strip rendered beneath tables
//!
//! The control only reports requests through its callbacks; the owner
//! decides what page is current.

use leptos::prelude::*;
use planboard_core::theme::TableClasses;
use planboard_core::{PageItem, PaginationState, DEFAULT_PAGE_SIZE_OPTIONS};

use crate::theme::use_theme;

#[component]
pub fn PaginationControl(
    /// Current page, 1-indexed
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Size of the whole filtered set, not the visible slice
    #[prop(into)]
    total_items: Signal<usize>,

    on_page_change: Callback<usize>,

    /// The owner is expected to return to page 1
    on_page_size_change: Callback<usize>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    #[prop(optional)]
    classes: Option<TableClasses>,
) -> impl IntoView {
    let classes = classes.unwrap_or_else(|| use_theme().classes);
    let options = page_size_options
        .filter(|o| !o.is_empty())
        .unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());

    let state = Memo::new(move |_| {
        PaginationState::new(page_size.get())
            .with_total(total_items.get())
            .with_page(current_page.get())
    });

    let page_strip = move || {
        let state = state.get();
        let current = state.current_page();
        state
            .page_window()
            .into_iter()
            .map(|item| match item {
                PageItem::Page(n) => {
                    let active = n == current;
                    view! {
                        <button
                            class=if active { classes.page_button_active } else { classes.page_button }
                            aria-current=active.then_some("page")
                            on:click=move |_| {
                                if !active {
                                    on_page_change.run(n);
                                }
                            }
                        >
                            {n}
                        </button>
                    }
                    .into_any()
                }
                PageItem::Ellipsis => view! { <span class="px-2">"…"</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class=classes.pagination>
            <div class="flex items-center space-x-3">
                <span>{move || state.get().status_text()}</span>
                <label class="flex items-center space-x-2">
                    <span>"Rows per page"</span>
                    <select
                        class="bg-transparent border border-gray-600 rounded px-2 py-1"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                on_page_size_change.run(size);
                            }
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {options
                            .into_iter()
                            .map(|size| view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <nav class="flex items-center space-x-1" aria-label="Pagination">
                <NavButton
                    label="«"
                    title="First page"
                    target=Signal::derive(move || state.get().first_target())
                    on_page_change=on_page_change
                    class=classes.page_button
                />
                <NavButton
                    label="‹"
                    title="Previous page"
                    target=Signal::derive(move || state.get().prev_target())
                    on_page_change=on_page_change
                    class=classes.page_button
                />
                {page_strip}
                <NavButton
                    label="›"
                    title="Next page"
                    target=Signal::derive(move || state.get().next_target())
                    on_page_change=on_page_change
                    class=classes.page_button
                />
                <NavButton
                    label="»"
                    title="Last page"
                    target=Signal::derive(move || state.get().last_target())
                    on_page_change=on_page_change
                    class=classes.page_button
                />
            </nav>
        </div>
    }
}

/// Boundary navigation; disabled when there is no target page
#[component]
fn NavButton(
    label: &'static str,
    title: &'static str,
    #[prop(into)] target: Signal<Option<usize>>,
    on_page_change: Callback<usize>,
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            class=class
            title=title
            disabled=move || target.get().is_none()
            on:click=move |_| {
                if let Some(page) = target.get() {
                    on_page_change.run(page);
                }
            }
        >
            {label}
        </button>
    }
}
