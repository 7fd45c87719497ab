//! Generic sortable, paginated table

use leptos::prelude::*;
use planboard_core::theme::TableClasses;
use planboard_core::{Cell, ColumnDescriptor, Row, TableBody, TableState, Theme, Value};

use super::PaginationControl;
use crate::theme::{use_pagination_config, use_theme};

/// Column whose render function produces a view
pub type Column = ColumnDescriptor<AnyView>;

/// Attach `render` to the column keyed `key`, leaving the rest untouched
pub fn render_column<F>(columns: Vec<Column>, key: &str, render: F) -> Vec<Column>
where
    F: Fn(Option<&Value>, &Row) -> AnyView + Send + Sync + Clone + 'static,
{
    columns
        .into_iter()
        .map(|col| {
            if col.key == key {
                col.with_render(render.clone())
            } else {
                col
            }
        })
        .collect()
}

/// Sortable table over `rows`.
///
/// Sorting and paging are local to the instance. The sort survives new
/// `rows`; the page goes back to 1. Without `page_size` every row renders.
#[component]
pub fn TabularView(
    #[prop(into)] rows: Signal<Vec<Row>>,
    columns: Vec<Column>,
    #[prop(optional)] page_size: Option<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
    #[prop(optional)] theme: Option<Theme>,
) -> impl IntoView {
    let classes = theme.unwrap_or_else(use_theme).classes;
    let options = page_size_options.unwrap_or_else(|| use_pagination_config().page_size_options);
    let paginated = page_size.is_some();
    let state = RwSignal::new(TableState::new(page_size));
    let columns = StoredValue::new(columns);

    // A new filtered set always starts on the first page
    Effect::new(move |_| {
        let total = rows.with(Vec::len);
        state.update(|s| s.rows_changed(total));
    });

    let total = Signal::derive(move || rows.with(Vec::len));
    let pagination = Memo::new(move |_| state.with(|s| s.pagination_for(total.get())));

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|col| header_cell(col, state, classes))
            .collect_view()
    });

    let body = move || {
        rows.with(|rows| {
            state.with(|s| {
                columns.with_value(|cols| match s.derive(rows, cols) {
                    TableBody::Empty { colspan, message } => view! {
                        <TableEmpty message=message colspan=colspan class=classes.empty />
                    }
                    .into_any(),
                    TableBody::Rows(visible) => visible
                        .into_iter()
                        .map(|row| {
                            let cells = cols
                                .iter()
                                .map(|col| {
                                    let content = match col.cell(row) {
                                        Cell::Rendered(view) => view,
                                        Cell::Text(text) => text.into_any(),
                                    };
                                    view! { <td class=classes.cell>{content}</td> }
                                })
                                .collect_view();
                            view! { <tr class=classes.row data-key=row.id()>{cells}</tr> }
                        })
                        .collect_view()
                        .into_any(),
                })
            })
        })
    };

    view! {
        <div class=classes.container>
            <div class="overflow-x-auto">
                <table class=classes.table>
                    <thead>
                        <tr class=classes.header_row>{header}</tr>
                    </thead>
                    <tbody class=classes.body>{body}</tbody>
                </table>
            </div>
            {paginated.then(|| view! {
                <PaginationControl
                    current_page=Signal::derive(move || {
                        pagination.get().map(|p| p.current_page()).unwrap_or(1)
                    })
                    page_size=Signal::derive(move || {
                        pagination.get().map(|p| p.page_size).unwrap_or(1)
                    })
                    total_items=total
                    on_page_change=Callback::new(move |page: usize| {
                        state.update(|s| s.set_page(page))
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        log::debug!("Page size changed to {}", size);
                        state.update(|s| s.set_page_size(size))
                    })
                    page_size_options=options
                    classes=classes
                />
            })}
        </div>
    }
}

fn header_cell(col: &Column, state: RwSignal<TableState>, classes: TableClasses) -> impl IntoView {
    let sortable = col.sortable;
    let key = col.key.clone();
    let click_key = col.key.clone();
    let class = if sortable {
        format!("{} {}", classes.header_cell, classes.sortable_header)
    } else {
        classes.header_cell.to_string()
    };

    let direction = move || state.with(|s| s.sort.direction_for(&key));
    let arrow = direction.clone();

    view! {
        <th
            class=class
            style=col.width.as_ref().map(|w| format!("width: {}", w))
            aria-sort=move || {
                direction().map(|d| match d {
                    planboard_core::SortDirection::Ascending => "ascending",
                    planboard_core::SortDirection::Descending => "descending",
                })
            }
            on:click=move |_| {
                if sortable {
                    state.update(|s| s.sort.toggle(&click_key));
                }
            }
        >
            {col.label.clone()}
            {move || arrow().map(|d| view! { <span class="ml-1">{d.arrow()}</span> })}
        </th>
    }
}

/// Empty state component
#[component]
pub fn TableEmpty(
    message: &'static str,
    colspan: usize,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <tr>
            <td
                colspan=colspan.to_string()
                class=class.unwrap_or("px-4 py-8 text-center text-gray-400")
            >
                {message}
            </td>
        </tr>
    }
}
