//! Weekly carer rosters

use leptos::prelude::*;
use planboard_core::utils::format_hours;
use planboard_core::{Dataset, Row, Theme, ThemePreset, EMPTY_CELL};

use super::{DatasetTable, PageHeading};
use crate::components::{render_column, BoolIcon, Column, StatusBadge};

/// Scheduled hours as a whole percentage of contracted hours
pub fn utilisation(row: &Row) -> Option<u32> {
    let contracted = row.get("contracted_hours")?.as_f64()?;
    let scheduled = row.get("scheduled_hours")?.as_f64()?;
    if contracted <= 0.0 {
        return None;
    }
    Some((scheduled / contracted * 100.0).round() as u32)
}

/// Whether the roster week is flagged as running into overtime
pub fn has_overtime(row: &Row) -> bool {
    row.get("overtime").and_then(|v| v.as_bool()).unwrap_or(false)
}

fn hours_cell(value: Option<&planboard_core::Value>) -> AnyView {
    value
        .and_then(|v| v.as_f64())
        .map(format_hours)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
        .into_any()
}

fn roster_columns() -> Vec<Column> {
    let columns = render_column(Dataset::Rosters.columns(), "role", |value, _| {
        let label = value.map(|v| v.to_string()).unwrap_or_default();
        view! { <StatusBadge label=label /> }.into_any()
    });
    let columns = render_column(columns, "contracted_hours", |value, _| hours_cell(value));
    let columns = render_column(columns, "scheduled_hours", |value, _| hours_cell(value));
    let mut columns = render_column(columns, "overtime", |_, row| {
        view! { <BoolIcon value=has_overtime(row) /> }.into_any()
    });

    // Computed from two fields, so there is nothing to sort on
    columns.push(Column::new("utilisation", "Utilisation").with_render(|_, row| {
        match utilisation(row) {
            Some(pct) => {
                let bar = if pct > 100 { "bg-orange-500" } else { "bg-blue-500" };
                view! {
                    <div class="flex items-center space-x-2">
                        <div class="w-20 h-2 bg-gray-700 rounded">
                            <div class=format!("h-2 rounded {}", bar) style=format!("width: {}%", pct.min(100)) />
                        </div>
                        <span class="text-xs">{format!("{}%", pct)}</span>
                    </div>
                }
                .into_any()
            }
            None => EMPTY_CELL.into_any(),
        }
    }));
    columns
}

#[component]
pub fn RostersPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <PageHeading title="Rosters" subtitle="Contracted and scheduled hours by week" />
            <DatasetTable
                dataset=Dataset::Rosters
                columns=roster_columns()
                theme=Theme::preset(ThemePreset::Slate)
                status_label="Role"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overtime_flag_from_fixture() {
        let rows = Dataset::Rosters.load().unwrap();
        assert!(rows.iter().any(has_overtime));
        assert!(!rows.iter().all(has_overtime));
        assert!(!has_overtime(&Row::new().with("overtime", 4.0)));
    }

    #[test]
    fn test_overtime_column_has_renderer() {
        let columns = roster_columns();
        let overtime = columns.iter().find(|c| c.key == "overtime").unwrap();
        assert!(overtime.has_render());
        assert!(overtime.sortable);
    }

    #[test]
    fn test_utilisation() {
        let row = Row::new()
            .with("contracted_hours", 37.5)
            .with("scheduled_hours", 41.0);
        assert_eq!(utilisation(&row), Some(109));
        assert_eq!(utilisation(&Row::new().with("contracted_hours", 0.0).with("scheduled_hours", 4.0)), None);
        assert_eq!(utilisation(&Row::new()), None);
    }
}
