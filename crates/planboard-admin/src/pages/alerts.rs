//! Alerts raised against visits and carers

use leptos::prelude::*;
use planboard_core::{Dataset, Row, Theme, ThemePreset};

use super::{DatasetTable, PageHeading};
use crate::components::{
    render_column, BoolIcon, Button, ButtonVariant, Column, StatCard, StatIcon, StatusBadge,
};
use crate::store::{acknowledge, unacknowledged, use_rows};

fn count_where(rows: &[Row], field: &str, value: &str) -> usize {
    rows.iter().filter(|row| row.text(field) == Some(value)).count()
}

/// Id of an alert that still needs acknowledging
fn pending_id(row: &Row) -> Option<String> {
    let done = row.get("acknowledged").and_then(|v| v.as_bool()).unwrap_or(false);
    if done {
        None
    } else {
        row.id()
    }
}

fn alert_columns(alerts: RwSignal<Vec<Row>>) -> Vec<Column> {
    let columns = render_column(Dataset::Alerts.columns(), "severity", |value, _| {
        let label = value.map(|v| v.to_string()).unwrap_or_default();
        view! { <StatusBadge label=label /> }.into_any()
    });
    let columns = render_column(columns, "category", |value, _| {
        let label = value.map(|v| v.to_string()).unwrap_or_default();
        view! { <StatusBadge label=label /> }.into_any()
    });
    let mut columns = render_column(columns, "acknowledged", |value, _| {
        view! { <BoolIcon value=value.and_then(|v| v.as_bool()).unwrap_or(false) /> }.into_any()
    });

    columns.push(Column::new("actions", "").with_width("8rem").with_render(move |_, row| {
        match pending_id(row) {
            Some(id) => {
                let on_click = Callback::new(move |_| {
                    alerts.update(|rows| {
                        if acknowledge(rows, &id) {
                            log::info!("Acknowledged alert {}", id);
                        }
                    })
                });
                view! {
                    <Button variant=ButtonVariant::Primary compact=true title="Mark as reviewed" on_click=on_click>
                        "Acknowledge"
                    </Button>
                }
                .into_any()
            }
            None => ().into_any(),
        }
    }));
    columns
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let alerts = use_rows(Dataset::Alerts);

    let total = Signal::derive(move || alerts.with(|rows| rows.len().to_string()));
    let critical = Signal::derive(move || {
        alerts.with(|rows| count_where(rows, "severity", "Critical").to_string())
    });
    let open = Signal::derive(move || alerts.with(|rows| unacknowledged(rows).to_string()));
    let missed = Signal::derive(move || {
        alerts.with(|rows| count_where(rows, "category", "Missed Visit").to_string())
    });

    view! {
        <div class="space-y-6">
            <PageHeading title="Alerts" subtitle="Incidents and exceptions needing a coordinator" />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Total Alerts" value=total />
                <StatCard title="Critical" value=critical label="Critical" icon=StatIcon::Warning />
                <StatCard
                    title="Unacknowledged"
                    value=open
                    subtitle="Awaiting review"
                    label="High"
                    icon=StatIcon::Clock
                />
                <StatCard title="Missed Visits" value=missed label="Missed Visit" icon=StatIcon::Cross />
            </div>

            <DatasetTable
                dataset=Dataset::Alerts
                columns=alert_columns(alerts)
                theme=Theme::preset(ThemePreset::Modern)
                status_label="Severity"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_where() {
        let rows = vec![
            Row::new().with("severity", "Critical"),
            Row::new().with("severity", "Low"),
            Row::new().with("severity", "Critical"),
        ];
        assert_eq!(count_where(&rows, "severity", "Critical"), 2);
        assert_eq!(count_where(&rows, "category", "Critical"), 0);
    }

    #[test]
    fn test_only_open_alerts_get_an_action() {
        let open = Row::new().with("id", "AL-1").with("acknowledged", false);
        let done = Row::new().with("id", "AL-2").with("acknowledged", true);
        assert_eq!(pending_id(&open).as_deref(), Some("AL-1"));
        assert_eq!(pending_id(&done), None);
        assert_eq!(pending_id(&Row::new().with("id", "AL-3")).as_deref(), Some("AL-3"));
    }
}
