//! list command - filter, sort and page through a dataset

use super::CommandContext;
use crate::utils::{format_footer, format_table};
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use planboard_core::filter::parse_date;
use planboard_core::utils::{format_hours, format_minutes};
use planboard_core::{
    Cell, ColumnDescriptor, Dataset, DateRange, PaginationState, PlanboardConfig, Row, RowFilter,
    SortDirection, SortState, TableBody, TableState, EMPTY_CELL,
};
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Dataset name (tasks, clients, rosters, alerts)
    pub dataset: String,

    /// Column key to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page number, 1-indexed; clamped to the last page
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page; must be one of the configured options
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// Exact match on the dataset's status field
    #[arg(long)]
    pub status: Option<String>,

    /// Earliest date, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

type TextColumn = ColumnDescriptor<String>;

#[derive(Serialize)]
struct SortInfo<'a> {
    column: &'a str,
    direction: SortDirection,
}

#[derive(Serialize)]
struct ListResult<'a> {
    dataset: &'a str,
    page: usize,
    page_size: usize,
    total_pages: usize,
    total_items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortInfo<'a>>,
    rows: Vec<&'a Row>,
}

/// One resolved page of a dataset
struct Listing {
    dataset: Dataset,
    rows: Vec<Row>,
    columns: Vec<TextColumn>,
    state: TableState,
    pagination: PaginationState,
}

impl Listing {
    fn build(config: &PlanboardConfig, args: &ListArgs) -> Result<Self> {
        let dataset: Dataset = args.dataset.parse()?;
        let page_size = args
            .page_size
            .unwrap_or(config.pagination.default_page_size);
        config.pagination.check_page_size(page_size)?;

        let rows = build_filter(dataset, args)?.apply(&dataset.load()?);
        let columns = text_columns(dataset);
        let sort = resolve_sort(dataset, &columns, args)?;

        let mut state = TableState::new(Some(page_size)).with_sort(sort);
        state.rows_changed(rows.len());
        state.set_page(args.page);
        let pagination = state
            .pagination_for(rows.len())
            .context("Listing is always paginated")?;

        if args.page != pagination.current_page() {
            tracing::warn!(
                requested = args.page,
                shown = pagination.current_page(),
                "Page out of range"
            );
        }

        Ok(Self {
            dataset,
            rows,
            columns,
            state,
            pagination,
        })
    }

    fn body(&self) -> TableBody<'_> {
        self.state.derive(&self.rows, &self.columns)
    }

    fn to_json(&self) -> Result<String> {
        let result = ListResult {
            dataset: self.dataset.name(),
            page: self.pagination.current_page(),
            page_size: self.pagination.page_size,
            total_pages: self.pagination.total_pages(),
            total_items: self.pagination.total_items,
            sort: self.state.sort.column.as_deref().map(|column| SortInfo {
                column,
                direction: self.state.sort.direction,
            }),
            rows: self.body().rows().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&result)?)
    }

    fn text_lines(&self, color: bool) -> Vec<String> {
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|col| match self.state.sort.direction_for(&col.key) {
                Some(direction) => format!("{} {}", col.label, direction.arrow()),
                None => col.label.clone(),
            })
            .collect();

        let mut lines = match self.body() {
            TableBody::Empty { message, .. } => {
                let mut lines = format_table(&header, &[], color);
                lines.push(message.to_string());
                lines
            }
            body => {
                let cells: Vec<Vec<String>> = body
                    .cells(&self.columns)
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| match cell {
                                Cell::Rendered(text) | Cell::Text(text) => text,
                            })
                            .collect()
                    })
                    .collect();
                format_table(&header, &cells, color)
            }
        };

        lines.push(String::new());
        lines.push(format_footer(&self.pagination));
        lines
    }
}

pub fn execute(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let listing = Listing::build(&ctx.config, args)?;

    if args.json {
        println!("{}", listing.to_json()?);
        return Ok(());
    }

    let title = listing.dataset.title();
    println!("{}\n", if ctx.color { title.bold().to_string() } else { title.to_string() });
    for line in listing.text_lines(ctx.color) {
        println!("{}", line);
    }

    Ok(())
}

fn build_filter(dataset: Dataset, args: &ListArgs) -> Result<RowFilter> {
    let mut filter = RowFilter::new().in_fields(dataset.search_fields().iter().copied());
    if let Some(query) = &args.search {
        filter = filter.search(query.as_str());
    }
    if let Some(status) = &args.status {
        filter = filter.with_exact(dataset.status_field(), status.as_str());
    }

    let mut range = DateRange::new(dataset.date_field());
    if let Some(from) = &args.from {
        range = range.since(parse_date(from).with_context(|| format!("Invalid --from: {}", from))?);
    }
    if let Some(to) = &args.to {
        range = range.until(parse_date(to).with_context(|| format!("Invalid --to: {}", to))?);
    }
    if range.is_active() {
        filter = filter.with_date_range(range);
    }

    Ok(filter)
}

fn resolve_sort(dataset: Dataset, columns: &[TextColumn], args: &ListArgs) -> Result<SortState> {
    let Some(key) = args.sort.as_deref() else {
        return Ok(SortState::new());
    };

    match columns.iter().find(|col| col.key == key) {
        Some(col) if col.sortable => {
            let direction = if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            Ok(SortState::by(key, direction))
        }
        Some(_) => bail!("Column '{}' of {} is not sortable", key, dataset),
        None => {
            let sortable: Vec<&str> = columns
                .iter()
                .filter(|col| col.sortable)
                .map(|col| col.key.as_str())
                .collect();
            bail!(
                "Unknown column '{}' for {}. Sortable columns: {}",
                key,
                dataset,
                sortable.join(", ")
            )
        }
    }
}

/// Dataset columns with terminal-friendly renderers for durations and hours
fn text_columns(dataset: Dataset) -> Vec<TextColumn> {
    let minutes = |value: Option<&planboard_core::Value>, _: &Row| {
        value
            .and_then(|v| v.as_f64())
            .map(format_minutes)
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    };
    let hours = |value: Option<&planboard_core::Value>, _: &Row| {
        value
            .and_then(|v| v.as_f64())
            .map(format_hours)
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    };

    dataset
        .columns()
        .into_iter()
        .map(|col: TextColumn| match col.key.as_str() {
            "duration_mins" => col.with_render(minutes),
            "contracted_hours" | "scheduled_hours" => col.with_render(hours),
            "carer" if dataset == Dataset::Tasks => col.with_render(|value, _| match value {
                Some(carer) if !carer.is_empty() => carer.to_string(),
                _ => "Unassigned".to_string(),
            }),
            _ => col,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dataset: &str) -> ListArgs {
        ListArgs {
            dataset: dataset.to_string(),
            page: 1,
            ..Default::default()
        }
    }

    fn build(args: &ListArgs) -> Result<Listing> {
        Listing::build(&PlanboardConfig::default(), args)
    }

    fn error_of(args: &ListArgs) -> String {
        match build(args) {
            Ok(_) => panic!("expected {:?} to fail", args),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_first_page_of_tasks() {
        let listing = build(&args("tasks")).unwrap();
        assert_eq!(listing.body().rows().len(), 10);
        assert_eq!(listing.pagination.status_text(), "Showing 1-10 of 36");
    }

    #[test]
    fn test_page_is_clamped() {
        let mut a = args("tasks");
        a.page = 99;
        let listing = build(&a).unwrap();
        assert_eq!(listing.pagination.current_page(), 4);
        assert_eq!(listing.body().rows().len(), 6);
    }

    #[test]
    fn test_sort_descending() {
        let mut a = args("rosters");
        a.sort = Some("scheduled_hours".to_string());
        a.desc = true;
        a.page_size = Some(25);
        let listing = build(&a).unwrap();
        let hours: Vec<f64> = listing
            .body()
            .rows()
            .iter()
            .filter_map(|r| r.get("scheduled_hours").and_then(|v| v.as_f64()))
            .collect();
        assert!(hours.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_overtime_flag_is_shown() {
        let mut a = args("rosters");
        a.page_size = Some(25);
        let listing = build(&a).unwrap();
        let col = listing
            .columns
            .iter()
            .position(|c| c.key == "overtime")
            .unwrap();
        let body = listing.body();
        let shown: Vec<String> = body
            .cells(&listing.columns)
            .into_iter()
            .map(|mut row| match row.swap_remove(col) {
                Cell::Rendered(text) | Cell::Text(text) => text,
            })
            .collect();
        let flagged = body
            .rows()
            .iter()
            .zip(&shown)
            .filter(|(row, _)| row.get("overtime").and_then(|v| v.as_bool()) == Some(true))
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>();
        assert!(!flagged.is_empty());
        assert!(flagged.iter().all(|text| *text == "Yes"));
        assert!(shown.iter().all(|text| text != EMPTY_CELL));
    }

    #[test]
    fn test_unknown_and_unsortable_columns() {
        let mut a = args("tasks");
        a.sort = Some("nope".to_string());
        assert!(error_of(&a).contains("Unknown column"));

        a.sort = Some("visit_type".to_string());
        assert!(error_of(&a).contains("not sortable"));
    }

    #[test]
    fn test_page_size_must_be_an_option() {
        let mut a = args("tasks");
        a.page_size = Some(7);
        assert!(build(&a).is_err());
    }

    #[test]
    fn test_no_matches_prints_empty_message() {
        let mut a = args("clients");
        a.search = Some("zzzz-no-such-client".to_string());
        let listing = build(&a).unwrap();
        let lines = listing.text_lines(false);
        assert!(lines.contains(&planboard_core::EMPTY_MESSAGE.to_string()));
        assert_eq!(lines.last().unwrap(), "Showing 0-0 of 0  |  [1]");
    }

    #[test]
    fn test_bad_date_is_an_error() {
        let mut a = args("alerts");
        a.from = Some("03/01/2026".to_string());
        assert!(build(&a).is_err());
    }

    #[test]
    fn test_json_output() {
        let mut a = args("alerts");
        a.sort = Some("severity".to_string());
        let json: serde_json::Value = serde_json::from_str(&build(&a).unwrap().to_json().unwrap()).unwrap();
        assert_eq!(json["dataset"], "alerts");
        assert_eq!(json["total_items"], 20);
        assert_eq!(json["sort"]["direction"], "ascending");
        assert_eq!(json["rows"].as_array().unwrap().len(), 10);
    }
}
