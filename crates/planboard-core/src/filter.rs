//! Host-page row filters
//!
//! Pages narrow their fixture rows before handing them to a table. All
//! matching happens on a row's display text; dates are ISO `YYYY-MM-DD`.

use crate::types::Row;
use crate::{Error, Result};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO calendar date. A trailing time part after `T` or a space
/// (`2026-03-04T09:30`, `2026-03-04 09:30`) is ignored; any other suffix is
/// rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    let invalid = || Error::InvalidDate(s.to_string());
    let (day, rest) = match (s.get(..10), s.get(10..)) {
        (Some(day), Some(rest)) => (day, rest),
        _ => (s, ""),
    };
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(day, DATE_FORMAT).map_err(|_| invalid())
}

/// Inclusive date range on one field. Open bounds are unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub field: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            from: None,
            to: None,
        }
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Rows whose date is missing or unparseable never match an active range
    pub fn contains(&self, row: &Row) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(date) = row
            .get(&self.field)
            .and_then(|v| v.as_str())
            .and_then(|s| parse_date(s).ok())
        else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    query: Option<String>,
    /// Fields searched by the text query; empty means every field
    search_fields: Vec<String>,
    exact: Vec<(String, String)>,
    date_range: Option<DateRange>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring search. Blank queries match everything.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        let query = query.into().trim().to_lowercase();
        self.query = (!query.is_empty()).then_some(query);
        self
    }

    pub fn in_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Field display text must equal `value` exactly
    pub fn with_exact(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.exact.push((field.into(), value.into()));
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.exact.is_empty()
            && self.date_range.as_ref().map_or(true, |r| !r.is_active())
    }

    fn matches_query(&self, row: &Row) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        let hit = |value: &crate::Value| value.to_string().to_lowercase().contains(query);
        if self.search_fields.is_empty() {
            row.fields().any(|(_, value)| hit(value))
        } else {
            self.search_fields
                .iter()
                .filter_map(|field| row.get(field))
                .any(hit)
        }
    }

    fn matches_exact(&self, row: &Row) -> bool {
        self.exact.iter().all(|(field, expected)| {
            row.get(field)
                .map_or(false, |value| value.to_string() == *expected)
        })
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.matches_query(row)
            && self.matches_exact(row)
            && self.date_range.as_ref().map_or(true, |r| r.contains(row))
    }

    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        let filtered: Vec<Row> = rows.iter().filter(|r| self.matches(r)).cloned().collect();
        tracing::debug!(input = rows.len(), output = filtered.len(), "Filtered rows");
        filtered
    }
}

/// Sorted, de-duplicated display values of `field`, for dropdown options
pub fn distinct_values(rows: &[Row], field: &str) -> Vec<String> {
    let values: std::collections::BTreeSet<String> = rows
        .iter()
        .filter_map(|row| row.get(field))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
        .collect();
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::new()
                .with("client", "Nora Kelly")
                .with("status", "Completed")
                .with("visit_date", "2026-03-02"),
            Row::new()
                .with("client", "Owen Price")
                .with("status", "Missed")
                .with("visit_date", "2026-03-05"),
            Row::new()
                .with("client", "Priya Shah")
                .with("status", "Scheduled")
                .with("visit_date", "03/09/2026"),
        ]
    }

    fn clients(rows: &[Row]) -> Vec<&str> {
        rows.iter().filter_map(|r| r.text("client")).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let out = RowFilter::new().search("  KELL ").apply(&rows());
        assert_eq!(clients(&out), vec!["Nora Kelly"]);
    }

    #[test]
    fn test_search_limited_to_fields() {
        let filter = RowFilter::new().search("missed").in_fields(["client"]);
        assert!(filter.apply(&rows()).is_empty());
    }

    #[test]
    fn test_blank_search_matches_all() {
        let filter = RowFilter::new().search("   ");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&rows()).len(), 3);
    }

    #[test]
    fn test_exact_match() {
        let out = RowFilter::new().with_exact("status", "Missed").apply(&rows());
        assert_eq!(clients(&out), vec!["Owen Price"]);
        assert!(RowFilter::new().with_exact("status", "missed").apply(&rows()).is_empty());
    }

    #[test]
    fn test_date_range_inclusive_and_strict_format() {
        let range = DateRange::new("visit_date")
            .since(parse_date("2026-03-02").unwrap())
            .until(parse_date("2026-03-10").unwrap());
        let out = RowFilter::new().with_date_range(range).apply(&rows());
        // The locale-formatted date is excluded rather than guessed at
        assert_eq!(clients(&out), vec!["Nora Kelly", "Owen Price"]);
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2026-03-04T09:30").is_ok());
        assert!(matches!(parse_date("04/03/2026"), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_parse_date_rejects_trailing_garbage() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 4);
        assert_eq!(parse_date("2026-03-04").ok(), day);
        assert_eq!(parse_date("2026-03-04 09:30").ok(), day);
        assert!(matches!(parse_date("2026-03-04xyz"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_date("2026-03-045"), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_distinct_values_sorted() {
        let mut input = rows();
        input.push(Row::new().with("client", "Ravi Patel").with("status", "Missed"));
        input.push(Row::new().with("client", "No Status"));
        assert_eq!(
            distinct_values(&input, "status"),
            vec!["Completed", "Missed", "Scheduled"]
        );
        assert!(distinct_values(&input, "region").is_empty());
    }
}
