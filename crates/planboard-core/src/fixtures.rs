//! Built-in mock datasets
//!
//! Each dataset is a JSON array of flat objects embedded at compile time.

use crate::types::{ColumnDescriptor, Row};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Tasks,
    Clients,
    Rosters,
    Alerts,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [Self::Tasks, Self::Clients, Self::Rosters, Self::Alerts];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Clients => "clients",
            Self::Rosters => "rosters",
            Self::Alerts => "alerts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Tasks => "Care Visits",
            Self::Clients => "Clients",
            Self::Rosters => "Rosters",
            Self::Alerts => "Alerts",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Self::Tasks => include_str!("../data/tasks.json"),
            Self::Clients => include_str!("../data/clients.json"),
            Self::Rosters => include_str!("../data/rosters.json"),
            Self::Alerts => include_str!("../data/alerts.json"),
        }
    }

    pub fn load(&self) -> Result<Vec<Row>> {
        let rows: Vec<Row> = serde_json::from_str(self.source()).map_err(|source| {
            Error::Fixture {
                name: self.name(),
                source,
            }
        })?;
        tracing::debug!(dataset = self.name(), rows = rows.len(), "Loaded fixture");
        Ok(rows)
    }

    /// Fields covered by free-text search
    pub fn search_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Tasks => &["id", "client", "carer", "visit_type", "region"],
            Self::Clients => &["id", "name", "postcode", "key_worker", "region"],
            Self::Rosters => &["id", "carer", "role", "team"],
            Self::Alerts => &["id", "category", "client", "carer", "message"],
        }
    }

    /// Field used by the status dropdown / `--status`
    pub fn status_field(&self) -> &'static str {
        match self {
            Self::Tasks => "status",
            Self::Clients => "care_level",
            Self::Rosters => "role",
            Self::Alerts => "severity",
        }
    }

    /// Field used by date-range filters
    pub fn date_field(&self) -> &'static str {
        match self {
            Self::Tasks => "visit_date",
            Self::Clients => "last_review",
            Self::Rosters => "week_start",
            Self::Alerts => "raised_at",
        }
    }

    /// Plain columns without render functions
    pub fn columns<V>(&self) -> Vec<ColumnDescriptor<V>> {
        fn col<V>(key: &str, label: &str) -> ColumnDescriptor<V> {
            ColumnDescriptor::new(key, label)
        }
        match self {
            Self::Tasks => vec![
                col("id", "Visit").sortable().with_width("6rem"),
                col("client", "Client").sortable(),
                col("carer", "Carer").sortable(),
                col("visit_date", "Date").sortable(),
                col("start_time", "Start").sortable(),
                col("duration_mins", "Mins").sortable(),
                col("visit_type", "Type"),
                col("status", "Status").sortable(),
                col("confirmed", "Confirmed"),
            ],
            Self::Clients => vec![
                col("id", "ID").sortable().with_width("6rem"),
                col("name", "Name").sortable(),
                col("postcode", "Postcode"),
                col("care_level", "Care Level").sortable(),
                col("funding", "Funding").sortable(),
                col("visits_per_week", "Visits/Wk").sortable(),
                col("key_worker", "Key Worker").sortable(),
                col("last_review", "Last Review").sortable(),
                col("active", "Active"),
            ],
            Self::Rosters => vec![
                col("carer", "Carer").sortable(),
                col("role", "Role").sortable(),
                col("team", "Team").sortable(),
                col("week_start", "Week").sortable(),
                col("contracted_hours", "Contracted").sortable(),
                col("scheduled_hours", "Scheduled").sortable(),
                col("visits", "Visits").sortable(),
                col("overtime", "Overtime").sortable(),
            ],
            Self::Alerts => vec![
                col("id", "Alert").sortable().with_width("6rem"),
                col("severity", "Severity").sortable(),
                col("category", "Category").sortable(),
                col("client", "Client").sortable(),
                col("raised_at", "Raised").sortable(),
                col("message", "Message"),
                col("acknowledged", "Ack"),
            ],
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownDataset(s.to_string()))
    }
}
