use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSpan {
    #[default]
    LastWeek,
    LastMonth,
    LastSixMonths,
}

impl TimeSpan {
    pub fn days(&self) -> i64 {
        match self {
            TimeSpan::LastWeek => 7,
            TimeSpan::LastMonth => 30,
            TimeSpan::LastSixMonths => 180,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSpan::LastWeek => "1 Week",
            TimeSpan::LastMonth => "1 Month",
            TimeSpan::LastSixMonths => "6 Months",
        }
    }

    /// Earliest publish time a video may have to count for this span.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }

    /// Parse a free-form label. Anything unrecognized falls back to the last week.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "1 week" | "week" | "last-week" => TimeSpan::LastWeek,
            "1 month" | "month" | "last-month" => TimeSpan::LastMonth,
            "6 months" | "six-months" | "last-six-months" => TimeSpan::LastSixMonths,
            other => {
                tracing::warn!(label = other, "unrecognized time span, using 1 Week");
                TimeSpan::LastWeek
            }
        }
    }
}

/// Cutoff for `span` measured from the current UTC time.
pub fn resolve_cutoff(span: TimeSpan) -> DateTime<Utc> {
    span.cutoff(Utc::now())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Regional,
    Global,
}

impl Region {
    pub fn region_code(&self) -> &'static str {
        match self {
            Region::Regional => "BR",
            Region::Global => "US",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Regional => "Brazil",
            Region::Global => "World",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "regional" | "brazil" | "br" => Some(Region::Regional),
            "global" | "world" | "us" => Some(Region::Global),
            _ => None,
        }
    }
}
