use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::selection::{Region, TimeSpan};

/// A trending video as returned by the platform, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: String,
    pub category_id: Option<String>,
    pub title: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category_id: String,
    pub count: usize,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub category_id: String,
    pub name: String,
    pub count: usize,
    pub comment: String,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ReportNotice {
    TrendingFetchFailed(String),
    CategoryLookupFailed(String),
    NoTrendingVideos,
    NoVideosInWindow,
    NoCategoryData,
}

impl ReportNotice {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ReportNotice::TrendingFetchFailed(_) | ReportNotice::CategoryLookupFailed(_)
        )
    }
}

impl fmt::Display for ReportNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportNotice::TrendingFetchFailed(e) => {
                write!(f, "Error fetching trending videos: {}", e)
            }
            ReportNotice::CategoryLookupFailed(e) => {
                write!(f, "Error fetching category details: {}", e)
            }
            ReportNotice::NoTrendingVideos => {
                write!(f, "No trending videos found for the selected region.")
            }
            ReportNotice::NoVideosInWindow => write!(
                f,
                "No trending videos found for the selected time span and region."
            ),
            ReportNotice::NoCategoryData => {
                write!(f, "No category information found for the videos.")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub time_span: TimeSpan,
    pub region: Region,
    pub topics: Vec<TopicSummary>,
    pub notice: Option<ReportNotice>,
    pub generated_at: DateTime<Utc>,
}

impl TrendReport {
    pub fn empty(
        time_span: TimeSpan,
        region: Region,
        notice: ReportNotice,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            time_span,
            region,
            topics: Vec::new(),
            notice: Some(notice),
            generated_at,
        }
    }
}
