//! Trendscope Core Library
//!
//! Fetches the YouTube trending chart for a region, keeps videos published
//! inside a time window, and ranks the top categories with example titles.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod recency;
pub mod report;
pub mod selection;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use aggregate::{TOP_CATEGORY_LIMIT, aggregate, count_by_category, top_categories};
pub use config::TrendsConfig;
pub use error::{Result, TrendsError};
pub use format::{format_generated_at, format_header, format_report_readable};
pub use pipeline::{generate_report, generate_report_at};
pub use recency::{filter_recent, parse_published_at};
pub use report::{UNKNOWN_CATEGORY, assemble_topics, topic_comment};
pub use selection::{Region, TimeSpan, resolve_cutoff};
pub use types::{CategoryCount, ReportNotice, TopicSummary, TrendReport, VideoRecord};
pub use youtube::{
    MAX_RESULTS, VideoPlatform, YouTubeClient, fetch_trending, resolve_category_names,
};
