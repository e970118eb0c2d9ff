use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::VideoRecord;

/// Publish timestamps come with or without fractional seconds.
const PUBLISHED_AT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"];

pub fn parse_published_at(value: &str) -> Option<DateTime<Utc>> {
    PUBLISHED_AT_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|naive| naive.and_utc())
    })
}

/// Keep records published at or after `cutoff`, in their original order.
/// Records without a readable timestamp are dropped.
pub fn filter_recent(records: Vec<VideoRecord>, cutoff: DateTime<Utc>) -> Vec<VideoRecord> {
    records
        .into_iter()
        .filter(|record| {
            let Some(published_at) = record.published_at.as_deref() else {
                tracing::debug!(id = %record.id, "skipping video without publish date");
                return false;
            };
            match parse_published_at(published_at) {
                Some(at) => at >= cutoff,
                None => {
                    tracing::debug!(id = %record.id, published_at, "skipping unparseable publish date");
                    false
                }
            }
        })
        .collect()
}
