use chrono::{DateTime, Utc};

use crate::{
    aggregate::aggregate,
    recency::filter_recent,
    report::assemble_topics,
    selection::{Region, TimeSpan},
    types::{ReportNotice, TrendReport},
    youtube::{VideoPlatform, fetch_trending, resolve_category_names},
};

/// Build the trending-topics report for `span` and `region` as of now.
pub async fn generate_report(
    platform: &dyn VideoPlatform,
    span: TimeSpan,
    region: Region,
) -> TrendReport {
    generate_report_at(platform, span, region, Utc::now()).await
}

/// Build the report with an explicit clock. Failures never escape: they end
/// the run with no topics and a notice describing what happened.
#[tracing::instrument(skip_all, fields(region = region.region_code(), days = span.days()))]
pub async fn generate_report_at(
    platform: &dyn VideoPlatform,
    span: TimeSpan,
    region: Region,
    now: DateTime<Utc>,
) -> TrendReport {
    let empty = |notice: ReportNotice| {
        if notice.is_error() {
            tracing::error!(%notice, "report aborted");
        } else {
            tracing::info!(%notice, "report is empty");
        }
        TrendReport::empty(span, region, notice, now)
    };

    let cutoff = span.cutoff(now);

    let videos = match fetch_trending(platform, region).await {
        Ok(videos) => videos,
        Err(e) => return empty(ReportNotice::TrendingFetchFailed(e.to_string())),
    };
    if videos.is_empty() {
        return empty(ReportNotice::NoTrendingVideos);
    }

    let recent = filter_recent(videos, cutoff);
    tracing::debug!(kept = recent.len(), %cutoff, "filtered by publish date");
    if recent.is_empty() {
        return empty(ReportNotice::NoVideosInWindow);
    }

    let top = aggregate(&recent);
    if top.is_empty() {
        return empty(ReportNotice::NoCategoryData);
    }

    let ids: Vec<String> = top.iter().map(|c| c.category_id.clone()).collect();
    let names = match resolve_category_names(platform, &ids).await {
        Ok(names) => names,
        Err(e) => return empty(ReportNotice::CategoryLookupFailed(e.to_string())),
    };

    TrendReport {
        time_span: span,
        region,
        topics: assemble_topics(top, &names),
        notice: None,
        generated_at: now,
    }
}
