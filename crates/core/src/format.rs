use chrono::{DateTime, Local, Utc};

use crate::types::TrendReport;

pub const NO_DATA_MESSAGE: &str = "No data available for the selected time span and region.";

pub fn format_header(report: &TrendReport) -> String {
    format!(
        "Trending Topics for the Past {} ({})",
        report.time_span.label(),
        report.region.label()
    )
}

/// Local wall-clock time the report was generated
pub fn format_generated_at(generated_at: DateTime<Utc>) -> String {
    generated_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Render the report body. `report.notice` is left to the caller, which
/// decides how errors and informational messages are shown.
pub fn format_report_readable(report: &TrendReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", format_header(report)));

    if report.topics.is_empty() {
        output.push_str(NO_DATA_MESSAGE);
        output.push_str("\n\n");
    }

    for (i, topic) in report.topics.iter().enumerate() {
        output.push_str(&format!("## {}. {}\n\n", i + 1, topic.name));
        output.push_str(&format!("{}\n\n", topic.comment));
        if !topic.titles.is_empty() {
            output.push_str("**Trending Video Titles:**\n");
            for title in &topic.titles {
                output.push_str(&format!("- {}\n", title));
            }
            output.push('\n');
        }
        output.push_str("---\n\n");
    }

    output.push_str(&format!(
        "Data last updated: {}\n",
        format_generated_at(report.generated_at)
    ));

    output
}
