use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use trendscope_core::{
    Region, ReportNotice, TimeSpan, TrendReport, TrendsConfig, YouTubeClient, config,
    format_report_readable, generate_report,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let whole = d.as_secs();
        format!("{}m {}s", whole / 60, whole % 60)
    }
}

/// CLI wrapper for TimeSpan (needed for clap ValueEnum)
#[derive(Clone, Copy, ValueEnum)]
enum CliTimeSpan {
    Week,
    Month,
    SixMonths,
}

impl From<CliTimeSpan> for TimeSpan {
    fn from(cli: CliTimeSpan) -> Self {
        match cli {
            CliTimeSpan::Week => TimeSpan::LastWeek,
            CliTimeSpan::Month => TimeSpan::LastMonth,
            CliTimeSpan::SixMonths => TimeSpan::LastSixMonths,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliRegion {
    /// Brazil (BR)
    Regional,
    /// World (US chart)
    Global,
}

impl From<CliRegion> for Region {
    fn from(cli: CliRegion) -> Self {
        match cli {
            CliRegion::Regional => Region::Regional,
            CliRegion::Global => Region::Global,
        }
    }
}

#[derive(Parser)]
#[command(name = "trendscope")]
#[command(
    about = "Explore the top 10 trending topics on YouTube over different time spans and regions"
)]
struct Cli {
    /// Only count videos published within this window. Defaults to $TRENDSCOPE_TIME_SPAN, then week.
    #[arg(short, long)]
    span: Option<CliTimeSpan>,

    /// Trending chart to read. Defaults to $TRENDSCOPE_REGION, then regional.
    #[arg(short, long)]
    region: Option<CliRegion>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn resolve_span(flag: Option<CliTimeSpan>, env: Option<String>) -> TimeSpan {
    match (flag, env) {
        (Some(span), _) => span.into(),
        (None, Some(label)) => TimeSpan::from_label(&label),
        (None, None) => TimeSpan::default(),
    }
}

fn resolve_region(flag: Option<CliRegion>, env: Option<String>) -> Region {
    match (flag, env) {
        (Some(region), _) => region.into(),
        (None, Some(label)) => Region::from_label(&label).unwrap_or_else(|| {
            tracing::warn!(label, "unrecognized region, using regional");
            Region::default()
        }),
        (None, None) => Region::default(),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn finish_message(report: &TrendReport, elapsed: Duration) -> String {
    let elapsed = style(format!("[{}]", format_duration(elapsed))).dim();
    match &report.notice {
        Some(notice) if notice.is_error() => format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(notice).red(),
            elapsed
        ),
        Some(notice) => format!(
            "{} {} {}",
            style("!").yellow().bold(),
            style(notice).yellow(),
            elapsed
        ),
        None => format!(
            "{} Found {} trending topics {}",
            style("✓").green().bold(),
            report.topics.len(),
            elapsed
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Validate API key early
    let trends_config = match TrendsConfig::from_env() {
        Ok(trends_config) => trends_config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let span = resolve_span(cli.span, std::env::var(config::TIME_SPAN_ENV).ok());
    let region = resolve_region(cli.region, std::env::var(config::REGION_ENV).ok());
    let client = YouTubeClient::new(trends_config);

    if cli.json {
        let report = generate_report(&client, span, region).await;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("trendscope").cyan().bold(),
        style("YouTube Trends Explorer").dim()
    );

    let started = Instant::now();
    let spinner = create_spinner(&format!(
        "Fetching trending videos ({}, past {})...",
        region.label(),
        span.label()
    ));
    let report = generate_report(&client, span, region).await;
    spinner.finish_with_message(finish_message(&report, started.elapsed()));

    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_report_readable(&report);
    println!("{}", readable);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let span = resolve_span(Some(CliTimeSpan::SixMonths), Some("1 Week".to_string()));
        assert_eq!(span, TimeSpan::LastSixMonths);

        let region = resolve_region(Some(CliRegion::Global), Some("brazil".to_string()));
        assert_eq!(region, Region::Global);
    }

    #[test]
    fn test_environment_labels_are_lenient() {
        assert_eq!(resolve_span(None, Some("1 Month".to_string())), TimeSpan::LastMonth);
        assert_eq!(resolve_span(None, Some("fortnight".to_string())), TimeSpan::LastWeek);
        assert_eq!(resolve_region(None, Some("World".to_string())), Region::Global);
        assert_eq!(resolve_region(None, Some("atlantis".to_string())), Region::Regional);
    }

    #[test]
    fn test_defaults_without_flag_or_environment() {
        assert_eq!(resolve_span(None, None), TimeSpan::LastWeek);
        assert_eq!(resolve_region(None, None), Region::Regional);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_millis(119_900)), "1m 59s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "60m 0s");
    }

    fn empty_report(notice: ReportNotice) -> TrendReport {
        TrendReport::empty(TimeSpan::LastWeek, Region::Global, notice, chrono::Utc::now())
    }

    #[test]
    fn test_error_notice_is_shown_in_red() {
        console::set_colors_enabled(true);
        let notice = ReportNotice::TrendingFetchFailed("quota exceeded".to_string());
        let message = finish_message(&empty_report(notice.clone()), Duration::from_secs(1));
        assert!(message.contains(&style(&notice).red().to_string()));
        assert!(
            console::strip_ansi_codes(&message)
                .contains("Error fetching trending videos: quota exceeded")
        );
    }

    #[test]
    fn test_info_notice_is_shown_in_yellow() {
        console::set_colors_enabled(true);
        let notice = ReportNotice::NoVideosInWindow;
        let message = finish_message(&empty_report(notice.clone()), Duration::from_secs(1));
        assert!(message.contains(&style(&notice).yellow().to_string()));
        assert!(!message.contains(&style(&notice).red().to_string()));
    }
}
