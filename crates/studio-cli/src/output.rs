//! Terminal output formatting.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use studio_core::analysis::model::{AnalysisRun, AnalysisStats, AnalysisType, KeywordCount};
use studio_core::analytics::model::AnalyticsReport;
use studio_core::channel::model::{Channel, ChannelDetails};
use studio_core::dashboard::model::DashboardOverview;
use studio_core::planning::model::{ChannelStrategy, PlanningResult, VideoConcept};
use studio_core::planning::PlanningOutput;
use studio_core::trends::model::TrendsReport;
use studio_core::viral::model::ViralReport;
use unicode_width::UnicodeWidthStr;

/// Spinner shown while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Compact count: 1.2M, 3.4K, 999.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn heading(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(term_width().min(60)));
}

fn bullets(items: &[String]) {
    for item in items {
        println!("  {} {}", "•".cyan(), item);
    }
}

fn numbered(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
}

pub fn print_trends(report: &TrendsReport) {
    let title_width = term_width().saturating_sub(30).clamp(20, 60);

    for platform in &report.platforms {
        heading(&format!(
            "{}  {} views",
            platform.platform,
            format_count(platform.total_views)
        ));
        if platform.videos.is_empty() {
            println!("{}", "No videos found.".dimmed());
        }
        for video in &platform.videos {
            println!(
                "  {} {:>8}  {}",
                pad_right(&truncate_visual(&video.title, title_width), title_width),
                format_count(video.view_count).yellow(),
                video.channel_name.dimmed()
            );
            if !video.why_trending.is_empty() {
                println!("    {}", video.why_trending.dimmed());
            }
        }
        if !platform.insights.is_empty() {
            println!();
            bullets(&platform.insights);
        }
    }

    if !report.overall_insights.is_empty() {
        heading("Overall insights");
        bullets(&report.overall_insights);
    }
}

pub fn print_viral(report: &ViralReport) {
    heading(&format!("Viral videos ({})", report.videos.len()));
    if report.videos.is_empty() {
        println!("{}", "No videos matched the filters.".dimmed());
    }

    let title_width = term_width().saturating_sub(40).clamp(20, 50);
    for video in &report.videos {
        println!(
            "  {} {:>7}  {:>8} views  {:>7} subs",
            pad_right(&truncate_visual(&video.title, title_width), title_width),
            format!("{:.1}x", video.viral_ratio).green().bold(),
            format_count(video.view_count),
            format_count(video.subscriber_count)
        );
        if !video.why_viral.is_empty() {
            println!("    {}", video.why_viral.dimmed());
        }
        for takeaway in &video.key_takeaways {
            println!("    {} {}", "→".dimmed(), takeaway);
        }
    }

    if !report.insights.is_empty() {
        heading("Insights");
        bullets(&report.insights);
    }
    if !report.content_strategies.is_empty() {
        heading("Content strategies");
        numbered(&report.content_strategies);
    }
}

pub fn print_planning(output: &PlanningOutput) {
    match output {
        PlanningOutput::Full(plan) => print_plan(plan),
        PlanningOutput::Strategy(strategy) => print_strategy(strategy),
        PlanningOutput::Concepts(concepts) => print_concepts(concepts),
    }
}

pub fn print_plan(plan: &PlanningResult) {
    print_strategy(&plan.strategy);

    if !plan.calendar.is_empty() {
        heading("Content calendar");
        for week in &plan.calendar {
            println!("  {} {}", format!("Week {}", week.week).cyan().bold(), week.theme);
            for video in &week.videos {
                println!("    {} {}", "•".dimmed(), video.title);
            }
        }
    }
}

pub fn print_strategy(strategy: &ChannelStrategy) {
    heading("Channel strategy");
    println!("{}: {}", "Concept".bold(), strategy.channel_concept.cyan());
    println!("{}: {}", "Unique value".bold(), strategy.unique_value);
    println!("{}: {}", "Audience".bold(), strategy.target_audience);
    println!("{}: {}", "Posting".bold(), strategy.posting_frequency);

    if !strategy.content_pillars.is_empty() {
        println!();
        println!("{}", "Content pillars".bold());
        bullets(&strategy.content_pillars);
    }
    if !strategy.growth_strategy.is_empty() {
        println!();
        println!("{}", "Growth".bold());
        numbered(&strategy.growth_strategy);
    }
    if !strategy.video_concepts.is_empty() {
        print_concepts(&strategy.video_concepts);
    }
}

pub fn print_concepts(concepts: &[VideoConcept]) {
    heading(&format!("Video concepts ({})", concepts.len()));
    for (i, concept) in concepts.iter().enumerate() {
        println!("{}. {}", i + 1, concept.title.cyan().bold());
        if !concept.hook.is_empty() {
            println!("   {}: {}", "Hook".bold(), concept.hook);
        }
        if !concept.description.is_empty() {
            println!("   {}", concept.description);
        }
        for point in &concept.key_points {
            println!("   {} {}", "•".dimmed(), point);
        }
        if !concept.estimated_length.is_empty() {
            println!("   {}", concept.estimated_length.dimmed());
        }
    }
}

pub fn print_analytics(report: &AnalyticsReport) {
    let m = &report.channel_metrics;
    heading("Channel metrics");
    if !m.date_range.is_empty() {
        println!("{}: {}", "Period".bold(), m.date_range);
    }
    println!("{}: {}", "Views".bold(), format_count(m.total_views));
    println!("{}: {:.1}h", "Watch time".bold(), m.total_watch_time_hours);
    println!("{}: {:.0}s", "Avg. view duration".bold(), m.average_view_duration_seconds);
    let change = format!("{:+}", m.subscriber_change);
    let change = if m.subscriber_change < 0 {
        change.red()
    } else {
        change.green()
    };
    println!("{}: {}", "Subscribers".bold(), change);
    println!("{}: {}", "Videos analyzed".bold(), m.total_videos_analyzed);

    if !report.top_performers.is_empty() {
        heading("Top performers");
        for top in &report.top_performers {
            println!(
                "  {} {} {}",
                top.title.cyan(),
                format!("{}: {}", top.metric_name, top.metric_value).yellow(),
                top.why_successful.dimmed()
            );
        }
    }

    if !report.insights.is_empty() {
        heading("Insights");
        for insight in &report.insights {
            let priority = match insight.priority.as_str() {
                "高" => insight.priority.red().bold(),
                "中" => insight.priority.yellow(),
                "低" => insight.priority.green(),
                other => other.normal(),
            };
            println!("  [{}] {} {}", priority, insight.category.bold(), insight.finding);
            println!("      {} {}", "→".dimmed(), insight.recommendation);
        }
    }

    for (title, items) in [
        ("Content recommendations", &report.content_recommendations),
        ("Optimization tips", &report.optimization_tips),
        ("Next actions", &report.next_actions),
    ] {
        if !items.is_empty() {
            heading(title);
            bullets(items);
        }
    }
}

pub fn print_dashboard(overview: &DashboardOverview) {
    if !overview.quick_metrics.is_empty() {
        heading("Overview");
        let label_width = overview
            .quick_metrics
            .iter()
            .map(|m| UnicodeWidthStr::width(m.label.as_str()))
            .max()
            .unwrap_or(0);
        for metric in &overview.quick_metrics {
            let delta = metric.delta.as_deref().unwrap_or_default();
            println!(
                "  {}  {} {}",
                pad_right(&metric.label, label_width),
                metric.value.cyan().bold(),
                delta.dimmed()
            );
        }
    }

    let trending = &overview.trending;
    for summary in &trending.platform_summaries {
        heading(&format!(
            "{}  {} videos, avg {} views",
            summary.platform,
            summary.total_videos,
            format_count(summary.average_views)
        ));
        for video in &summary.top_videos {
            println!(
                "  {} {}",
                format_count(video.view_count).yellow(),
                truncate_visual(&video.title, 60)
            );
        }
        bullets(&summary.insights);
    }
    if !trending.top_tags.is_empty() {
        println!();
        println!("{} {}", "Tags:".bold(), trending.top_tags.join(" ").dimmed());
    }
    if !trending.overall_insights.is_empty() {
        heading("Trend insights");
        bullets(&trending.overall_insights);
    }

    if let Some(viral) = &overview.viral {
        print_viral(&ViralReport {
            videos: viral.videos.clone(),
            insights: viral.insights.clone(),
            content_strategies: viral.content_strategies.clone(),
        });
    }

    if !overview.recommended_actions.is_empty() {
        heading("Recommended actions");
        numbered(&overview.recommended_actions);
    }
}

pub fn print_channels_table(channels: &[Channel]) {
    if channels.is_empty() {
        println!("{}", "No channels registered.".dimmed());
        return;
    }

    let name_width = term_width().saturating_sub(50).clamp(16, 40);
    println!(
        "{:<10} {} {:>12}  {}",
        "ID",
        pad_right("Name", name_width),
        "Subscribers",
        "URL"
    );
    println!("{}", "─".repeat(term_width().min(100)));

    for channel in channels {
        let subs = channel
            .subscriber_count
            .map(format_count)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {} {:>12}  {}",
            short_id(&channel.id).dimmed(),
            pad_right(&truncate_visual(&channel.channel_name, name_width), name_width),
            subs,
            channel.channel_url.dimmed()
        );
    }

    println!();
    println!("{} channel(s) total", channels.len());
}

pub fn print_channel_details(details: &ChannelDetails) {
    print_stats(&details.stats);
    if !details.top_keywords.is_empty() {
        print_keywords(&details.top_keywords);
    }
    heading("Recent analyses");
    print_runs_table(&details.analyses);
}

pub fn print_stats(stats: &AnalysisStats) {
    heading("Saved analyses");
    println!("{}: {}", "Total".bold(), stats.total_runs);
    println!("{}: {}", "Trends".bold(), stats.trends_runs);
    println!("{}: {}", "Viral".bold(), stats.viral_runs);
    println!("{}: {}", "Viral videos found".bold(), stats.viral_videos);
}

pub fn print_keywords(keywords: &[KeywordCount]) {
    heading("Top keywords");
    for kw in keywords {
        println!("  {} {}", pad_right(&kw.keyword, 20), kw.count.to_string().cyan());
    }
}

pub fn print_runs_table(runs: &[AnalysisRun]) {
    if runs.is_empty() {
        println!("{}", "No saved analyses.".dimmed());
        return;
    }

    let title_width = term_width().saturating_sub(42).clamp(20, 60);
    println!(
        "{:<10} {:<8} {:<17} {}",
        "ID", "Type", "Created", "Summary"
    );
    println!("{}", "─".repeat(term_width().min(100)));

    for run in runs {
        let kind = match run.analysis_type {
            AnalysisType::Trends => run.analysis_type.as_str().green(),
            AnalysisType::Viral => run.analysis_type.as_str().magenta(),
        };
        println!(
            "{:<10} {:<8} {:<17} {}",
            short_id(&run.id).dimmed(),
            kind,
            run.created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            truncate_visual(&run.title(), title_width)
        );
    }
}

pub fn print_run(run: &AnalysisRun) {
    println!("{} {}", run.title().cyan().bold(), format!("({})", run.id).dimmed());
    println!();
    println!("{}: {}", "Type".bold(), run.analysis_type.label());
    println!(
        "{}: {}",
        "Created".bold(),
        run.created_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
    );
    if !run.keywords.is_empty() {
        println!("{}: {}", "Keywords".bold(), run.keywords.join(", "));
    }
    if !run.platforms.is_empty() {
        println!("{}: {}", "Platforms".bold(), run.platforms.join(", "));
    }

    match run.analysis_type {
        AnalysisType::Trends => match serde_json::from_value::<TrendsReport>(run.result.clone()) {
            Ok(report) => print_trends(&report),
            Err(_) => print_raw(&run.result),
        },
        AnalysisType::Viral => match serde_json::from_value::<ViralReport>(run.result.clone()) {
            Ok(report) => print_viral(&report),
            Err(_) => print_raw(&run.result),
        },
    }
}

fn print_raw(value: &serde_json::Value) {
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}

fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width. Japanese titles take two
/// columns per character.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
