//! CLI command definitions and handlers.

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use studio_api::{ApiClient, ApiConfig};
use studio_core::page::PageView;
use studio_core::platform::{Platform, PlatformSelection};
use studio_core::report::MarkdownReport;
use studio_core::Session;

pub mod analytics;
pub mod channel;
pub mod combined;
pub mod dashboard;
pub mod history;
pub mod plan;
pub mod trends;
pub mod viral;

/// Content Studio - YouTube channel planning and research
#[derive(Parser)]
#[command(name = "studio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL
    #[arg(long, global = true, env = "STUDIO_API_URL")]
    pub api_url: Option<String>,

    /// User id sent with every request
    #[arg(long, global = true, env = "STUDIO_USER_ID")]
    pub user_id: Option<String>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a channel plan from a persona
    Plan(plan::PlanArgs),

    /// Analyze trending short videos
    Trends(trends::TrendsArgs),

    /// Find videos that outperform their channel size
    Viral(viral::ViralArgs),

    /// Analyze a YouTube Studio CSV export
    Analytics(analytics::AnalyticsArgs),

    /// Plan from combined trend and viral research
    Combined(combined::CombinedArgs),

    /// Show the aggregated dashboard
    Dashboard(dashboard::DashboardArgs),

    /// Manage registered channels
    #[command(subcommand)]
    Channel(channel::ChannelCommands),

    /// Browse saved analyses
    #[command(subcommand)]
    History(history::HistoryCommands),
}

/// Backend client plus the signed-in user, shared by every command.
pub struct Context {
    pub api: ApiClient,
    pub session: Session,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = ApiConfig::new(self.api_url.as_deref(), self.user_id.as_deref());
        tracing::debug!(base_url = %config.base_url, "Using backend");
        let ctx = Context {
            api: ApiClient::from_config(&config),
            session: config.session(),
        };

        match self.command {
            Commands::Plan(args) => plan::execute(args, &ctx).await,
            Commands::Trends(args) => trends::execute(args, &ctx).await,
            Commands::Viral(args) => viral::execute(args, &ctx).await,
            Commands::Analytics(args) => analytics::execute(args, &ctx).await,
            Commands::Combined(args) => combined::execute(args, &ctx).await,
            Commands::Dashboard(args) => dashboard::execute(args, &ctx).await,
            Commands::Channel(cmd) => channel::execute(cmd, &ctx).await,
            Commands::History(cmd) => history::execute(cmd, &ctx).await,
        }
    }
}

/// Report download flags shared by the analysis commands.
#[derive(Args)]
pub struct ReportArgs {
    /// Download the markdown report after the analysis
    #[arg(long)]
    pub report: bool,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Platform flags; none given means all platforms.
#[derive(Args)]
pub struct PlatformArgs {
    /// Platform to include (YouTube, TikTok, Instagram); repeatable
    #[arg(long = "platform", value_parser = parse_platform)]
    pub platforms: Vec<Platform>,
}

impl PlatformArgs {
    pub fn selection(&self) -> PlatformSelection {
        if self.platforms.is_empty() {
            PlatformSelection::default()
        } else {
            PlatformSelection::only(&self.platforms)
        }
    }
}

fn parse_platform(s: &str) -> std::result::Result<Platform, String> {
    Platform::parse(s).ok_or_else(|| format!("unknown platform '{s}' (YouTube, TikTok, Instagram)"))
}

/// The page's result, or its error message as a command failure.
pub fn ready<'a, R>(view: PageView<'a, R>) -> Result<&'a R> {
    match view {
        PageView::Ready(result) => Ok(result),
        PageView::Error(message) => Err(anyhow::anyhow!("{message}")),
        PageView::Loading | PageView::Empty => Err(anyhow::anyhow!("No result returned")),
    }
}

/// Write a downloaded report into `dir`.
pub fn write_report(report: &MarkdownReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(&report.file_name);
    std::fs::write(&path, &report.body)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} Report saved: {}",
        "✓".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(path)
}

/// Join positional keyword arguments into the comma separated form input.
pub fn keyword_input(words: &[String]) -> String {
    words.join(",")
}
