//! Channel planning command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use studio_core::planning::model::DEFAULT_VIDEO_COUNT;
use studio_core::planning::{PlanningForm, PlanningMode, PlanningPage};

use super::{ready, write_report, Context, ReportArgs};
use crate::output;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PlanMode {
    /// Strategy plus a four-week calendar
    Full,
    /// Channel strategy only
    Strategy,
    /// Video concepts only
    Concepts,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Channel genre
    #[arg(long)]
    pub genre: String,

    /// Channel name
    #[arg(long)]
    pub name: Option<String>,

    /// Target age range, e.g. "20-30代"
    #[arg(long)]
    pub age_range: String,

    /// Target gender
    #[arg(long)]
    pub gender: String,

    /// Interests (comma separated)
    #[arg(long)]
    pub interests: String,

    /// Pain points (comma separated)
    #[arg(long)]
    pub pain_points: String,

    /// Goals (comma separated)
    #[arg(long)]
    pub goals: String,

    /// Preferred content style
    #[arg(long)]
    pub preferences: String,

    /// What to generate
    #[arg(long, value_enum, default_value = "full")]
    pub mode: PlanMode,

    /// Number of video concepts (concepts mode, 1-20)
    #[arg(long, default_value_t = DEFAULT_VIDEO_COUNT)]
    pub count: u8,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub async fn execute(args: PlanArgs, ctx: &Context) -> Result<()> {
    let mode = match args.mode {
        PlanMode::Full => PlanningMode::FullPlan,
        PlanMode::Strategy => PlanningMode::Strategy,
        PlanMode::Concepts => PlanningMode::VideoConcepts { count: args.count },
    };
    let form = PlanningForm {
        channel_name: args.name.unwrap_or_default(),
        channel_genre: args.genre,
        age_range: args.age_range,
        gender: args.gender,
        interests: args.interests,
        pain_points: args.pain_points,
        goals: args.goals,
        content_preferences: args.preferences,
    };
    let mut page = PlanningPage::new(form, mode);

    let pb = output::spinner("Generating plan...");
    page.submit(&ctx.api, &ctx.session).await;
    pb.finish_and_clear();
    output::print_planning(ready(page.state.view())?);

    if args.report.report {
        let pb = output::spinner("Generating report...");
        let report = page.download_report(&ctx.api, &ctx.session).await;
        pb.finish_and_clear();
        match report {
            Some(report) => {
                write_report(&report, &args.report.output_dir)?;
            }
            None => output::failure(page.download.error()),
        }
    }

    Ok(())
}
