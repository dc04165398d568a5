//! Combined trend and viral planning command.

use anyhow::Result;
use clap::Args;
use studio_core::combined::{CombinedForm, CombinedPlanningPage};
use studio_core::trends::TrendsForm;
use studio_core::viral::model::{DEFAULT_MAX_SUBSCRIBERS, DEFAULT_MIN_VIRAL_RATIO};
use studio_core::viral::ViralForm;

use super::{ready, Context, PlatformArgs};
use crate::output;

#[derive(Args)]
pub struct CombinedArgs {
    /// Keywords for the trend analysis (comma separated)
    #[arg(long)]
    pub trend_keywords: String,

    /// Keywords for the viral search (comma separated)
    #[arg(long)]
    pub viral_keywords: String,

    #[command(flatten)]
    pub platforms: PlatformArgs,

    /// Minimum views-to-subscribers ratio
    #[arg(long, default_value_t = DEFAULT_MIN_VIRAL_RATIO)]
    pub min_ratio: f64,

    /// Only channels with at most this many subscribers
    #[arg(long, default_value_t = DEFAULT_MAX_SUBSCRIBERS)]
    pub max_subscribers: u64,

    /// Channel genre
    #[arg(long)]
    pub genre: String,

    /// Channel name
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn execute(args: CombinedArgs, ctx: &Context) -> Result<()> {
    let mut page = CombinedPlanningPage::new(CombinedForm {
        trends: TrendsForm {
            keywords: args.trend_keywords,
            platforms: args.platforms.selection(),
            channel_id: None,
        },
        viral: ViralForm {
            keywords: args.viral_keywords,
            min_viral_ratio: args.min_ratio,
            max_subscribers: args.max_subscribers,
            channel_id: None,
        },
        channel_genre: args.genre,
        channel_name: args.name.unwrap_or_default(),
    });

    let pb = output::spinner("Researching and planning...");
    page.submit(&ctx.api, &ctx.session).await;
    pb.finish_and_clear();
    output::print_plan(ready(page.state.view())?);

    Ok(())
}
