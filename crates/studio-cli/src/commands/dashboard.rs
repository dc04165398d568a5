//! Dashboard overview command.

use anyhow::Result;
use clap::Args;
use studio_core::dashboard::{DashboardForm, DashboardPage};
use studio_core::viral::model::DEFAULT_MIN_VIRAL_RATIO;

use super::{keyword_input, ready, Context, PlatformArgs};
use crate::output;

#[derive(Args)]
pub struct DashboardArgs {
    /// Persona keywords (comma separated or as separate arguments)
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Channel goal, e.g. "登録者1万人"
    #[arg(long)]
    pub goal: Option<String>,

    #[command(flatten)]
    pub platforms: PlatformArgs,

    /// Skip the viral video section
    #[arg(long)]
    pub no_viral: bool,

    /// Minimum views-to-subscribers ratio for the viral section
    #[arg(long, default_value_t = DEFAULT_MIN_VIRAL_RATIO)]
    pub min_ratio: f64,
}

pub async fn execute(args: DashboardArgs, ctx: &Context) -> Result<()> {
    let mut page = DashboardPage::new(DashboardForm {
        keywords: keyword_input(&args.keywords),
        channel_goal: args.goal.unwrap_or_default(),
        platforms: args.platforms.selection(),
        include_viral: !args.no_viral,
        min_viral_ratio: args.min_ratio,
    });

    let pb = output::spinner("Building dashboard...");
    page.submit(&ctx.api, &ctx.session).await;
    pb.finish_and_clear();
    output::print_dashboard(ready(page.state.view())?);

    Ok(())
}
