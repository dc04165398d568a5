//! Viral video finder command.

use anyhow::Result;
use clap::Args;
use studio_core::viral::model::{DEFAULT_MAX_SUBSCRIBERS, DEFAULT_MIN_VIRAL_RATIO};
use studio_core::viral::{ViralForm, ViralPage};

use super::{keyword_input, ready, write_report, Context, ReportArgs};
use crate::output;

#[derive(Args)]
pub struct ViralArgs {
    /// Search keywords (comma separated or as separate arguments)
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Minimum views-to-subscribers ratio
    #[arg(long, default_value_t = DEFAULT_MIN_VIRAL_RATIO)]
    pub min_ratio: f64,

    /// Only channels with at most this many subscribers
    #[arg(long, default_value_t = DEFAULT_MAX_SUBSCRIBERS)]
    pub max_subscribers: u64,

    /// Registered channel id to attach the saved analysis to
    #[arg(long)]
    pub channel: Option<String>,

    /// Save the analysis to the history
    #[arg(long)]
    pub save: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub async fn execute(args: ViralArgs, ctx: &Context) -> Result<()> {
    let mut page = ViralPage::new(ViralForm {
        keywords: keyword_input(&args.keywords),
        min_viral_ratio: args.min_ratio,
        max_subscribers: args.max_subscribers,
        channel_id: args.channel,
    });

    let pb = output::spinner("Searching viral videos...");
    page.submit(&ctx.api, &ctx.session).await;
    pb.finish_and_clear();
    output::print_viral(ready(page.state.view())?);

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

    if args.save {
        page.save_analysis(&ctx.api, &ctx.session).await;
        if page.save.error().is_empty() {
            output::success(page.save.message());
        } else {
            output::failure(page.save.error());
        }
    }

    Ok(())
}
