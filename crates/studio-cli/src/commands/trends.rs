//! Trend analysis command.

use anyhow::Result;
use clap::Args;
use studio_core::trends::{TrendsForm, TrendsPage};

use super::{keyword_input, ready, write_report, Context, PlatformArgs, ReportArgs};
use crate::output;

#[derive(Args)]
pub struct TrendsArgs {
    /// Persona keywords (comma separated or as separate arguments)
    #[arg(required = true)]
    pub keywords: Vec<String>,

    #[command(flatten)]
    pub platforms: PlatformArgs,

    /// Registered channel (id or name) to attach the saved analysis to
    #[arg(long)]
    pub channel: Option<String>,

    /// Save the analysis to the history
    #[arg(long)]
    pub save: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub async fn execute(args: TrendsArgs, ctx: &Context) -> Result<()> {
    let mut page = TrendsPage::new(TrendsForm {
        keywords: keyword_input(&args.keywords),
        platforms: args.platforms.selection(),
        channel_id: None,
    });

    if let Some(channel) = args.channel.as_deref() {
        page.load_channels(&ctx.api, &ctx.session).await;
        let id = page
            .channels
            .iter()
            .find(|c| c.id == channel || c.channel_name == channel)
            .map_or(channel, |c| c.id.as_str())
            .to_string();
        page.form.channel_id = Some(id);
    }

    let pb = output::spinner("Analyzing trends...");
    page.submit(&ctx.api, &ctx.session).await;
    pb.finish_and_clear();
    output::print_trends(ready(page.state.view())?);

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
