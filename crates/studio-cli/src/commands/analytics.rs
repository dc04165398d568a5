//! CSV analytics command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use studio_core::analytics::AnalyticsPage;

use super::{ready, write_report, Context, ReportArgs};
use crate::output;

#[derive(Args)]
pub struct AnalyticsArgs {
    /// CSV exported from YouTube Studio
    pub file: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub async fn execute(args: AnalyticsArgs, ctx: &Context) -> Result<()> {
    let mut page = AnalyticsPage::new();
    page.select_path(&args.file)?;

    let pb = output::spinner("Analyzing CSV...");
    page.submit(&ctx.api, &ctx.session).await;
    pb.finish_and_clear();
    output::print_analytics(ready(page.state.view())?);

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
