//! Saved analysis history commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use studio_core::analysis::model::AnalysisType;
use studio_core::analysis::{AnalysisDetailPage, HistoryPage, DEFAULT_HISTORY_LIMIT};

use super::{ready, Context};
use crate::output;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved analyses, newest first
    List(ListArgs),

    /// Show one saved analysis
    Show(RunIdArgs),

    /// Delete a saved analysis
    Delete(DeleteRunArgs),

    /// Aggregated counts and most used keywords
    Stats,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only this analysis type (trends, viral)
    #[arg(long = "type", value_parser = parse_type)]
    pub analysis_type: Option<AnalysisType>,

    /// Page size
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub limit: u32,

    /// Follow cursors until every page is loaded
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct RunIdArgs {
    /// Analysis ID
    pub analysis_id: String,
}

#[derive(Args)]
pub struct DeleteRunArgs {
    /// Analysis ID
    pub analysis_id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

fn parse_type(s: &str) -> std::result::Result<AnalysisType, String> {
    AnalysisType::from_str(s).ok_or_else(|| format!("unknown analysis type '{s}' (trends, viral)"))
}

pub async fn execute(cmd: HistoryCommands, ctx: &Context) -> Result<()> {
    match cmd {
        HistoryCommands::List(args) => {
            let mut page = HistoryPage::new(args.analysis_type, args.limit);
            page.load(&ctx.api, &ctx.session).await;
            while args.all && page.next_cursor.is_some() && page.error.is_empty() {
                page.load_more(&ctx.api, &ctx.session).await;
            }
            if !page.error.is_empty() {
                anyhow::bail!("{}", page.error);
            }

            output::print_runs_table(&page.runs);
            if page.next_cursor.is_some() {
                println!();
                println!("{}", "More results available; use --all to load everything.".dimmed());
            }
        }

        HistoryCommands::Show(args) => {
            let mut page = AnalysisDetailPage::new(args.analysis_id);
            page.load(&ctx.api, &ctx.session).await;
            output::print_run(ready(page.state.view())?);
        }

        HistoryCommands::Delete(args) => {
            if !args.yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete analysis {}?", args.analysis_id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Cancelled.".dimmed());
                    return Ok(());
                }
            }

            let mut page = HistoryPage::default();
            page.delete_run(&ctx.api, &ctx.session, &args.analysis_id).await;
            if !page.error.is_empty() {
                anyhow::bail!("{}", page.error);
            }
            println!(
                "{} Deleted analysis {}",
                "✓".green().bold(),
                args.analysis_id.dimmed()
            );
        }

        HistoryCommands::Stats => {
            let mut page = HistoryPage::default();
            page.load_stats(&ctx.api, &ctx.session).await;
            if !page.error.is_empty() {
                anyhow::bail!("{}", page.error);
            }
            if let Some(stats) = &page.stats {
                output::print_stats(stats);
            }
            if !page.top_keywords.is_empty() {
                output::print_keywords(&page.top_keywords);
            }
        }
    }

    Ok(())
}
