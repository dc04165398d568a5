//! Channel management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use studio_core::channel::ChannelsPage;

use super::{ready, Context};
use crate::output;

#[derive(Subcommand)]
pub enum ChannelCommands {
    /// List registered channels
    List,

    /// Register a channel by URL
    Add(AddChannelArgs),

    /// Remove a registered channel
    Delete(DeleteChannelArgs),

    /// Show stats, saved analyses and top keywords of a channel
    Show(ShowChannelArgs),
}

#[derive(Args)]
pub struct AddChannelArgs {
    /// Channel URL, e.g. https://www.youtube.com/@handle
    pub url: String,
}

#[derive(Args)]
pub struct DeleteChannelArgs {
    /// Channel ID
    pub channel_id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ShowChannelArgs {
    /// Channel ID
    pub channel_id: String,
}

pub async fn execute(cmd: ChannelCommands, ctx: &Context) -> Result<()> {
    let mut page = ChannelsPage::new();

    match cmd {
        ChannelCommands::List => {
            page.load(&ctx.api, &ctx.session).await;
            if !page.error.is_empty() {
                anyhow::bail!("{}", page.error);
            }
            output::print_channels_table(&page.channels);
        }

        ChannelCommands::Add(args) => {
            page.new_channel_url = args.url;
            let pb = output::spinner("Registering channel...");
            let added = page.add(&ctx.api, &ctx.session).await.cloned();
            pb.finish_and_clear();

            let Some(channel) = added else {
                anyhow::bail!("{}", page.error);
            };
            println!(
                "{} Registered channel: {} ({})",
                "✓".green().bold(),
                channel.channel_name.cyan(),
                channel.id.dimmed()
            );
        }

        ChannelCommands::Delete(args) => {
            if !args.yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete channel {}?", args.channel_id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Cancelled.".dimmed());
                    return Ok(());
                }
            }

            page.delete(&ctx.api, &ctx.session, &args.channel_id).await;
            if !page.error.is_empty() {
                anyhow::bail!("{}", page.error);
            }
            println!(
                "{} Deleted channel {}",
                "✓".green().bold(),
                args.channel_id.dimmed()
            );
        }

        ChannelCommands::Show(args) => {
            let pb = output::spinner("Loading channel details...");
            page.toggle_details(&ctx.api, &ctx.session, &args.channel_id)
                .await;
            pb.finish_and_clear();
            output::print_channel_details(ready(page.details.view())?);
        }
    }

    Ok(())
}
