//! Registered channel management page.

pub mod model;

use tracing::{debug, info};

use crate::api::StudioApi;
use crate::error::StudioError;
use crate::messages;
use crate::page::PageState;
use crate::session::Session;
use model::{Channel, ChannelDetails, NewChannel};

/// Fetch stats, analysis history and top keywords of one channel.
///
/// The three requests run concurrently and succeed or fail together: a
/// single failure discards the other results.
pub async fn fetch_details<A: StudioApi>(
    api: &A,
    session: &Session,
    channel_id: &str,
) -> Result<ChannelDetails, StudioError> {
    let (stats, analyses, top_keywords) = tokio::try_join!(
        api.channel_stats(session, channel_id),
        api.channel_analyses(session, channel_id),
        api.channel_top_keywords(session, channel_id),
    )?;

    Ok(ChannelDetails {
        stats,
        analyses: analyses.items,
        top_keywords,
    })
}

#[derive(Debug, Default)]
pub struct ChannelsPage {
    pub channels: Vec<Channel>,
    /// Contents of the "new channel URL" input.
    pub new_channel_url: String,
    pub loading: bool,
    pub submitting: bool,
    pub error: String,
    /// Channel whose detail panel is open.
    pub expanded: Option<String>,
    pub details: PageState<String, ChannelDetails>,
}

impl ChannelsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A: StudioApi>(&mut self, api: &A, session: &Session) {
        self.loading = true;
        self.error.clear();
        match api.list_channels(session).await {
            Ok(channels) => {
                debug!(count = channels.len(), "Loaded channels");
                self.channels = channels;
            }
            Err(e) => self.error = e.to_string(),
        }
        self.loading = false;
    }

    /// Register the URL in `new_channel_url`. The new channel goes to the top
    /// of the list and the input is cleared.
    pub async fn add<A: StudioApi>(&mut self, api: &A, session: &Session) -> Option<&Channel> {
        let url = self.new_channel_url.trim().to_string();
        if url.is_empty() {
            self.error = messages::CHANNEL_URL_REQUIRED.to_string();
            return None;
        }

        self.submitting = true;
        self.error.clear();
        let outcome = api
            .add_channel(session, &NewChannel { channel_url: url })
            .await;
        self.submitting = false;

        match outcome {
            Ok(channel) => {
                info!(channel = %channel.channel_name, "Channel registered");
                self.channels.insert(0, channel);
                self.new_channel_url.clear();
                self.channels.first()
            }
            Err(e) => {
                self.error = e.to_string();
                None
            }
        }
    }

    pub async fn delete<A: StudioApi>(&mut self, api: &A, session: &Session, channel_id: &str) {
        self.error.clear();
        match api.delete_channel(session, channel_id).await {
            Ok(()) => {
                self.channels.retain(|c| c.id != channel_id);
                if self.expanded.as_deref() == Some(channel_id) {
                    self.expanded = None;
                    self.details.reset();
                }
            }
            Err(e) => self.error = e.to_string(),
        }
    }

    /// Open the detail panel of a channel, or close it if it is already
    /// open. Closing issues no request.
    pub async fn toggle_details<A: StudioApi>(
        &mut self,
        api: &A,
        session: &Session,
        channel_id: &str,
    ) {
        if self.expanded.as_deref() == Some(channel_id) {
            self.expanded = None;
            return;
        }

        self.expanded = Some(channel_id.to_string());
        self.details
            .submit(channel_id.to_string(), |id| async move {
                fetch_details(api, session, &id).await
            })
            .await;
    }
}
