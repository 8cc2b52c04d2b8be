use huddle_result::Result;

use crate::{Channel, ReferenceDb};

use super::AbstractChannels;

#[async_trait]
impl AbstractChannels for ReferenceDb {
    /// Insert a new channel into the database
    async fn insert_channel(&self, channel: &Channel) -> Result<()> {
        let mut channels = self.channels.lock().await;
        if channels.contains_key(&channel.id) {
            Err(create_database_error!("insert", "channels"))
        } else {
            channels.insert(channel.id.to_string(), channel.clone());
            Ok(())
        }
    }

    /// Fetch a channel by its id
    async fn fetch_channel(&self, id: &str) -> Result<Channel> {
        let channels = self.channels.lock().await;
        channels
            .get(id)
            .cloned()
            .ok_or_else(|| create_not_found_error!("Channel"))
    }

    /// Fetch all channels in a workspace
    async fn fetch_channels_by_workspace(&self, workspace_id: &str) -> Result<Vec<Channel>> {
        let channels = self.channels.lock().await;
        Ok(channels
            .values()
            .filter(|channel| channel.workspace_id == workspace_id)
            .cloned()
            .collect())
    }
}
