use huddle_result::Result;

use crate::Channel;

mod reference;

#[async_trait]
pub trait AbstractChannels: Sync + Send {
    /// Insert a new channel into the database
    async fn insert_channel(&self, channel: &Channel) -> Result<()>;

    /// Fetch a channel by its id
    async fn fetch_channel(&self, id: &str) -> Result<Channel>;

    /// Fetch all channels in a workspace
    async fn fetch_channels_by_workspace(&self, workspace_id: &str) -> Result<Vec<Channel>>;
}
