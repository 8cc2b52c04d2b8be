use huddle_models::v0;
use huddle_result::Result;
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// Named channel within a workspace
    pub struct Channel {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the workspace this channel belongs to
        pub workspace_id: String,
        /// Channel name
        pub name: String,
    }
);

impl Channel {
    /// Create a new channel
    pub async fn create(db: &Database, workspace_id: &str, name: String) -> Result<Channel> {
        let channel = Channel {
            id: Ulid::new().to_string(),
            workspace_id: workspace_id.to_string(),
            name,
        };

        db.insert_channel(&channel).await?;
        Ok(channel)
    }
}

impl From<Channel> for v0::Channel {
    fn from(value: Channel) -> Self {
        v0::Channel {
            id: value.id,
            workspace_id: value.workspace_id,
            name: value.name,
        }
    }
}
