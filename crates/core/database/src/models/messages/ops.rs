use huddle_result::Result;

use crate::{Message, MessageQuery, PartialMessage};

mod reference;

#[async_trait]
pub trait AbstractMessages: Sync + Send {
    /// Insert a new message into the database
    async fn insert_message(&self, message: &Message) -> Result<()>;

    /// Fetch a message by its id
    async fn fetch_message(&self, id: &str) -> Result<Message>;

    /// Fetch messages at one placement, newest first
    ///
    /// `before` is an exclusive id cursor, `limit` caps the page size.
    async fn fetch_messages(
        &self,
        query: &MessageQuery,
        before: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Message>>;

    /// Fetch a message's thread replies, oldest first
    async fn fetch_messages_by_parent(&self, parent_message_id: &str) -> Result<Vec<Message>>;

    /// Fetch every message in a workspace
    async fn fetch_messages_by_workspace(&self, workspace_id: &str) -> Result<Vec<Message>>;

    /// Update a message with a partial set of fields
    async fn update_message(&self, id: &str, message: &PartialMessage) -> Result<()>;

    /// Delete a message by its id
    async fn delete_message(&self, id: &str) -> Result<()>;
}
