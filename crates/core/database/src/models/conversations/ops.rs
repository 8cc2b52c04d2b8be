use huddle_result::Result;

use crate::Conversation;

mod reference;

#[async_trait]
pub trait AbstractConversations: Sync + Send {
    /// Insert a new conversation into the database
    async fn insert_conversation(&self, conversation: &Conversation) -> Result<()>;

    /// Fetch a conversation by its id
    async fn fetch_conversation(&self, id: &str) -> Result<Conversation>;

    /// Fetch all conversations in a workspace
    async fn fetch_conversations_by_workspace(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<Conversation>>;

    /// Find the conversation between two members, in either orientation
    async fn find_conversation(
        &self,
        workspace_id: &str,
        member_one_id: &str,
        member_two_id: &str,
    ) -> Result<Option<Conversation>>;
}
