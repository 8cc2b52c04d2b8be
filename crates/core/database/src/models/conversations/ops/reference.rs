use huddle_result::Result;

use crate::{Conversation, ReferenceDb};

use super::AbstractConversations;

#[async_trait]
impl AbstractConversations for ReferenceDb {
    /// Insert a new conversation into the database
    async fn insert_conversation(&self, conversation: &Conversation) -> Result<()> {
        let mut conversations = self.conversations.lock().await;
        if conversations.contains_key(&conversation.id) {
            Err(create_database_error!("insert", "conversations"))
        } else {
            conversations.insert(conversation.id.to_string(), conversation.clone());
            Ok(())
        }
    }

    /// Fetch a conversation by its id
    async fn fetch_conversation(&self, id: &str) -> Result<Conversation> {
        let conversations = self.conversations.lock().await;
        conversations
            .get(id)
            .cloned()
            .ok_or_else(|| create_not_found_error!("Conversation"))
    }

    /// Fetch all conversations in a workspace
    async fn fetch_conversations_by_workspace(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<Conversation>> {
        let conversations = self.conversations.lock().await;
        Ok(conversations
            .values()
            .filter(|conversation| conversation.workspace_id == workspace_id)
            .cloned()
            .collect())
    }

    /// Find the conversation between two members, in either orientation
    async fn find_conversation(
        &self,
        workspace_id: &str,
        member_one_id: &str,
        member_two_id: &str,
    ) -> Result<Option<Conversation>> {
        let conversations = self.conversations.lock().await;
        Ok(conversations
            .values()
            .find(|conversation| {
                conversation.workspace_id == workspace_id
                    && ((conversation.member_one_id == member_one_id
                        && conversation.member_two_id == member_two_id)
                        || (conversation.member_one_id == member_two_id
                            && conversation.member_two_id == member_one_id))
            })
            .cloned())
    }
}
