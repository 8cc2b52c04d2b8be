use huddle_result::Result;

use crate::{Message, MessageQuery, PartialMessage, ReferenceDb};

use super::AbstractMessages;

#[async_trait]
impl AbstractMessages for ReferenceDb {
    /// Insert a new message into the database
    async fn insert_message(&self, message: &Message) -> Result<()> {
        let mut messages = self.messages.lock().await;
        if messages.contains_key(&message.id) {
            Err(create_database_error!("insert", "messages"))
        } else {
            messages.insert(message.id.to_string(), message.clone());
            Ok(())
        }
    }

    /// Fetch a message by its id
    async fn fetch_message(&self, id: &str) -> Result<Message> {
        let messages = self.messages.lock().await;
        messages
            .get(id)
            .cloned()
            .ok_or_else(|| create_not_found_error!("Message"))
    }

    /// Fetch messages at one placement, newest first
    async fn fetch_messages(
        &self,
        query: &MessageQuery,
        before: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Message>> {
        let messages = self.messages.lock().await;
        let mut rows: Vec<Message> = messages
            .values()
            .filter(|message| {
                message.channel_id == query.channel_id
                    && message.parent_message_id == query.parent_message_id
                    && message.conversation_id == query.conversation_id
            })
            .filter(|message| before.map(|cursor| message.id.as_str() < cursor).unwrap_or(true))
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.id.cmp(&a.id));

        if let Some(limit) = limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    /// Fetch a message's thread replies, oldest first
    async fn fetch_messages_by_parent(&self, parent_message_id: &str) -> Result<Vec<Message>> {
        let messages = self.messages.lock().await;
        let mut rows: Vec<Message> = messages
            .values()
            .filter(|message| message.parent_message_id.as_deref() == Some(parent_message_id))
            .cloned()
            .collect();

        rows.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rows)
    }

    /// Fetch every message in a workspace
    async fn fetch_messages_by_workspace(&self, workspace_id: &str) -> Result<Vec<Message>> {
        let messages = self.messages.lock().await;
        let mut rows: Vec<Message> = messages
            .values()
            .filter(|message| message.workspace_id == workspace_id)
            .cloned()
            .collect();

        rows.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rows)
    }

    /// Update a message with a partial set of fields
    async fn update_message(&self, id: &str, partial: &PartialMessage) -> Result<()> {
        let mut messages = self.messages.lock().await;
        if let Some(message) = messages.get_mut(id) {
            message.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_not_found_error!("Message"))
        }
    }

    /// Delete a message by its id
    async fn delete_message(&self, id: &str) -> Result<()> {
        let mut messages = self.messages.lock().await;
        if messages.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_not_found_error!("Message"))
        }
    }
}
