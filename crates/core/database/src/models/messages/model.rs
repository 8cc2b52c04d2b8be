use futures::future::try_join_all;
use huddle_models::v0;
use huddle_result::Result;
use indexmap::IndexMap;
use ulid::Ulid;

use crate::{
    util::{files::attachment_url, funcs::timestamp_from_ulid},
    Database, Member, Reaction, User,
};

auto_derived_partial!(
    /// Message stored at one placement within a workspace
    pub struct Message {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Message content
        pub body: String,
        /// Stored file reference for an attached image
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,
        /// Id of the authoring member
        pub member_id: String,
        /// Id of the workspace
        pub workspace_id: String,
        /// Channel this message was sent in
        #[serde(skip_serializing_if = "Option::is_none")]
        pub channel_id: Option<String>,
        /// Message this is a thread reply to
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parent_message_id: Option<String>,
        /// Conversation this message was sent in
        #[serde(skip_serializing_if = "Option::is_none")]
        pub conversation_id: Option<String>,
        /// Whether this message has been read
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub is_read: bool,
        /// Unix timestamp (ms) this message was last edited at
        #[serde(skip_serializing_if = "Option::is_none")]
        pub edited_at: Option<i64>,
    },
    "PartialMessage"
);

/// Composite placement key used to list messages
///
/// Listings compare all three fields at once, so top-level channel
/// messages never mix with thread replies or direct messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageQuery {
    pub channel_id: Option<String>,
    pub parent_message_id: Option<String>,
    pub conversation_id: Option<String>,
}

impl Message {
    /// Send a new message as the given user
    ///
    /// Replies inherit their placement from the parent message.
    pub async fn create(db: &Database, user: &User, data: v0::DataMessageSend) -> Result<Message> {
        let member = db
            .fetch_member_by_user(&data.workspace_id, &user.id)
            .await?
            .ok_or_else(|| create_error!(Unauthorized))?;

        let mut channel_id = data.channel_id;
        let mut conversation_id = data.conversation_id;

        if let Some(parent_id) = &data.parent_message_id {
            let parent = db.fetch_message(parent_id).await?;
            if parent.workspace_id != data.workspace_id {
                return Err(create_error!(InvalidOperation));
            }

            channel_id = parent.channel_id;
            conversation_id = parent.conversation_id;
        } else {
            match (&channel_id, &conversation_id) {
                (Some(_), None) | (None, Some(_)) => {}
                _ => return Err(create_error!(InvalidOperation)),
            }
        }

        let message = Message {
            id: Ulid::new().to_string(),
            body: data.body,
            image: data.image,
            member_id: member.id,
            workspace_id: data.workspace_id,
            channel_id,
            parent_message_id: data.parent_message_id,
            conversation_id,
            is_read: false,
            edited_at: None,
        };

        db.insert_message(&message).await?;
        Ok(message)
    }

    /// Edit this message's content, author only
    pub async fn update(
        &mut self,
        db: &Database,
        member: &Member,
        data: v0::DataEditMessage,
    ) -> Result<()> {
        if self.member_id != member.id {
            return Err(create_error!(Unauthorized));
        }

        let partial = PartialMessage {
            body: Some(data.body),
            edited_at: Some(chrono::Utc::now().timestamp_millis()),
            ..Default::default()
        };

        db.update_message(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this message, author only
    pub async fn delete(self, db: &Database, member: &Member) -> Result<()> {
        if self.member_id != member.id {
            return Err(create_error!(Unauthorized));
        }

        db.delete_message(&self.id).await
    }

    /// Mark this message as read, a no-op if it already is
    pub async fn ack(&mut self, db: &Database) -> Result<()> {
        if self.is_read {
            return Ok(());
        }

        db.update_message(
            &self.id,
            &PartialMessage {
                is_read: Some(true),
                ..Default::default()
            },
        )
        .await?;

        self.is_read = true;
        Ok(())
    }

    /// Mark every unread message from other members at one placement
    ///
    /// Exactly one of channel or conversation must be targeted. Point
    /// updates are issued concurrently without a surrounding transaction,
    /// the operation is safe to retry.
    pub async fn ack_many(
        db: &Database,
        user: &User,
        data: v0::DataAckAll,
    ) -> Result<v0::AckManyResponse> {
        let (workspace_id, query) = match (data.channel_id, data.conversation_id) {
            (Some(channel_id), None) => {
                let channel = db.fetch_channel(&channel_id).await?;
                (
                    channel.workspace_id,
                    MessageQuery {
                        channel_id: Some(channel_id),
                        ..Default::default()
                    },
                )
            }
            (None, Some(conversation_id)) => {
                let conversation = db.fetch_conversation(&conversation_id).await?;
                (
                    conversation.workspace_id,
                    MessageQuery {
                        conversation_id: Some(conversation_id),
                        ..Default::default()
                    },
                )
            }
            _ => return Err(create_error!(InvalidOperation)),
        };

        let member = db
            .fetch_member_by_user(&workspace_id, &user.id)
            .await?
            .ok_or_else(|| create_error!(Unauthorized))?;

        let unread: Vec<Message> = db
            .fetch_messages(&query, None, None)
            .await?
            .into_iter()
            .filter(|message| !message.is_read && message.member_id != member.id)
            .collect();

        try_join_all(unread.iter().map(|message| {
            let id = message.id.clone();
            async move {
                db.update_message(
                    &id,
                    &PartialMessage {
                        is_read: Some(true),
                        ..Default::default()
                    },
                )
                .await
            }
        }))
        .await?;

        Ok(v0::AckManyResponse {
            count: unread.len(),
        })
    }

    /// Count unread top-level messages from other members in a workspace
    ///
    /// Non-members get an empty result rather than an error. Direct
    /// message counters are keyed by the peer member, not the
    /// conversation row.
    pub async fn unread_counts(
        db: &Database,
        user: &User,
        workspace_id: &str,
    ) -> Result<v0::UnreadCounts> {
        let Some(member) = db.fetch_member_by_user(workspace_id, &user.id).await? else {
            return Ok(v0::UnreadCounts::default());
        };

        let mut counts = v0::UnreadCounts::default();
        for message in db.fetch_messages_by_workspace(workspace_id).await? {
            if message.is_read
                || message.member_id == member.id
                || message.parent_message_id.is_some()
            {
                continue;
            }

            if let Some(channel_id) = message.channel_id {
                *counts.channels.entry(channel_id).or_default() += 1;
            } else if let Some(conversation_id) = message.conversation_id {
                let conversation = db.fetch_conversation(&conversation_id).await?;
                if conversation.member_one_id != member.id
                    && conversation.member_two_id != member.id
                {
                    continue;
                }

                let peer = conversation.other_member(&member.id).to_string();
                *counts.conversations.entry(peer).or_default() += 1;
            }
        }

        Ok(counts)
    }

    /// Fetch one page of shaped messages at a placement, newest first
    pub async fn fetch_page(
        db: &Database,
        user: &User,
        channel_id: Option<String>,
        parent_message_id: Option<String>,
        conversation_id: Option<String>,
        before: Option<String>,
        limit: Option<usize>,
    ) -> Result<v0::MessagePage> {
        let (workspace_id, query) = if let Some(parent_id) = parent_message_id {
            let parent = db.fetch_message(&parent_id).await?;
            (
                parent.workspace_id.clone(),
                MessageQuery {
                    channel_id: parent.channel_id.clone(),
                    parent_message_id: Some(parent_id),
                    conversation_id: parent.conversation_id,
                },
            )
        } else if let Some(channel_id) = channel_id {
            let channel = db.fetch_channel(&channel_id).await?;
            (
                channel.workspace_id,
                MessageQuery {
                    channel_id: Some(channel_id),
                    ..Default::default()
                },
            )
        } else if let Some(conversation_id) = conversation_id {
            let conversation = db.fetch_conversation(&conversation_id).await?;
            (
                conversation.workspace_id,
                MessageQuery {
                    conversation_id: Some(conversation_id),
                    ..Default::default()
                },
            )
        } else {
            return Err(create_error!(InvalidOperation));
        };

        db.fetch_member_by_user(&workspace_id, &user.id)
            .await?
            .ok_or_else(|| create_error!(Unauthorized))?;

        // a zero limit would strand the cursor, clamp to at least one row
        let limit = limit.unwrap_or(50).clamp(1, 100);

        // fetch one past the page to learn whether the listing is exhausted
        let mut rows = db
            .fetch_messages(&query, before.as_deref(), Some(limit + 1))
            .await?;

        let is_done = rows.len() <= limit;
        rows.truncate(limit);

        let cursor = if is_done {
            None
        } else {
            rows.last().map(|message| message.id.clone())
        };

        let mut messages = Vec::with_capacity(rows.len());
        for row in rows {
            // rows whose author can no longer be resolved are dropped
            if let Some(message) = row.shape(db).await? {
                messages.push(message);
            }
        }

        Ok(v0::MessagePage {
            messages,
            cursor,
            is_done,
        })
    }

    /// List the latest top-level messages across a whole workspace
    ///
    /// Thread replies are excluded and non-members get an empty feed
    /// rather than an error. Rows whose author can no longer be
    /// resolved are dropped.
    pub async fn recent(
        db: &Database,
        user: &User,
        workspace_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<v0::RecentMessage>> {
        if db
            .fetch_member_by_user(workspace_id, &user.id)
            .await?
            .is_none()
        {
            return Ok(Vec::new());
        }

        let limit = limit.unwrap_or(50).clamp(1, 100);
        let rows = db.fetch_messages_by_workspace(workspace_id).await?;

        let mut feed = Vec::new();
        for row in rows
            .into_iter()
            .rev()
            .filter(|message| message.parent_message_id.is_none())
        {
            let Some(member) = db.fetch_member(&row.member_id).await.ok() else {
                continue;
            };

            let Some(user) = db.fetch_user(&member.user_id).await.ok() else {
                continue;
            };

            feed.push(v0::RecentMessage {
                created_at: timestamp_from_ulid(&row.id),
                id: row.id,
                channel_id: row.channel_id,
                conversation_id: row.conversation_id,
                member_id: row.member_id,
                user_id: user.id,
                user_name: user.name,
                body: row.body,
                is_read: row.is_read,
            });

            if feed.len() == limit {
                break;
            }
        }

        Ok(feed)
    }

    /// Fetch a single shaped message, workspace members only
    pub async fn fetch_one(db: &Database, user: &User, id: &str) -> Result<v0::Message> {
        let message = db.fetch_message(id).await?;

        db.fetch_member_by_user(&message.workspace_id, &user.id)
            .await?
            .ok_or_else(|| create_error!(Unauthorized))?;

        message
            .shape(db)
            .await?
            .ok_or_else(|| create_not_found_error!("Message"))
    }

    /// Resolve author, reactions and thread summary into the client shape
    ///
    /// Yields `None` when the authoring member or user no longer exists.
    pub async fn shape(self, db: &Database) -> Result<Option<v0::Message>> {
        let Some(member) = db.fetch_member(&self.member_id).await.ok() else {
            return Ok(None);
        };

        let Some(user) = db.fetch_user(&member.user_id).await.ok() else {
            return Ok(None);
        };

        let reactions = fold_reactions(db.fetch_reactions_by_message(&self.id).await?);

        let replies = db.fetch_messages_by_parent(&self.id).await?;
        let (thread_count, thread_image, thread_name, thread_timestamp) =
            thread_summary(db, &replies).await;

        let image = match &self.image {
            Some(file_id) => Some(attachment_url(file_id).await),
            None => None,
        };

        Ok(Some(v0::Message {
            created_at: timestamp_from_ulid(&self.id),
            id: self.id,
            body: self.body,
            image,
            channel_id: self.channel_id,
            conversation_id: self.conversation_id,
            parent_message_id: self.parent_message_id,
            is_read: self.is_read,
            edited_at: self.edited_at,
            member: member.into(),
            user: user.into(),
            reactions,
            thread_count,
            thread_image,
            thread_name,
            thread_timestamp,
        }))
    }
}

/// Fold reaction rows into one summary per distinct value
///
/// `count` tallies rows while `member_ids` is deduplicated, first
/// reaction order is preserved.
fn fold_reactions(rows: Vec<Reaction>) -> Vec<v0::MessageReaction> {
    let mut folded: IndexMap<String, v0::MessageReaction> = IndexMap::new();

    for row in rows {
        let entry = folded
            .entry(row.value.clone())
            .or_insert_with(|| v0::MessageReaction {
                id: row.id.clone(),
                message_id: row.message_id.clone(),
                value: row.value,
                count: 0,
                member_ids: Vec::new(),
            });

        entry.count += 1;
        if !entry.member_ids.contains(&row.member_id) {
            entry.member_ids.push(row.member_id);
        }
    }

    folded.into_values().collect()
}

/// Summarise a message's thread from its replies, oldest first
///
/// No replies yields the zero summary rather than an error, and an
/// unresolvable latest replier degrades to an anonymous summary.
async fn thread_summary(
    db: &Database,
    replies: &[Message],
) -> (usize, Option<String>, String, i64) {
    let Some(latest) = replies.last() else {
        return (0, None, String::new(), 0);
    };

    let mut image = None;
    let mut name = String::new();

    if let Ok(member) = db.fetch_member(&latest.member_id).await {
        if let Ok(user) = db.fetch_user(&member.user_id).await {
            image = user.avatar;
            name = user.name;
        }
    }

    (replies.len(), image, name, timestamp_from_ulid(&latest.id))
}
