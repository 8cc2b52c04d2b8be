use std::collections::HashMap;

#[cfg(feature = "validator")]
use validator::Validate;

use super::{Member, User};

auto_derived!(
    /// Message with author, reactions and thread summary resolved
    pub struct Message {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Message content
        pub body: String,
        /// Resolved URL of the attached image, if any
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub image: Option<String>,
        /// Channel this message was sent in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub channel_id: Option<String>,
        /// Conversation this message was sent in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub conversation_id: Option<String>,
        /// Message this is a thread reply to
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub parent_message_id: Option<String>,
        /// Whether this message has been read
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "crate::if_false", default))]
        pub is_read: bool,
        /// Unix timestamp (ms) this message was created at
        pub created_at: i64,
        /// Unix timestamp (ms) this message was last edited at
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub edited_at: Option<i64>,

        /// Authoring member
        pub member: Member,
        /// User behind the authoring member
        pub user: User,
        /// Folded reaction summaries, one entry per distinct emoji value
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Vec::is_empty", default)
        )]
        pub reactions: Vec<MessageReaction>,

        /// Number of replies in this message's thread
        pub thread_count: usize,
        /// Avatar of the latest replier, if resolvable
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub thread_image: Option<String>,
        /// Name of the latest replier, empty if there are no replies
        pub thread_name: String,
        /// Creation timestamp (ms) of the latest reply, zero if none
        pub thread_timestamp: i64,
    }

    /// Reactions on a message folded by emoji value
    ///
    /// `count` intentionally counts reaction rows rather than distinct
    /// members, matching observed product behaviour; `member_ids` is
    /// deduplicated.
    pub struct MessageReaction {
        /// Id of the first reaction row carrying this value
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the reacted message
        pub message_id: String,
        /// Emoji value
        pub value: String,
        /// Number of reaction rows with this value
        pub count: usize,
        /// Members who reacted with this value
        pub member_ids: Vec<String>,
    }

    /// One page of a reverse-chronological message listing
    pub struct MessagePage {
        /// Shaped messages, newest first
        pub messages: Vec<Message>,
        /// Cursor to pass as `before` for the next page
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub cursor: Option<String>,
        /// Whether the listing is exhausted
        pub is_done: bool,
    }

    /// Per-channel and per-peer unread counters for one member
    #[derive(Default)]
    pub struct UnreadCounts {
        /// Channel id to number of unread top-level messages
        pub channels: HashMap<String, usize>,
        /// Peer member id to number of unread direct messages
        pub conversations: HashMap<String, usize>,
    }

    /// Number of rows updated by a bulk acknowledgement
    pub struct AckManyResponse {
        pub count: usize,
    }

    /// Entry in the workspace-wide recent message feed
    ///
    /// A flat row with the author's name resolved, lighter than the
    /// fully shaped [`Message`].
    pub struct RecentMessage {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Channel this message was sent in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub channel_id: Option<String>,
        /// Conversation this message was sent in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub conversation_id: Option<String>,
        /// Id of the authoring member
        pub member_id: String,
        /// Id of the user behind the authoring member
        pub user_id: String,
        /// Name of the authoring user
        pub user_name: String,
        /// Message content
        pub body: String,
        /// Unix timestamp (ms) this message was created at
        pub created_at: i64,
        /// Whether this message has been read
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "crate::if_false", default))]
        pub is_read: bool,
    }
);

auto_derived!(
    /// Send a new message
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataMessageSend {
        /// Message content
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 4000)))]
        pub body: String,
        /// Stored file reference for an attached image
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub image: Option<String>,
        /// Id of the target workspace
        pub workspace_id: String,
        /// Target channel
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub channel_id: Option<String>,
        /// Message this reply belongs under
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub parent_message_id: Option<String>,
        /// Target conversation
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub conversation_id: Option<String>,
    }

    /// Edit an existing message
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataEditMessage {
        /// New message content
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 4000)))]
        pub body: String,
    }

    /// Acknowledge every unread message in a channel or conversation
    ///
    /// Exactly one of the two targets must be provided.
    #[derive(Default)]
    pub struct DataAckAll {
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub channel_id: Option<String>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub conversation_id: Option<String>,
    }
);
