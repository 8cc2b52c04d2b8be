use huddle_result::Result;
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// One member's reaction to one message
    pub struct Reaction {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the workspace
        pub workspace_id: String,
        /// Id of the message being reacted to
        pub message_id: String,
        /// Id of the reacting member
        pub member_id: String,
        /// Reaction value (emoji)
        pub value: String,
    }
);

impl Reaction {
    /// Toggle a member's reaction on a message
    ///
    /// Removes the row if this member already reacted with the same value,
    /// inserts one otherwise.
    pub async fn toggle(
        db: &Database,
        workspace_id: &str,
        message_id: &str,
        member_id: &str,
        value: &str,
    ) -> Result<()> {
        if let Some(existing) = db.fetch_reaction_by(message_id, member_id, value).await? {
            db.delete_reaction(&existing.id).await
        } else {
            let reaction = Reaction {
                id: Ulid::new().to_string(),
                workspace_id: workspace_id.to_string(),
                message_id: message_id.to_string(),
                member_id: member_id.to_string(),
                value: value.to_string(),
            };

            db.insert_reaction(&reaction).await
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Reaction;

    #[async_std::test]
    async fn toggle_inserts_then_removes() {
        database_test!(|db| async move {
            Reaction::toggle(&db, "ws", "msg", "m1", "👍").await.unwrap();
            Reaction::toggle(&db, "ws", "msg", "m2", "👍").await.unwrap();
            Reaction::toggle(&db, "ws", "msg", "m1", "🎉").await.unwrap();

            let reactions = db.fetch_reactions_by_message("msg").await.unwrap();
            assert_eq!(reactions.len(), 3);

            // toggling the same value again removes the row
            Reaction::toggle(&db, "ws", "msg", "m1", "👍").await.unwrap();

            let reactions = db.fetch_reactions_by_message("msg").await.unwrap();
            assert_eq!(reactions.len(), 2);
            assert!(reactions
                .iter()
                .all(|reaction| !(reaction.member_id == "m1" && reaction.value == "👍")));
        });
    }
}
