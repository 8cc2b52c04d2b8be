use huddle_models::v0;
use huddle_result::Result;
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// Direct message thread between two workspace members
    pub struct Conversation {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the workspace this conversation belongs to
        pub workspace_id: String,
        /// First participant (member id)
        pub member_one_id: String,
        /// Second participant (member id)
        pub member_two_id: String,
    }
);

impl Conversation {
    /// Find the conversation between two members, creating it if absent
    ///
    /// Participant order is irrelevant, either orientation matches.
    pub async fn get_or_create(
        db: &Database,
        workspace_id: &str,
        member_one_id: &str,
        member_two_id: &str,
    ) -> Result<Conversation> {
        if let Some(conversation) = db
            .find_conversation(workspace_id, member_one_id, member_two_id)
            .await?
        {
            return Ok(conversation);
        }

        let conversation = Conversation {
            id: Ulid::new().to_string(),
            workspace_id: workspace_id.to_string(),
            member_one_id: member_one_id.to_string(),
            member_two_id: member_two_id.to_string(),
        };

        db.insert_conversation(&conversation).await?;
        Ok(conversation)
    }

    /// Resolve the participant other than the given member
    pub fn other_member<'a>(&'a self, member_id: &str) -> &'a str {
        if self.member_one_id == member_id {
            &self.member_two_id
        } else {
            &self.member_one_id
        }
    }
}

impl From<Conversation> for v0::Conversation {
    fn from(value: Conversation) -> Self {
        v0::Conversation {
            id: value.id,
            workspace_id: value.workspace_id,
            member_one_id: value.member_one_id,
            member_two_id: value.member_two_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Conversation, User, Workspace};

    #[async_std::test]
    async fn get_or_create_matches_either_orientation() {
        database_test!(|db| async move {
            let alice = User::create(&db, "alice".to_string(), None).await.unwrap();
            let (workspace, _) = Workspace::create(&db, "team".to_string(), &alice)
                .await
                .unwrap();

            let first = Conversation::get_or_create(&db, &workspace.id, "m1", "m2")
                .await
                .unwrap();

            // swapped participant order resolves to the same conversation
            let second = Conversation::get_or_create(&db, &workspace.id, "m2", "m1")
                .await
                .unwrap();

            assert_eq!(first.id, second.id);
            assert_eq!(first.other_member("m1"), "m2");
            assert_eq!(first.other_member("m2"), "m1");
        });
    }
}
