use huddle_models::v0;
use huddle_result::Result;
use ulid::Ulid;

use crate::{Database, User, Workspace};

auto_derived!(
    /// A user's membership within one workspace
    pub struct Member {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user
        pub user_id: String,
        /// Id of the workspace
        pub workspace_id: String,
        /// Role within the workspace
        pub role: v0::MemberRole,
    }
);

impl Member {
    /// Join a user to a workspace
    pub async fn create(
        db: &Database,
        workspace: &Workspace,
        user: &User,
        role: v0::MemberRole,
    ) -> Result<Member> {
        let member = Member {
            id: Ulid::new().to_string(),
            user_id: user.id.to_string(),
            workspace_id: workspace.id.to_string(),
            role,
        };

        db.insert_member(&member).await?;
        Ok(member)
    }
}

impl From<Member> for v0::Member {
    fn from(value: Member) -> Self {
        v0::Member {
            id: value.id,
            user_id: value.user_id,
            workspace_id: value.workspace_id,
            role: value.role,
        }
    }
}
