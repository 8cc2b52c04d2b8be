use huddle_models::v0;
use huddle_result::Result;
use ulid::Ulid;

use crate::{Database, Member, User};

auto_derived!(
    /// Workspace
    pub struct Workspace {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Workspace name
        pub name: String,
        /// User id of the owner
        pub owner: String,
    }
);

impl Workspace {
    /// Create a workspace owned by the given user
    ///
    /// The owner joins as an admin member immediately.
    pub async fn create(db: &Database, name: String, owner: &User) -> Result<(Workspace, Member)> {
        let workspace = Workspace {
            id: Ulid::new().to_string(),
            name,
            owner: owner.id.to_string(),
        };

        db.insert_workspace(&workspace).await?;
        let member = Member::create(db, &workspace, owner, v0::MemberRole::Admin).await?;

        Ok((workspace, member))
    }
}

impl From<Workspace> for v0::Workspace {
    fn from(value: Workspace) -> Self {
        v0::Workspace {
            id: value.id,
            name: value.name,
            owner: value.owner,
        }
    }
}
