use huddle_result::Result;

use crate::Member;

mod reference;

#[async_trait]
pub trait AbstractMembers: Sync + Send {
    /// Insert a new member into the database
    async fn insert_member(&self, member: &Member) -> Result<()>;

    /// Fetch a member by its id
    async fn fetch_member(&self, id: &str) -> Result<Member>;

    /// Fetch a user's membership within a workspace
    async fn fetch_member_by_user(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<Option<Member>>;
}
