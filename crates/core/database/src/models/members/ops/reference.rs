use huddle_result::Result;

use crate::{Member, ReferenceDb};

use super::AbstractMembers;

#[async_trait]
impl AbstractMembers for ReferenceDb {
    /// Insert a new member into the database
    async fn insert_member(&self, member: &Member) -> Result<()> {
        let mut members = self.members.lock().await;
        if members.contains_key(&member.id) {
            Err(create_database_error!("insert", "members"))
        } else {
            members.insert(member.id.to_string(), member.clone());
            Ok(())
        }
    }

    /// Fetch a member by its id
    async fn fetch_member(&self, id: &str) -> Result<Member> {
        let members = self.members.lock().await;
        members
            .get(id)
            .cloned()
            .ok_or_else(|| create_not_found_error!("Member"))
    }

    /// Fetch a user's membership within a workspace
    async fn fetch_member_by_user(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<Option<Member>> {
        let members = self.members.lock().await;
        Ok(members
            .values()
            .find(|member| member.workspace_id == workspace_id && member.user_id == user_id)
            .cloned())
    }
}
