use huddle_result::Result;

use crate::{ReferenceDb, UserStatus};

use super::AbstractUserStatus;

#[async_trait]
impl AbstractUserStatus for ReferenceDb {
    /// Insert or replace a user's status
    async fn set_user_status(&self, status: &UserStatus) -> Result<()> {
        let mut user_status = self.user_status.lock().await;
        user_status.insert(status.user_id.to_string(), status.clone());
        Ok(())
    }

    /// Fetch a user's status if one was ever set
    async fn fetch_user_status(&self, user_id: &str) -> Result<Option<UserStatus>> {
        let user_status = self.user_status.lock().await;
        Ok(user_status.get(user_id).cloned())
    }

    /// Delete a user's status, no-op if none exists
    async fn delete_user_status(&self, user_id: &str) -> Result<()> {
        let mut user_status = self.user_status.lock().await;
        user_status.remove(user_id);
        Ok(())
    }
}
