use huddle_result::Result;

use crate::UserStatus;

mod reference;

#[async_trait]
pub trait AbstractUserStatus: Sync + Send {
    /// Insert or replace a user's status
    async fn set_user_status(&self, status: &UserStatus) -> Result<()>;

    /// Fetch a user's status if one was ever set
    async fn fetch_user_status(&self, user_id: &str) -> Result<Option<UserStatus>>;

    /// Delete a user's status, no-op if none exists
    async fn delete_user_status(&self, user_id: &str) -> Result<()>;
}
