use huddle_result::Result;

use crate::UserActivity;

mod reference;

#[async_trait]
pub trait AbstractUserActivity: Sync + Send {
    /// Insert a new activity event into the database
    async fn insert_activity(&self, activity: &UserActivity) -> Result<()>;

    /// Fetch a user's activity log, oldest first
    async fn fetch_activity_by_user(&self, user_id: &str) -> Result<Vec<UserActivity>>;
}
