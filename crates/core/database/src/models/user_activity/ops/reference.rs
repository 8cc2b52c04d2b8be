use huddle_result::Result;

use crate::{normalize_timestamp, ReferenceDb, UserActivity};

use super::AbstractUserActivity;

#[async_trait]
impl AbstractUserActivity for ReferenceDb {
    /// Insert a new activity event into the database
    async fn insert_activity(&self, activity: &UserActivity) -> Result<()> {
        let mut user_activity = self.user_activity.lock().await;
        if user_activity.contains_key(&activity.id) {
            Err(create_database_error!("insert", "user_activity"))
        } else {
            user_activity.insert(activity.id.to_string(), activity.clone());
            Ok(())
        }
    }

    /// Fetch a user's activity log, oldest first
    ///
    /// Ordered by normalized timestamp so second-precision entries from
    /// older clients interleave correctly with millisecond ones.
    async fn fetch_activity_by_user(&self, user_id: &str) -> Result<Vec<UserActivity>> {
        let user_activity = self.user_activity.lock().await;
        let mut rows: Vec<UserActivity> = user_activity
            .values()
            .filter(|activity| activity.user_id == user_id)
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            normalize_timestamp(a.timestamp)
                .cmp(&normalize_timestamp(b.timestamp))
                .then(a.id.cmp(&b.id))
        });
        Ok(rows)
    }
}
