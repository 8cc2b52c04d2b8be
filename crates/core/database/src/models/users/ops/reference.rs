use huddle_result::Result;

use crate::{PartialUser, ReferenceDb, User};

use super::AbstractUsers;

#[async_trait]
impl AbstractUsers for ReferenceDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            Err(create_database_error!("insert", "users"))
        } else {
            users.insert(user.id.to_string(), user.clone());
            Ok(())
        }
    }

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| create_not_found_error!("User"))
    }

    /// Fetch all users from the database
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let users = self.users.lock().await;
        Ok(users.values().cloned().collect())
    }

    /// Update a user with new information
    async fn update_user(&self, id: &str, user: &PartialUser) -> Result<()> {
        let mut users = self.users.lock().await;
        if let Some(user_data) = users.get_mut(id) {
            user_data.apply_options(user.to_owned());
            Ok(())
        } else {
            Err(create_not_found_error!("User"))
        }
    }

    /// Delete a user from the database
    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_not_found_error!("User"))
        }
    }
}
