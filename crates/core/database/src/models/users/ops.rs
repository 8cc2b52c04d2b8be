use huddle_result::Result;

use crate::{PartialUser, User};

mod reference;

#[async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User>;

    /// Fetch all users from the database
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// Update a user with new information
    async fn update_user(&self, id: &str, user: &PartialUser) -> Result<()>;

    /// Delete a user from the database
    async fn delete_user(&self, id: &str) -> Result<()>;
}
