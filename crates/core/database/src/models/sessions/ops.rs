use huddle_result::Result;

use crate::Session;

mod reference;

#[async_trait]
pub trait AbstractSessions: Sync + Send {
    /// Insert a new session into the database
    async fn insert_session(&self, session: &Session) -> Result<()>;

    /// Fetch a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session>;

    /// Delete all of a user's sessions
    async fn delete_sessions_by_user(&self, user_id: &str) -> Result<()>;
}
