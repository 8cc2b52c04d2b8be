use huddle_result::Result;
use ulid::Ulid;

use crate::{Database, User};

auto_derived!(
    /// Authenticated session
    ///
    /// Account lifecycle is owned by the external identity provider;
    /// this only maps bearer tokens back to users.
    pub struct Session {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Token used to authenticate requests
        pub token: String,
        /// Id of the authenticated user
        pub user_id: String,
    }
);

impl Session {
    /// Create a new session for the given user
    pub async fn create(db: &Database, user: &User) -> Result<Session> {
        let session = Session {
            id: Ulid::new().to_string(),
            token: nanoid::nanoid!(64),
            user_id: user.id.to_string(),
        };

        db.insert_session(&session).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Session, User};

    #[async_std::test]
    async fn token_resolves_user() {
        database_test!(|db| async move {
            let user = User::create(&db, "Dara".to_string(), None).await.unwrap();
            let session = Session::create(&db, &user).await.unwrap();

            let fetched = db.fetch_session_by_token(&session.token).await.unwrap();
            assert_eq!(fetched.user_id, user.id);

            assert!(db.fetch_session_by_token("missing").await.is_err());
        });
    }
}
