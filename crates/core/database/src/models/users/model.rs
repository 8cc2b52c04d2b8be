use huddle_models::v0;
use huddle_result::Result;
use ulid::Ulid;

use crate::{util::funcs::timestamp_from_ulid, Database};

auto_derived_partial!(
    /// User
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Display name
        pub name: String,
        /// Email address
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        /// Avatar URL, managed by the identity provider
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avatar: Option<String>,
        /// Phone number
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
    },
    "PartialUser"
);

#[allow(clippy::disallowed_methods)]
impl User {
    /// Create a new user
    pub async fn create<D>(db: &Database, name: String, data: D) -> Result<User>
    where
        D: Into<Option<PartialUser>>,
    {
        let mut user = User {
            id: Ulid::new().to_string(),
            name,
            email: None,
            avatar: None,
            phone: None,
        };

        if let Some(data) = data.into() {
            user.apply_options(data);
        }

        db.insert_user(&user).await?;
        Ok(user)
    }

    /// Update this user's profile fields
    pub async fn update(&mut self, db: &Database, partial: PartialUser) -> Result<()> {
        db.update_user(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this user along with their status and sessions
    pub async fn delete(self, db: &Database) -> Result<()> {
        info!("Removing user {}", self.id);

        db.delete_user_status(&self.id).await?;
        db.delete_sessions_by_user(&self.id).await?;
        db.delete_user(&self.id).await
    }

    /// List every user joined to their latest recorded status
    pub async fn list_with_status(db: &Database) -> Result<Vec<v0::UserListEntry>> {
        let mut users = db.fetch_users().await?;
        users.sort_by(|a, b| a.id.cmp(&b.id));

        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            let user_status = db
                .fetch_user_status(&user.id)
                .await?
                .map(|status| status.status)
                .unwrap_or_default();

            entries.push(v0::UserListEntry {
                created_at: timestamp_from_ulid(&user.id),
                id: user.id,
                name: user.name,
                email: user.email,
                avatar: user.avatar,
                user_status,
            });
        }

        Ok(entries)
    }
}

impl From<User> for v0::User {
    fn from(value: User) -> Self {
        v0::User {
            id: value.id,
            name: value.name,
            email: value.email,
            avatar: value.avatar,
            phone: value.phone,
        }
    }
}

impl From<v0::DataEditUser> for PartialUser {
    fn from(value: v0::DataEditUser) -> Self {
        PartialUser {
            id: None,
            name: value.name,
            email: value.email,
            avatar: value.avatar,
            phone: value.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{PartialUser, Session, User, UserStatus};

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let user = User::create(
                &db,
                "Ren".to_string(),
                PartialUser {
                    email: Some("ren@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            let mut updated_user = user.clone();
            updated_user
                .update(
                    &db,
                    PartialUser {
                        phone: Some("+85512345678".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();

            let fetched_user = db.fetch_user(&user.id).await.unwrap();
            assert_eq!(updated_user, fetched_user);
            assert_eq!(fetched_user.email.as_deref(), Some("ren@example.com"));
            assert_eq!(fetched_user.phone.as_deref(), Some("+85512345678"));
        });
    }

    #[async_std::test]
    async fn delete_cascades_status_and_sessions() {
        database_test!(|db| async move {
            let user = User::create(&db, "Mai".to_string(), None).await.unwrap();
            let session = Session::create(&db, &user).await.unwrap();
            UserStatus::set(&db, &user.id, "active".to_string())
                .await
                .unwrap();

            user.clone().delete(&db).await.unwrap();

            assert!(db.fetch_user(&user.id).await.is_err());
            assert!(db.fetch_session_by_token(&session.token).await.is_err());
            assert!(db.fetch_user_status(&user.id).await.unwrap().is_none());
        });
    }

    #[async_std::test]
    async fn list_joins_latest_status() {
        database_test!(|db| async move {
            let a = User::create(&db, "A".to_string(), None).await.unwrap();
            let b = User::create(&db, "B".to_string(), None).await.unwrap();

            UserStatus::set(&db, &a.id, "active".to_string())
                .await
                .unwrap();
            UserStatus::set(&db, &a.id, "inactive".to_string())
                .await
                .unwrap();

            let entries = User::list_with_status(&db).await.unwrap();
            assert_eq!(entries.len(), 2);

            let entry_a = entries.iter().find(|e| e.id == a.id).unwrap();
            let entry_b = entries.iter().find(|e| e.id == b.id).unwrap();
            assert_eq!(entry_a.user_status, "inactive");
            assert_eq!(entry_b.user_status, "");
            assert!(entry_a.created_at > 0);
        });
    }
}
