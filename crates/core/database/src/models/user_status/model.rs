use huddle_result::Result;

use crate::Database;

auto_derived!(
    /// A user's presence status, upserted on every change
    pub struct UserStatus {
        /// Id of the user this status belongs to
        #[serde(rename = "_id")]
        pub user_id: String,
        /// Either "active" or "inactive"
        pub status: String,
    }
);

impl UserStatus {
    /// Set a user's status, replacing any previous value
    pub async fn set(db: &Database, user_id: &str, status: String) -> Result<UserStatus> {
        if status != "active" && status != "inactive" {
            return Err(create_error!(FailedValidation {
                error: "Status must be 'active' or 'inactive'".to_string()
            }));
        }

        db.fetch_user(user_id).await?;

        let status = UserStatus {
            user_id: user_id.to_string(),
            status,
        };

        db.set_user_status(&status).await?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use huddle_result::ErrorType;

    use crate::{User, UserStatus};

    #[async_std::test]
    async fn upsert_and_validation() {
        database_test!(|db| async move {
            let user = User::create(&db, "Sokha".to_string(), None).await.unwrap();

            UserStatus::set(&db, &user.id, "active".to_string())
                .await
                .unwrap();
            UserStatus::set(&db, &user.id, "inactive".to_string())
                .await
                .unwrap();

            let status = db.fetch_user_status(&user.id).await.unwrap().unwrap();
            assert_eq!(status.status, "inactive");

            let error = UserStatus::set(&db, &user.id, "away".to_string())
                .await
                .unwrap_err();
            assert!(matches!(
                error.error_type,
                ErrorType::FailedValidation { .. }
            ));
        });
    }
}
