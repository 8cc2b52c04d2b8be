use huddle_database::{util::reference::Reference, Database, User, UserStatus};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Set a user's status to active or inactive
#[put("/<target>/status", data = "<data>")]
pub async fn req(
    db: &State<Database>,
    _user: User,
    target: Reference<'_>,
    data: Json<v0::DataSetStatus>,
) -> Result<Json<UserStatus>> {
    let user = target.as_user(db).await?;
    UserStatus::set(db, &user.id, data.into_inner().status)
        .await
        .map(Json)
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Header, Status};

    #[rocket::async_test]
    async fn unknown_status_is_rejected() {
        let harness = TestHarness::new().await;
        let (user, token) = harness.new_user("owner").await;

        let response = harness
            .put(format!("/users/{}/status", user.id))
            .header(Header::new("x-session-token", token))
            .header(ContentType::JSON)
            .body(json!({ "status": "away" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert!(harness
            .db
            .fetch_user_status(&user.id)
            .await
            .expect("`Option<UserStatus>`")
            .is_none());
    }
}
