use huddle_database::{Database, User, UserActivity};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Record a single activity event
#[post("/", data = "<data>")]
pub async fn req(
    db: &State<Database>,
    _user: User,
    data: Json<v0::DataRecordActivity>,
) -> Result<Json<v0::ActivityEntry>> {
    UserActivity::record(db, data.into_inner())
        .await
        .map(|activity| Json(activity.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Header, Status};

    #[rocket::async_test]
    async fn break_event_requires_a_category() {
        let harness = TestHarness::new().await;
        let (user, token) = harness.new_user("owner").await;

        let response = harness
            .post("/activity")
            .header(Header::new("x-session-token", token.clone()))
            .header(ContentType::JSON)
            .body(json!({ "user_id": user.id, "type": "breakin" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);

        let response = harness
            .post("/activity")
            .header(Header::new("x-session-token", token))
            .header(ContentType::JSON)
            .body(
                json!({ "user_id": user.id, "type": "breakin", "break_type": "Meal break" })
                    .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
    }
}
