use huddle_database::{util::reference::Reference, Database, User};
use huddle_models::v0;
use huddle_result::{create_error, Result};
use rocket::{serde::json::Json, State};
use validator::Validate;

/// Update a user's profile fields
#[patch("/<target>", data = "<data>")]
pub async fn req(
    db: &State<Database>,
    _user: User,
    target: Reference<'_>,
    data: Json<v0::DataEditUser>,
) -> Result<Json<v0::User>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut user = target.as_user(db).await?;
    user.update(db, data.into()).await?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use huddle_models::v0;
    use rocket::http::{ContentType, Header, Status};

    #[rocket::async_test]
    async fn edit_applies_partial_fields() {
        let harness = TestHarness::new().await;
        let (user, token) = harness.new_user("owner").await;

        let response = harness
            .patch(format!("/users/{}", user.id))
            .header(Header::new("x-session-token", token))
            .header(ContentType::JSON)
            .body(json!({ "phone": "+85512345678" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let updated: v0::User = response.into_json().await.expect("`User`");
        assert_eq!(updated.name, "owner");
        assert_eq!(updated.phone.as_deref(), Some("+85512345678"));
    }
}
