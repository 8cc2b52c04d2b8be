use huddle_database::{util::reference::Reference, Database, Message, User};
use huddle_models::v0;
use huddle_result::{create_error, Result};
use rocket::{serde::json::Json, State};
use validator::Validate;

/// Edit a message's content, author only
#[patch("/<target>", data = "<data>")]
pub async fn req(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
    data: Json<v0::DataEditMessage>,
) -> Result<Json<v0::Message>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut message = target.as_message(db).await?;
    let member = db
        .fetch_member_by_user(&message.workspace_id, &user.id)
        .await?
        .ok_or_else(|| create_error!(Unauthorized))?;

    message.update(db, &member, data).await?;
    Message::fetch_one(db, &user, target.id).await.map(Json)
}
