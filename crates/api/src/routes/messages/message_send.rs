use huddle_database::{Database, Message, User};
use huddle_models::v0;
use huddle_result::{create_error, Result};
use rocket::{serde::json::Json, State};
use validator::Validate;

/// Send a message to a channel, thread or conversation
#[post("/", data = "<data>")]
pub async fn req(
    db: &State<Database>,
    user: User,
    data: Json<v0::DataMessageSend>,
) -> Result<Json<v0::Message>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let message = Message::create(db, &user, data).await?;
    Message::fetch_one(db, &user, &message.id).await.map(Json)
}
