use huddle_database::{Database, Message, User};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Mark every unread message from other members in one channel or
/// conversation, returns the number of rows updated
#[post("/ack", data = "<data>")]
pub async fn req(
    db: &State<Database>,
    user: User,
    data: Json<v0::DataAckAll>,
) -> Result<Json<v0::AckManyResponse>> {
    Message::ack_many(db, &user, data.into_inner())
        .await
        .map(Json)
}
