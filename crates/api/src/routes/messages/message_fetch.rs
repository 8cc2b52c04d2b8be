use huddle_database::{util::reference::Reference, Database, Message, User};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Fetch a single shaped message
#[get("/<target>")]
pub async fn req(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<v0::Message>> {
    Message::fetch_one(db, &user, target.id).await.map(Json)
}
