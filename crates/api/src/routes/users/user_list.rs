use huddle_database::{Database, User};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// List every user joined to their latest recorded status
#[get("/")]
pub async fn req(db: &State<Database>, _user: User) -> Result<Json<Vec<v0::UserListEntry>>> {
    User::list_with_status(db).await.map(Json)
}
