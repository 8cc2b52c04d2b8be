use huddle_database::{util::reference::Reference, Database, Message, User};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Fetch the caller's unread counters for one workspace
#[get("/<target>/unreads")]
pub async fn req(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<v0::UnreadCounts>> {
    let workspace = target.as_workspace(db).await?;
    Message::unread_counts(db, &user, &workspace.id)
        .await
        .map(Json)
}
