use huddle_database::{util::reference::Reference, Database, User, UserActivity};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// List a user's activity log, newest first
#[get("/<target>")]
pub async fn req(
    db: &State<Database>,
    _user: User,
    target: Reference<'_>,
) -> Result<Json<Vec<v0::ActivityEntry>>> {
    let user = target.as_user(db).await?;
    UserActivity::list(db, &user.id).await.map(Json)
}
