use huddle_database::{util::reference::Reference, Database, User, UserActivity};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Aggregate a user's closed work and break time
#[get("/<target>/summary")]
pub async fn req(
    db: &State<Database>,
    _user: User,
    target: Reference<'_>,
) -> Result<Json<v0::DailySummary>> {
    let user = target.as_user(db).await?;
    UserActivity::daily_summary(db, &user.id).await.map(Json)
}
