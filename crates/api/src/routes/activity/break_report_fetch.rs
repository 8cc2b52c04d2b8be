use huddle_database::{util::reference::Reference, Database, User, UserActivity};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Report every closed break in a user's log
#[get("/<target>/breaks")]
pub async fn req(
    db: &State<Database>,
    _user: User,
    target: Reference<'_>,
) -> Result<Json<Vec<v0::BreakReportEntry>>> {
    let user = target.as_user(db).await?;
    UserActivity::break_report(db, &user.id).await.map(Json)
}
