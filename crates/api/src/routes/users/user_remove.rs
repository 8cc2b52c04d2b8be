use huddle_database::{util::reference::Reference, Database, User};
use huddle_result::Result;
use rocket::State;

/// Remove a user along with their status and sessions
#[delete("/<target>")]
pub async fn req(db: &State<Database>, _user: User, target: Reference<'_>) -> Result<()> {
    let user = target.as_user(db).await?;
    user.delete(db).await
}
