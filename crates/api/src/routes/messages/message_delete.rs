use huddle_database::{util::reference::Reference, Database, User};
use huddle_result::{create_error, Result};
use rocket::State;

/// Delete a message, author only
#[delete("/<target>")]
pub async fn req(db: &State<Database>, user: User, target: Reference<'_>) -> Result<()> {
    let message = target.as_message(db).await?;
    let member = db
        .fetch_member_by_user(&message.workspace_id, &user.id)
        .await?
        .ok_or_else(|| create_error!(Unauthorized))?;

    message.delete(db, &member).await
}
