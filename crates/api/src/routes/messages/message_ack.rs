use huddle_database::{util::reference::Reference, Database, User};
use huddle_result::{create_error, Result};
use rocket::State;

/// Mark a single message as read, idempotent
#[put("/<target>/ack")]
pub async fn req(db: &State<Database>, user: User, target: Reference<'_>) -> Result<()> {
    let mut message = target.as_message(db).await?;

    db.fetch_member_by_user(&message.workspace_id, &user.id)
        .await?
        .ok_or_else(|| create_error!(Unauthorized))?;

    message.ack(db).await
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use huddle_database::{Channel, Message, Workspace};
    use huddle_models::v0;
    use rocket::http::{Header, Status};

    #[rocket::async_test]
    async fn ack_twice_is_a_no_op() {
        let harness = TestHarness::new().await;
        let (user, token) = harness.new_user("owner").await;

        let (workspace, _) = Workspace::create(&harness.db, "hq".to_string(), &user)
            .await
            .expect("`Workspace`");
        let channel = Channel::create(&harness.db, &workspace.id, "general".to_string())
            .await
            .expect("`Channel`");

        let message = Message::create(
            &harness.db,
            &user,
            v0::DataMessageSend {
                body: "unread".to_string(),
                image: None,
                workspace_id: workspace.id.clone(),
                channel_id: Some(channel.id.clone()),
                parent_message_id: None,
                conversation_id: None,
            },
        )
        .await
        .expect("`Message`");

        for _ in 0..2 {
            let response = harness
                .put(format!("/messages/{}/ack", message.id))
                .header(Header::new("x-session-token", token.clone()))
                .dispatch()
                .await;

            assert_eq!(response.status(), Status::Ok);
        }

        assert!(harness
            .db
            .fetch_message(&message.id)
            .await
            .expect("`Message`")
            .is_read);
    }
}
