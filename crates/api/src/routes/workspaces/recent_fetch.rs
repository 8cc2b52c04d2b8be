use huddle_database::{util::reference::Reference, Database, Message, User};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Fetch the latest top-level messages across a workspace
#[get("/<target>/messages/recent?<limit>")]
pub async fn req(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
    limit: Option<usize>,
) -> Result<Json<Vec<v0::RecentMessage>>> {
    let workspace = target.as_workspace(db).await?;
    Message::recent(db, &user, &workspace.id, limit)
        .await
        .map(Json)
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use huddle_database::{Channel, Message, Workspace};
    use huddle_models::v0;
    use rocket::http::{Header, Status};

    #[rocket::async_test]
    async fn recent_feed_resolves_author_names() {
        let harness = TestHarness::new().await;
        let (user, token) = harness.new_user("owner").await;

        let (workspace, _) = Workspace::create(&harness.db, "hq".to_string(), &user)
            .await
            .expect("`Workspace`");
        let channel = Channel::create(&harness.db, &workspace.id, "general".to_string())
            .await
            .expect("`Channel`");

        for body in ["one", "two"] {
            Message::create(
                &harness.db,
                &user,
                v0::DataMessageSend {
                    body: body.to_string(),
                    image: None,
                    workspace_id: workspace.id.clone(),
                    channel_id: Some(channel.id.clone()),
                    parent_message_id: None,
                    conversation_id: None,
                },
            )
            .await
            .expect("`Message`");
        }

        let response = harness
            .get(format!("/workspaces/{}/messages/recent", workspace.id))
            .header(Header::new("x-session-token", token))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let feed: Vec<v0::RecentMessage> =
            response.into_json().await.expect("`Vec<RecentMessage>`");
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].body, "two");
        assert_eq!(feed[0].user_name, "owner");
    }
}
