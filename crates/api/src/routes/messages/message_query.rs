use huddle_database::{Database, Message, User};
use huddle_models::v0;
use huddle_result::Result;
use rocket::{serde::json::Json, State};

/// Fetch one page of messages at a placement, newest first
///
/// Exactly one of `channel`, `parent` or `conversation` selects the
/// placement; `before` and `limit` drive pagination.
#[get("/?<channel>&<parent>&<conversation>&<before>&<limit>")]
pub async fn req(
    db: &State<Database>,
    user: User,
    channel: Option<String>,
    parent: Option<String>,
    conversation: Option<String>,
    before: Option<String>,
    limit: Option<usize>,
) -> Result<Json<v0::MessagePage>> {
    Message::fetch_page(db, &user, channel, parent, conversation, before, limit)
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
    async fn pages_are_newest_first() {
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
            .get(format!("/messages?channel={}", channel.id))
            .header(Header::new("x-session-token", token))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let page: v0::MessagePage = response.into_json().await.expect("`MessagePage`");
        assert_eq!(page.messages.len(), 2);
        assert_eq!(page.messages[0].body, "two");
        assert!(page.is_done);
    }
}
