use std::ops::Deref;

use huddle_database::{Database, Session, User};
use rocket::local::asynchronous::Client;

pub struct TestHarness {
    client: Client,
    pub db: Database,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        let client = Client::tracked(crate::web().await)
            .await
            .expect("valid rocket instance");

        let db = client
            .rocket()
            .state::<Database>()
            .expect("`Database`")
            .clone();

        TestHarness { client, db }
    }

    /// Create a user along with a valid session token
    pub async fn new_user(&self, name: &str) -> (User, String) {
        let user = User::create(&self.db, name.to_string(), None)
            .await
            .expect("`User`");
        let session = Session::create(&self.db, &user).await.expect("`Session`");

        (user, session.token)
    }
}

impl Deref for TestHarness {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
