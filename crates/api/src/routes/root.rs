use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct NodeInfo {
    pub name: String,
    pub version: String,
}

/// Node information, no authentication required
#[get("/")]
pub async fn req() -> Json<NodeInfo> {
    Json(NodeInfo {
        name: "huddle".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod test {
    use crate::{routes::root::NodeInfo, util::test::TestHarness};
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fetch_root() {
        let harness = TestHarness::new().await;

        let response = harness.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let info: NodeInfo = response.into_json().await.expect("`NodeInfo`");
        assert_eq!(info.name, "huddle");
    }
}
