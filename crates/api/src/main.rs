#[macro_use]
extern crate rocket;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

pub mod routes;
pub mod util;

use std::str::FromStr;

use huddle_database::DatabaseInfo;
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;

/// Build the web server
pub async fn web() -> Rocket<Build> {
    let config = huddle_config::config().await;

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Put", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Database connection failed.");

    let figment = rocket::Config::figment().merge((
        "workers",
        config.api.workers.max_concurrent_connections,
    ));

    routes::mount(rocket::custom(figment))
        .mount("/", rocket_cors::catch_all_options_routes())
        .manage(db)
        .manage(cors.clone())
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    pretty_env_logger::init();
    huddle_config::init().await;

    info!(
        "Starting Huddle API server [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    web().await
}
