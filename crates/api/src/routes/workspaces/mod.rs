use rocket::Route;

mod recent_fetch;
mod unreads_fetch;

pub fn routes() -> Vec<Route> {
    routes![recent_fetch::req, unreads_fetch::req]
}
