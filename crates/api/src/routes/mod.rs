use rocket::{Build, Rocket};

mod activity;
mod messages;
mod root;
mod users;
mod workspaces;

pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", routes![root::req])
        .mount("/messages", messages::routes())
        .mount("/workspaces", workspaces::routes())
        .mount("/users", users::routes())
        .mount("/activity", activity::routes())
}
