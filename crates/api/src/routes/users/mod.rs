use rocket::Route;

mod user_edit;
mod user_list;
mod user_remove;
mod user_status_set;

pub fn routes() -> Vec<Route> {
    routes![
        user_list::req,
        user_edit::req,
        user_remove::req,
        user_status_set::req,
    ]
}
