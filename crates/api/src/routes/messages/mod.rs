use rocket::Route;

mod message_ack;
mod message_ack_all;
mod message_delete;
mod message_edit;
mod message_fetch;
mod message_query;
mod message_send;

pub fn routes() -> Vec<Route> {
    routes![
        message_send::req,
        message_query::req,
        message_fetch::req,
        message_edit::req,
        message_delete::req,
        message_ack::req,
        message_ack_all::req,
    ]
}
