use rocket::Route;

mod activity_list;
mod activity_record;
mod break_report_fetch;
mod summary_fetch;

pub fn routes() -> Vec<Route> {
    routes![
        activity_record::req,
        activity_list::req,
        break_report_fetch::req,
        summary_fetch::req,
    ]
}
