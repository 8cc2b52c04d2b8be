mod activity;
mod messages;
mod users;
mod workspaces;

pub use activity::*;
pub use messages::*;
pub use users::*;
pub use workspaces::*;
