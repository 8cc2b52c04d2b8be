mod channels;
mod conversations;
mod members;
mod messages;
mod reactions;
mod sessions;
mod user_activity;
mod user_status;
mod users;
mod workspaces;

pub use channels::*;
pub use conversations::*;
pub use members::*;
pub use messages::*;
pub use reactions::*;
pub use sessions::*;
pub use user_activity::*;
pub use user_status::*;
pub use users::*;
pub use workspaces::*;

use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + channels::AbstractChannels
    + conversations::AbstractConversations
    + members::AbstractMembers
    + messages::AbstractMessages
    + reactions::AbstractReactions
    + sessions::AbstractSessions
    + user_activity::AbstractUserActivity
    + user_status::AbstractUserStatus
    + users::AbstractUsers
    + workspaces::AbstractWorkspaces
{
}

impl AbstractDatabase for ReferenceDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
        }
    }
}
