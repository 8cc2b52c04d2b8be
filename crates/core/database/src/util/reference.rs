use huddle_result::Result;
#[cfg(feature = "rocket-impl")]
use rocket::request::FromParam;

use crate::{Channel, Conversation, Database, Member, Message, User, Workspace};

/// Reference to some object in the database
pub struct Reference<'a> {
    /// Id of object
    pub id: &'a str,
}

impl<'a> Reference<'a> {
    /// Create a Ref from an unchecked string
    pub fn from_unchecked(id: &'a str) -> Reference<'a> {
        Reference { id }
    }

    /// Fetch channel from Ref
    pub async fn as_channel(&self, db: &Database) -> Result<Channel> {
        db.fetch_channel(self.id).await
    }

    /// Fetch conversation from Ref
    pub async fn as_conversation(&self, db: &Database) -> Result<Conversation> {
        db.fetch_conversation(self.id).await
    }

    /// Fetch member from Ref
    pub async fn as_member(&self, db: &Database) -> Result<Member> {
        db.fetch_member(self.id).await
    }

    /// Fetch message from Ref
    pub async fn as_message(&self, db: &Database) -> Result<Message> {
        db.fetch_message(self.id).await
    }

    /// Fetch user from Ref
    pub async fn as_user(&self, db: &Database) -> Result<User> {
        db.fetch_user(self.id).await
    }

    /// Fetch workspace from Ref
    pub async fn as_workspace(&self, db: &Database) -> Result<Workspace> {
        db.fetch_workspace(self.id).await
    }
}

#[cfg(feature = "rocket-impl")]
impl<'r> FromParam<'r> for Reference<'r> {
    type Error = &'r str;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        Ok(Reference::from_unchecked(param))
    }
}
