use huddle_result::Result;

use crate::Reaction;

mod reference;

#[async_trait]
pub trait AbstractReactions: Sync + Send {
    /// Insert a new reaction into the database
    async fn insert_reaction(&self, reaction: &Reaction) -> Result<()>;

    /// Fetch all reactions on a message, in insertion order
    async fn fetch_reactions_by_message(&self, message_id: &str) -> Result<Vec<Reaction>>;

    /// Find a specific member's reaction with a given value
    async fn fetch_reaction_by(
        &self,
        message_id: &str,
        member_id: &str,
        value: &str,
    ) -> Result<Option<Reaction>>;

    /// Delete a reaction by its id
    async fn delete_reaction(&self, id: &str) -> Result<()>;
}
