use huddle_result::Result;

use crate::{Reaction, ReferenceDb};

use super::AbstractReactions;

#[async_trait]
impl AbstractReactions for ReferenceDb {
    /// Insert a new reaction into the database
    async fn insert_reaction(&self, reaction: &Reaction) -> Result<()> {
        let mut reactions = self.reactions.lock().await;
        if reactions.contains_key(&reaction.id) {
            Err(create_database_error!("insert", "reactions"))
        } else {
            reactions.insert(reaction.id.to_string(), reaction.clone());
            Ok(())
        }
    }

    /// Fetch all reactions on a message, in insertion order
    async fn fetch_reactions_by_message(&self, message_id: &str) -> Result<Vec<Reaction>> {
        let reactions = self.reactions.lock().await;
        let mut rows: Vec<Reaction> = reactions
            .values()
            .filter(|reaction| reaction.message_id == message_id)
            .cloned()
            .collect();

        rows.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rows)
    }

    /// Find a specific member's reaction with a given value
    async fn fetch_reaction_by(
        &self,
        message_id: &str,
        member_id: &str,
        value: &str,
    ) -> Result<Option<Reaction>> {
        let reactions = self.reactions.lock().await;
        Ok(reactions
            .values()
            .find(|reaction| {
                reaction.message_id == message_id
                    && reaction.member_id == member_id
                    && reaction.value == value
            })
            .cloned())
    }

    /// Delete a reaction by its id
    async fn delete_reaction(&self, id: &str) -> Result<()> {
        let mut reactions = self.reactions.lock().await;
        if reactions.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_not_found_error!("Reaction"))
        }
    }
}
