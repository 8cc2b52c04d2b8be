use huddle_result::Result;

use crate::Workspace;

mod reference;

#[async_trait]
pub trait AbstractWorkspaces: Sync + Send {
    /// Insert a new workspace into the database
    async fn insert_workspace(&self, workspace: &Workspace) -> Result<()>;

    /// Fetch a workspace by its id
    async fn fetch_workspace(&self, id: &str) -> Result<Workspace>;
}
