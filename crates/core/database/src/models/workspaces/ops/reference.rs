use huddle_result::Result;

use crate::{ReferenceDb, Workspace};

use super::AbstractWorkspaces;

#[async_trait]
impl AbstractWorkspaces for ReferenceDb {
    /// Insert a new workspace into the database
    async fn insert_workspace(&self, workspace: &Workspace) -> Result<()> {
        let mut workspaces = self.workspaces.lock().await;
        if workspaces.contains_key(&workspace.id) {
            Err(create_database_error!("insert", "workspaces"))
        } else {
            workspaces.insert(workspace.id.to_string(), workspace.clone());
            Ok(())
        }
    }

    /// Fetch a workspace by its id
    async fn fetch_workspace(&self, id: &str) -> Result<Workspace> {
        let workspaces = self.workspaces.lock().await;
        workspaces
            .get(id)
            .cloned()
            .ok_or_else(|| create_not_found_error!("Workspace"))
    }
}
