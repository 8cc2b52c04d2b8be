mod reference;

use huddle_config::config;

pub use self::reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Auto-detect the database in use and create an empty testing database
    Test(String),
    /// Use the mock database
    Reference,
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    #[async_recursion]
    pub async fn connect(self) -> Result<Database, String> {
        let config = config().await;

        match self {
            DatabaseInfo::Auto => {
                if !config.database.uri.is_empty() {
                    // Persistence is delegated to the managed store which is
                    // provisioned out-of-process; this build only ships the
                    // in-memory reference driver.
                    return Err(format!(
                        "No driver available for `{}`.",
                        config.database.uri
                    ));
                }

                DatabaseInfo::Reference.connect().await
            }
            DatabaseInfo::Test(_) => DatabaseInfo::Reference.connect().await,
            DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
        }
    }
}
