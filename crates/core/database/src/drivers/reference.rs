use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{
    Channel, Conversation, Member, Message, Reaction, Session, User, UserActivity, UserStatus,
    Workspace,
};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub user_status: Arc<Mutex<HashMap<String, UserStatus>>>,
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,

        pub workspaces: Arc<Mutex<HashMap<String, Workspace>>>,
        pub members: Arc<Mutex<HashMap<String, Member>>>,
        pub channels: Arc<Mutex<HashMap<String, Channel>>>,
        pub conversations: Arc<Mutex<HashMap<String, Conversation>>>,

        pub messages: Arc<Mutex<HashMap<String, Message>>>,
        pub reactions: Arc<Mutex<HashMap<String, Reaction>>>,

        pub user_activity: Arc<Mutex<HashMap<String, UserActivity>>>,
    }
);
