auto_derived!(
    /// Workspace
    pub struct Workspace {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Workspace name
        pub name: String,
        /// Id of the owning user
        pub owner: String,
    }

    /// A user's membership within one workspace
    pub struct Member {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the user
        pub user_id: String,
        /// Id of the workspace
        pub workspace_id: String,
        /// Role within the workspace
        pub role: MemberRole,
    }

    /// Role carried by a workspace member
    #[derive(Default)]
    #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
    pub enum MemberRole {
        Admin,
        #[default]
        Member,
    }

    /// Named topic-scoped message stream within a workspace
    pub struct Channel {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the workspace
        pub workspace_id: String,
        /// Channel name
        pub name: String,
    }

    /// Direct-message pairing between two members
    pub struct Conversation {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the workspace
        pub workspace_id: String,
        /// First participating member
        pub member_one_id: String,
        /// Second participating member
        pub member_two_id: String,
    }
);
