#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// User
    pub struct User {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Display name
        pub name: String,
        /// Email address
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub email: Option<String>,
        /// Avatar URL, managed by the identity provider
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub avatar: Option<String>,
        /// Phone number
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub phone: Option<String>,
    }

    /// Entry in the user directory listing
    pub struct UserListEntry {
        /// Unique Id
        pub id: String,
        /// Display name
        pub name: String,
        /// Email address
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub email: Option<String>,
        /// Avatar URL
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub avatar: Option<String>,
        /// Latest recorded status, empty string if none was ever set
        pub user_status: String,
        /// Unix timestamp (ms) this user was created at
        pub created_at: i64,
    }
);

auto_derived!(
    /// Edit a user's profile fields
    #[cfg_attr(feature = "validator", derive(Validate))]
    #[derive(Default)]
    pub struct DataEditUser {
        /// New display name
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub name: Option<String>,
        /// New email address
        #[cfg_attr(feature = "validator", validate(email))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub email: Option<String>,
        /// New avatar URL
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub avatar: Option<String>,
        /// New phone number
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub phone: Option<String>,
    }

    /// Set a user's presence status
    pub struct DataSetStatus {
        /// Either "active" or "inactive"
        pub status: String,
    }
);
