#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "rocket")]
pub mod rocket;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    // ? Authentication errors
    /// Missing or invalid session token
    NotAuthenticated,
    /// Caller may not perform this operation
    Unauthorized,

    // ? Reference errors
    /// Dangling reference to some entity
    NotFound {
        entity: String,
    },

    // ? Validation errors
    FailedValidation {
        error: String,
    },
    InvalidOperation,

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
}

impl Error {
    /// Whether this error is a missing entity of the given kind
    pub fn is_not_found(&self, entity: &str) -> bool {
        matches!(&self.error_type, ErrorType::NotFound { entity: e } if e == entity)
    }
}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
macro_rules! create_not_found_error {
    ( $entity: expr ) => {
        create_error!(NotFound {
            entity: $entity.to_string()
        })
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorType;

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(Unauthorized);
        assert!(matches!(error.error_type, ErrorType::Unauthorized));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_not_found_error!("Message");
        assert!(error.is_not_found("Message"));
        assert!(!error.is_not_found("Channel"));
    }
}
