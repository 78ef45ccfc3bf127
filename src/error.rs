//! Error types for myq.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for myq operations.
#[derive(Error, Debug)]
pub enum MyqError {
    /// Connection errors reported by the server during connect
    /// (host unreachable, auth failed, unknown database, etc.)
    #[error("{}", format_server_error(.code.as_deref(), .message))]
    Connection {
        /// Server error code, when the driver reports one (e.g. "1045").
        code: Option<String>,
        message: String,
    },

    /// Query execution errors (syntax errors, constraint violations,
    /// connectivity loss mid-statement, etc.)
    #[error("{}", format_server_error(.code.as_deref(), .message))]
    Query {
        /// Server error code, when the driver reports one (e.g. "1064").
        code: Option<String>,
        message: String,
    },

    /// Local validation errors that never reach the server
    /// (not connected, empty query text).
    #[error("{0}")]
    Usage(String),

    /// Configuration errors (invalid config file, bad field values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (terminal setup failures, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_server_error(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("{message} (error code: {code})"),
        None => message.to_string(),
    }
}

impl MyqError {
    /// Creates a connection error without a server code.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection {
            code: None,
            message: msg.into(),
        }
    }

    /// Creates a query error without a server code.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query {
            code: None,
            message: msg.into(),
        }
    }

    /// Creates a usage error with the given message.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string, used as the dialog title.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "Connection Error",
            Self::Query { .. } => "Query Error",
            Self::Usage(_) => "Usage Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Returns true for errors caused by user input rather than the server.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Result type alias using MyqError.
pub type Result<T> = std::result::Result<T, MyqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_with_code() {
        let err = MyqError::Connection {
            code: Some("1045".to_string()),
            message: "Access denied for user 'root'@'localhost'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Access denied for user 'root'@'localhost' (error code: 1045)"
        );
        assert_eq!(err.category(), "Connection Error");
    }

    #[test]
    fn test_connection_error_without_code() {
        let err = MyqError::connection("Cannot connect to localhost:3306");
        assert_eq!(err.to_string(), "Cannot connect to localhost:3306");
    }

    #[test]
    fn test_query_error_with_code() {
        let err = MyqError::Query {
            code: Some("1064".to_string()),
            message: "You have an error in your SQL syntax".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "You have an error in your SQL syntax (error code: 1064)"
        );
        assert_eq!(err.category(), "Query Error");
    }

    #[test]
    fn test_usage_error() {
        let err = MyqError::usage("Please enter a SQL query.");
        assert_eq!(err.to_string(), "Please enter a SQL query.");
        assert_eq!(err.category(), "Usage Error");
        assert!(err.is_usage());
    }

    #[test]
    fn test_config_error() {
        let err = MyqError::config("invalid port value");
        assert_eq!(err.to_string(), "Configuration error: invalid port value");
        assert_eq!(err.category(), "Configuration Error");
        assert!(!err.is_usage());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MyqError>();
    }
}
