use thiserror::Error;

/// Errors that can occur while talking to the remote drive
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unsupported method: {method}")]
    UnsupportedMethod { method: String },

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Remote error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("Not a folder: {path}")]
    NotAFolder { path: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    /// Raised by host-supplied `DirectoryCache` implementations
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// Raised by host-supplied `AccountStore` implementations
    #[error("Account store error: {message}")]
    AccountStore { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;
