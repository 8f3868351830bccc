//! Error types for Jemaat Core

use thiserror::Error;

/// Main error type for Jemaat operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// State store errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Already registered for this ministry")]
    AlreadyRegistered,

    #[error("Phone number already belongs to a member: {phone}")]
    PhoneTaken { phone: String },

    #[error("Slideshow is full (max {limit} images)")]
    SlideshowFull { limit: usize },

    #[error("Reference to unknown {kind}: {id}")]
    DanglingReference { kind: &'static str, id: String },
}

/// Session and role errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("No member is signed in")]
    NotSignedIn,

    #[error("Administrator role required")]
    AdminRequired,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid birth date, expected DDMMYYYY")]
    InvalidBirthDate,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Image too large: {actual} bytes (max {max})")]
    ImageTooLarge { max: usize, actual: usize },

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Nothing to export")]
    NothingToExport,

    #[error("Amount must be positive")]
    InvalidAmount,
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Connection pool error: {0}")]
    Pool(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Storage(StorageError::Pool(err.to_string()))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Internal(format!("CSV error: {}", err))
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
