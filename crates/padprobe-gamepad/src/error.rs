use thiserror::Error;

/// Error type for controller discovery and polling.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend (SDL2 or subsystems).
    #[error("Backend init failed: {0}")]
    BackendInit(String),
    /// No attached device is classified as a game controller.
    #[error("No game controller found")]
    NoController,
    /// A generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Convenient result alias for controller operations.
pub type Result<T> = std::result::Result<T, Error>;
