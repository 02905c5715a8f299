//! Server startup errors.

/// Failures that stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
