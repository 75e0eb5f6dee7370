//! Host startup and serve failures.

/// Errors that stop the host process.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    /// The `[package.metadata.leptos]` configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not bind.
    #[error("bind failed: {0}")]
    Bind(std::io::Error),

    /// The server loop exited with an error.
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
