//! Lifecycle-specific error types

use thiserror::Error;

/// Errors that can occur during lifecycle operations
///
/// Invalid-state errors (`NotMounted`, `AlreadyMounted`) are programming
/// errors: they surface immediately and are never recovered internally.
#[derive(Debug, Error)]
pub enum AppError {
    /// A lifecycle operation ran before mount completed
    #[error("App '{app}' not mounted. Mount using 'mount'")]
    NotMounted {
        /// Name of the application
        app: String,
    },

    /// Mount was invoked a second time
    #[error("App '{app}' already mounted")]
    AlreadyMounted {
        /// Name of the application
        app: String,
    },

    /// The descriptor failed validation at construction
    #[error("Invalid descriptor: {message}")]
    InvalidDescriptor {
        /// What was wrong with it
        message: String,
    },

    /// A lifecycle hook failed
    #[error("Hook failed during {phase}: {source}")]
    Hook {
        /// The lifecycle phase whose hook failed
        phase: String,
        #[source]
        source: anyhow::Error,
    },

    /// Binding the listener failed
    #[error("Failed to bind '{addr}': {source}")]
    Bind {
        /// The address that could not be bound
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server failed while serving
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl AppError {
    /// Create a not-mounted error
    pub fn not_mounted(app: impl Into<String>) -> Self {
        Self::NotMounted { app: app.into() }
    }

    /// Create an already-mounted error
    pub fn already_mounted(app: impl Into<String>) -> Self {
        Self::AlreadyMounted { app: app.into() }
    }

    /// Create a descriptor validation error
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }

    /// Create a hook failure error
    pub fn hook(phase: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Hook {
            phase: phase.into(),
            source,
        }
    }
}

/// A specialized Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, AppError>;
