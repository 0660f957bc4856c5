//! Error types for port resolution.

/// Errors that can occur while resolving a port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// An explicit port name that is not in the port table.
    #[error("unsupported port: '{name}'")]
    UnknownVariant {
        /// The name as requested.
        name: String,
    },

    /// No explicit name was given and the platform has no port family.
    #[error("unsupported platform: '{platform}'")]
    UnknownPlatform {
        /// The effective platform identifier.
        platform: String,
    },
}

/// Result type for port resolution.
pub type Result<T> = std::result::Result<T, PortError>;
