//! Error types for globls

/// Main error type for listing operations
#[derive(Debug, thiserror::Error)]
pub enum GloblsError {
    /// Filter pattern rejected by the glob compiler
    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Traversal failure (unreadable directory, vanished entry)
    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for globls operations
pub type Result<T> = std::result::Result<T, GloblsError>;
