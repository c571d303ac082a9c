//! Crate-wide error types.
//!
//! The resolution core (normalize / score / resolve) is total and never
//! returns an error; everything that can fail lives at the collaborator
//! boundary and surfaces here.
//!
//! # Design
//!
//! - [`Error`]: top-level error enum for the save flow
//! - [`crate::domain::ApiError`]: remote collaborator failures, wrapped via `#[from]`
//! - All errors implement `std::error::Error` for compatibility

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the save flow.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A remote call (search, playlist read or write) failed
    #[error("API error: {0}")]
    Api(#[from] crate::domain::ApiError),

    /// The catalog search returned no candidates at all
    #[error("no track found for query {query:?}")]
    TrackNotFound { query: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::domain::ApiError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Api(e).context(ctx))
    }
}
