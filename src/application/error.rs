//! Application-level errors

use thiserror::Error;

/// Application errors are the session's fatal conditions.
/// Rejected input is not among them: it is answered with a new prompt.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("terminal I/O failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Extension trait for attaching context to `io::Result`.
pub trait IoResultExt<T> {
    /// Wrap an I/O error with a short description of what was attempted.
    ///
    /// # Example
    /// ```ignore
    /// console.say(&report).io_context("print report")?;
    /// ```
    fn io_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn io_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::io(action, e))
    }
}
