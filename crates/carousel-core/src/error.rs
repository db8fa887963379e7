use thiserror::Error;

/// Errors raised while building or addressing the carousel.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// A required configuration field is missing or empty.
    #[error("invalid carousel configuration: `{field}` must be set and non-empty")]
    ConfigurationInvalid { field: &'static str },

    /// A node the configuration points at is not present in the tree.
    #[error("no node matches selector `{selector}`")]
    MissingNode { selector: String },

    #[error("item position {position} is out of range for {len} items")]
    OutOfRange { position: usize, len: usize },

    #[error("invalid source rewrite pattern `{pattern}`")]
    InvalidRewrite {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A primary image that could not be loaded.
///
/// This is reported to the orchestrator and recovered locally; it is never
/// escalated as a `CarouselError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load `{uri}`: {reason}")]
pub struct LoadError {
    pub uri: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            reason: reason.into(),
        }
    }
}
