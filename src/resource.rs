//! Lifecycle of a single asynchronous fetch.

/// Fallback message when an error carries no text of its own.
pub const GENERIC_ERROR: &str = "Error occurred";

/// Not requested, in flight, succeeded with data, or failed with a message.
///
/// Exactly one variant is active per state slot. Every fetch re-enters
/// `Loading` before it settles on `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resource<T> {
    #[default]
    Empty,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    /// Build an `Error` from any displayable failure, falling back to
    /// [`GENERIC_ERROR`] when the message is empty.
    pub fn from_error(err: &impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Resource::Error(GENERIC_ERROR.to_string())
        } else {
            Resource::Error(message)
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            Resource::Empty | Resource::Loading | Resource::Error(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            Resource::Empty | Resource::Loading | Resource::Success(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// True once a fetch has produced its outcome.
    pub fn is_settled(&self) -> bool {
        match self {
            Resource::Success(_) | Resource::Error(_) => true,
            Resource::Empty | Resource::Loading => false,
        }
    }
}
