//! Error types for the carousel navigator

use thiserror::Error;

use crate::event::Event;

/// Boxed error returned by animation handlers and option providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by [`crate::Navigator`] operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CarouselError {
    /// No animation handler is registered under the identifier.
    #[error("Animation not found: {id}")]
    AnimationNotFound { id: String },

    /// Event name is neither `show` nor `hide`.
    #[error("Unknown event: {name}")]
    UnknownEvent { name: String },

    /// An option provider returned something other than a JSON object or null.
    #[error("Option provider for '{id}' ({event}) returned {found}, expected an object")]
    InvalidOptions {
        id: String,
        event: Event,
        found: &'static str,
    },

    /// A navigator needs at least one item to index into.
    #[error("Item sequence is empty")]
    EmptySequence,

    /// An animation handler failed; dispatch for the call stopped here.
    #[error("Animation handler '{id}' failed: {source}")]
    Handler {
        id: String,
        #[source]
        source: BoxError,
    },

    /// An option provider failed while building options.
    #[error("Option provider for '{id}' ({event}) failed: {source}")]
    Provider {
        id: String,
        event: Event,
        #[source]
        source: BoxError,
    },
}

impl CarouselError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::AnimationNotFound { .. } => "lookup",
            Self::UnknownEvent { .. } | Self::EmptySequence | Self::InvalidOptions { .. } => {
                "argument"
            }
            Self::Handler { .. } | Self::Provider { .. } => "callback",
        }
    }
}
