//! Error types for embed rendering.

use crate::Platform;

/// The link does not have the shape the platform's embed needs.
///
/// Only Instagram, LinkedIn, Toot and Tumblr validate their links. Facebook
/// and Tweet accept any string and never return this error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed {platform} link '{raw_link}': {reason}")]
pub struct MalformedLinkError {
    /// Platform whose embedder rejected the link.
    pub platform: Platform,
    /// Link exactly as it was supplied.
    pub raw_link: String,
    /// What was expected.
    pub reason: &'static str,
}

impl MalformedLinkError {
    pub(crate) fn new(platform: Platform, raw_link: &str, reason: &'static str) -> Self {
        Self {
            platform,
            raw_link: raw_link.to_owned(),
            reason,
        }
    }
}

/// Error raised while populating an [`EmbedRegistry`](crate::EmbedRegistry).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two embedders claim the same trigger emoji.
    #[error("emoji {emoji} is already registered for {existing}, cannot register {rejected}")]
    DuplicateEmoji {
        /// The contested emoji.
        emoji: &'static str,
        /// Platform already holding the emoji.
        existing: Platform,
        /// Platform that was refused.
        rejected: Platform,
    },
}

/// Error raised while expanding shorthand in a document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShorthandError {
    /// A shorthand occurrence carried a link its embedder rejected.
    #[error("line {line}: {source}")]
    MalformedLink {
        /// Line of the offending occurrence (1-indexed).
        line: usize,
        /// Underlying embedder error.
        source: MalformedLinkError,
    },
}
