//! Emoji to embedder registry.

use std::cmp::Reverse;
use std::fmt;

use crate::embedders::BUILTIN;
use crate::{LinkEmbedder, Platform, RegistryError};

/// Maps trigger emoji to embedders.
///
/// Populated once at startup and read-only afterwards. Holds `&'static`
/// references: embedders own nothing and live for the whole process.
///
/// # Example
///
/// ```
/// use moji_embed::{EmbedRegistry, EmbedRequest, Platform};
///
/// let registry = EmbedRegistry::builtin();
/// let embedder = registry.resolve("ⓣ").unwrap();
/// assert_eq!(embedder.platform(), Platform::Tumblr);
///
/// let request = EmbedRequest::new("ⓣ", "https://tinyleavesdream.tumblr.com/post/663071895596548096");
/// let result = embedder.render(&request).unwrap();
/// assert!(result.html.contains("embed.tumblr.com/embed/post/tinyleavesdream/663071895596548096"));
/// ```
#[derive(Default)]
pub struct EmbedRegistry {
    embedders: Vec<&'static dyn LinkEmbedder>,
}

impl EmbedRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding all built-in embedders.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            embedders: BUILTIN.to_vec(),
        }
    }

    /// Registry holding the built-in embedders for the given platforms only.
    #[must_use]
    pub fn with_platforms(platforms: &[Platform]) -> Self {
        Self {
            embedders: BUILTIN
                .iter()
                .copied()
                .filter(|e| platforms.contains(&e.platform()))
                .collect(),
        }
    }

    /// Register an embedder.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateEmoji`] if another embedder already
    /// uses the same trigger emoji.
    pub fn register(&mut self, embedder: &'static dyn LinkEmbedder) -> Result<(), RegistryError> {
        if let Some(existing) = self.resolve(embedder.emoji()) {
            return Err(RegistryError::DuplicateEmoji {
                emoji: embedder.emoji(),
                existing: existing.platform(),
                rejected: embedder.platform(),
            });
        }
        self.embedders.push(embedder);
        Ok(())
    }

    /// Look up the embedder for a trigger emoji.
    ///
    /// A trailing emoji presentation selector (U+FE0F) is ignored.
    #[must_use]
    pub fn resolve(&self, emoji: &str) -> Option<&'static dyn LinkEmbedder> {
        let emoji = emoji.trim_end_matches('\u{fe0f}');
        self.embedders.iter().copied().find(|e| e.emoji() == emoji)
    }

    /// Find the earliest registered emoji in `text`.
    ///
    /// Returns its byte offset and embedder. When two emoji start at the same
    /// offset the longer one wins.
    pub(crate) fn find_first(&self, text: &str) -> Option<(usize, &'static dyn LinkEmbedder)> {
        self.embedders
            .iter()
            .filter_map(|e| text.find(e.emoji()).map(|pos| (pos, *e)))
            .min_by_key(|(pos, e)| (*pos, Reverse(e.emoji().len())))
    }

    /// Registered embedders in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn LinkEmbedder> + '_ {
        self.embedders.iter().copied()
    }

    /// Registered trigger emoji in registration order.
    pub fn emojis(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.embedders.iter().map(|e| e.emoji())
    }

    /// Number of registered embedders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.embedders.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.embedders.is_empty()
    }
}

impl fmt::Debug for EmbedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.embedders.iter().map(|e| (e.emoji(), e.platform())))
            .finish()
    }
}
