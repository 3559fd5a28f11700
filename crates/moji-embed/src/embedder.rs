//! Link embedder trait and metadata.

use std::fmt;

use crate::shorthand::parse_after_emoji;
use crate::{EmbedRequest, EmbedResult, MalformedLinkError};

/// Social platform an embedder targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Instagram,
    LinkedIn,
    /// Mastodon toot.
    Toot,
    Tumblr,
    Tweet,
}

impl Platform {
    /// Every platform, in registration order of the built-in registry.
    pub const ALL: [Self; 6] = [
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Toot,
        Self::Tumblr,
        Self::Tweet,
    ];

    /// Stable lowercase name used in configuration and CLI output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::Toot => "toot",
            Self::Tumblr => "tumblr",
            Self::Tweet => "tweet",
        }
    }

    /// Look up a platform by name, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// use moji_embed::Platform;
    ///
    /// assert_eq!(Platform::from_name("LinkedIn"), Some(Platform::LinkedIn));
    /// assert_eq!(Platform::from_name("myspace"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of an embedder.
#[derive(Debug)]
pub struct EmbedderMeta {
    /// Platform the embedder targets.
    pub platform: Platform,
    /// Trigger emoji, unique within a registry.
    pub emoji: &'static str,
    /// Asset tags to inject once per document (empty if none).
    pub required_assets: &'static [&'static str],
    /// Example shorthand, for documentation and tests.
    pub example: &'static str,
}

impl EmbedderMeta {
    /// Parse [`example`](Self::example) into a request.
    ///
    /// Returns `None` if the example is not valid shorthand for this emoji.
    #[must_use]
    pub fn example_request(&self) -> Option<EmbedRequest> {
        let rest = self.example.strip_prefix(self.emoji)?;
        let (parsed, _) = parse_after_emoji(rest)?;
        Some(parsed.into_request(self.emoji))
    }
}

/// Handler that turns a post link into embeddable HTML.
///
/// Implementations are stateless: [`render`](Self::render) is a pure function
/// of the request, so one instance can be shared across threads and calls.
///
/// # Example
///
/// ```
/// use moji_embed::{
///     EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform,
/// };
///
/// struct ShoutyTweet;
///
/// static META: EmbedderMeta = EmbedderMeta {
///     platform: Platform::Tweet,
///     emoji: "📣",
///     required_assets: &[],
///     example: "📣<https://twitter.com/a/status/1>",
/// };
///
/// impl LinkEmbedder for ShoutyTweet {
///     fn meta(&self) -> &'static EmbedderMeta {
///         &META
///     }
///
///     fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
///         Ok(format!("<blockquote><a href='{}'></a></blockquote>", request.link()))
///     }
/// }
///
/// let result = ShoutyTweet.render(&EmbedRequest::new("📣", "https://x")).unwrap();
/// assert_eq!(result.html, "<blockquote><a href='https://x'></a></blockquote>");
/// ```
pub trait LinkEmbedder: Send + Sync {
    /// Metadata describing this embedder.
    fn meta(&self) -> &'static EmbedderMeta;

    /// Build the HTML fragment for a request.
    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError>;

    /// Trigger emoji.
    fn emoji(&self) -> &'static str {
        self.meta().emoji
    }

    /// Target platform.
    fn platform(&self) -> Platform {
        self.meta().platform
    }

    /// Render a request into a fragment plus its required assets.
    fn render(&self, request: &EmbedRequest) -> Result<EmbedResult, MalformedLinkError> {
        let html = self.html(request)?;
        tracing::debug!(platform = %self.platform(), link = request.link(), "Rendered embed");
        Ok(EmbedResult::new(html).with_assets(self.meta().required_assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_names_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_name(platform.name()), Some(platform));
        }
    }

    #[test]
    fn test_platform_from_name_trims_and_ignores_case() {
        assert_eq!(Platform::from_name(" TOOT "), Some(Platform::Toot));
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Instagram.to_string(), "instagram");
    }
}
