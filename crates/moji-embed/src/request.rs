//! Embed request and result types.

use crate::EmbedAttributes;
use crate::escape::escape_html;

/// A single shorthand occurrence to render.
///
/// Immutable once built; the link is raw user-supplied text.
///
/// # Example
///
/// ```
/// use moji_embed::{EmbedAttributes, EmbedRequest};
///
/// let request = EmbedRequest::new("🐦", "https://twitter.com/edballs/status/63623585020915713")
///     .with_label("A tweet")
///     .with_attributes(EmbedAttributes::parse("data-theme=dark"));
///
/// assert_eq!(request.label(), "A tweet");
/// assert_eq!(request.attributes().get("data-theme"), Some("dark"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedRequest {
    emoji: String,
    label: String,
    link: String,
    attributes: EmbedAttributes,
}

impl EmbedRequest {
    /// Create a request with an empty label and no extra attributes.
    #[must_use]
    pub fn new(emoji: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            label: String::new(),
            link: link.into(),
            attributes: EmbedAttributes::default(),
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the extra attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: EmbedAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Trigger emoji.
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Label text (empty if none was given).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw link text.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Extra attributes for the root element.
    #[must_use]
    pub fn attributes(&self) -> &EmbedAttributes {
        &self.attributes
    }

    /// Trailing attribute text for the root element.
    pub(crate) fn html_params(&self) -> String {
        self.attributes.to_html()
    }

    /// Copy with label, link and attribute values HTML-escaped.
    #[must_use]
    pub fn escaped(&self) -> Self {
        Self {
            emoji: self.emoji.clone(),
            label: escape_html(&self.label).into_owned(),
            link: escape_html(&self.link).into_owned(),
            attributes: self.attributes.escaped(),
        }
    }
}

/// Rendered embed: one HTML fragment plus the assets it needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedResult {
    /// HTML fragment with a single root element.
    pub html: String,
    /// Tags (usually `<script>` includes) to inject once per document.
    pub required_assets: Vec<String>,
}

impl EmbedResult {
    /// Create a result with no required assets.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            required_assets: Vec::new(),
        }
    }

    /// Attach required assets.
    #[must_use]
    pub fn with_assets(mut self, assets: &[&str]) -> Self {
        self.required_assets
            .extend(assets.iter().map(|a| (*a).to_owned()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_defaults() {
        let request = EmbedRequest::new("🐦", "https://x");
        assert_eq!(request.emoji(), "🐦");
        assert_eq!(request.label(), "");
        assert_eq!(request.link(), "https://x");
        assert!(request.attributes().is_empty());
        assert_eq!(request.html_params(), "");
    }

    #[test]
    fn test_escaped_request() {
        let request = EmbedRequest::new("🐦", "https://x?a=1&b='2'").with_label("<b>hi</b>");
        let escaped = request.escaped();
        assert_eq!(escaped.link(), "https://x?a=1&amp;b=&#39;2&#39;");
        assert_eq!(escaped.label(), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(escaped.emoji(), "🐦");
    }

    #[test]
    fn test_result_with_assets() {
        let result = EmbedResult::new("<div></div>").with_assets(&["<script></script>"]);
        assert_eq!(result.html, "<div></div>");
        assert_eq!(result.required_assets, vec!["<script></script>".to_owned()]);
    }
}
