//! Extra attribute parsing.
//!
//! Parses the trailing `{#id .class key="value"}` block of a shorthand into an
//! ordered attribute list that embedders append to their root element.

use crate::escape::escape_html;

/// Extra HTML attributes attached to an embed.
///
/// Attributes keep their source order so rendering is deterministic. `#id`
/// and `id=...` both set the id, `.class` and `class=...` are merged into a
/// single `class` attribute.
///
/// # Example
///
/// ```
/// use moji_embed::EmbedAttributes;
///
/// let attrs = EmbedAttributes::parse(r#"#post .wide width="500""#);
/// assert_eq!(attrs.id(), Some("post"));
/// assert_eq!(attrs.classes(), ["wide"]);
/// assert_eq!(attrs.get("width"), Some("500"));
/// assert_eq!(attrs.to_html(), " id='post' class='wide' width='500'");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedAttributes {
    id: Option<String>,
    classes: Vec<String>,
    pairs: Vec<(String, String)>,
}

impl EmbedAttributes {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an attribute string (the text between `{` and `}`).
    ///
    /// Supports `#id`, `.class`, `key="value"`, `key='value'` and `key=value`.
    /// Unrecognised characters are skipped.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut attrs = Self::default();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();

            if let Some(rest) = remaining.strip_prefix('#') {
                let end = shorthand_token_end(rest);
                attrs.id = Some(rest[..end].to_owned());
                remaining = &rest[end..];
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let end = shorthand_token_end(rest);
                attrs.push_class(&rest[..end]);
                remaining = &rest[end..];
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                attrs = attrs.with(key, value);
                remaining = rest;
            } else {
                let skip = remaining.chars().next().map_or(1, char::len_utf8);
                remaining = &remaining[skip..];
            }
        }

        attrs
    }

    /// Add an attribute, returning the updated list.
    ///
    /// A repeated key replaces the earlier value in place.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "id" => self.id = Some(value),
            "class" => {
                for class in value.split_whitespace() {
                    self.push_class(class);
                }
            }
            _ => {
                if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
                    slot.1 = value;
                } else {
                    self.pairs.push((key, value));
                }
            }
        }
        self
    }

    /// The `id` attribute, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in source order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Get a key-value attribute by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty() && self.pairs.is_empty()
    }

    /// Render as trailing attribute text: `" id='x' class='a b' key='v'"`.
    ///
    /// Returns an empty string when there are no attributes.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(id) = &self.id {
            push_attr(&mut out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(&mut out, "class", &self.classes.join(" "));
        }
        for (key, value) in &self.pairs {
            push_attr(&mut out, key, value);
        }
        out
    }

    /// Copy with every value HTML-escaped.
    #[must_use]
    pub fn escaped(&self) -> Self {
        Self {
            id: self.id.as_deref().map(|id| escape_html(id).into_owned()),
            classes: self
                .classes
                .iter()
                .map(|c| escape_html(c).into_owned())
                .collect(),
            pairs: self
                .pairs
                .iter()
                .map(|(k, v)| (k.clone(), escape_html(v).into_owned()))
                .collect(),
        }
    }

    fn push_class(&mut self, class: &str) {
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_owned());
        }
    }
}

/// Values containing `'` are double-quoted; if they contain both quote
/// characters, the `'` is written as `&#39;`.
fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push('=');
    match (value.contains('\''), value.contains('"')) {
        (true, false) => {
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        (true, true) => {
            out.push('\'');
            out.push_str(&value.replace('\'', "&#39;"));
            out.push('\'');
        }
        _ => {
            out.push('\'');
            out.push_str(value);
            out.push('\'');
        }
    }
}

/// End of an `#id` or `.class` token.
fn shorthand_token_end(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len())
}

/// Parse `key="value"`, `key='value'` or `key=value`.
///
/// Returns `(key, value, rest)`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end_quote = stripped.find(quote)?;
            return Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let attrs = EmbedAttributes::parse("");
        assert!(attrs.is_empty());
        assert_eq!(attrs.to_html(), "");
    }

    #[test]
    fn test_id_and_classes() {
        let attrs = EmbedAttributes::parse("#my-id .foo .bar");
        assert_eq!(attrs.id(), Some("my-id"));
        assert_eq!(attrs.classes(), ["foo", "bar"]);
    }

    #[test]
    fn test_compact_classes() {
        let attrs = EmbedAttributes::parse("#id.foo.bar");
        assert_eq!(attrs.id(), Some("id"));
        assert_eq!(attrs.classes(), ["foo", "bar"]);
    }

    #[test]
    fn test_quoted_values() {
        let attrs = EmbedAttributes::parse(r#"title="Hello World" alt='x y' width=560"#);
        assert_eq!(attrs.get("title"), Some("Hello World"));
        assert_eq!(attrs.get("alt"), Some("x y"));
        assert_eq!(attrs.get("width"), Some("560"));
    }

    #[test]
    fn test_empty_quoted_value() {
        let attrs = EmbedAttributes::parse(r#"alt="""#);
        assert_eq!(attrs.get("alt"), Some(""));
    }

    #[test]
    fn test_order_is_preserved() {
        let attrs = EmbedAttributes::parse("width=500 height=300 loading=lazy");
        assert_eq!(
            attrs.to_html(),
            " width='500' height='300' loading='lazy'"
        );
    }

    #[test]
    fn test_class_key_merges_with_shorthand_classes() {
        let attrs = EmbedAttributes::parse(r#".wide class="dark wide""#);
        assert_eq!(attrs.classes(), ["wide", "dark"]);
        assert_eq!(attrs.to_html(), " class='wide dark'");
    }

    #[test]
    fn test_id_key_sets_id() {
        let attrs = EmbedAttributes::parse("id=first");
        assert_eq!(attrs.id(), Some("first"));
        assert_eq!(attrs.get("id"), None);
    }

    #[test]
    fn test_repeated_key_replaces_value() {
        let attrs = EmbedAttributes::new().with("width", "1").with("width", "2");
        assert_eq!(attrs.to_html(), " width='2'");
    }

    #[test]
    fn test_unrecognised_characters_skipped() {
        let attrs = EmbedAttributes::parse("ä width=1");
        assert_eq!(attrs.get("width"), Some("1"));
    }

    #[test]
    fn test_apostrophe_in_double_quoted_value() {
        let attrs = EmbedAttributes::parse(r#"title="Don't miss" width=500"#);
        assert_eq!(attrs.get("title"), Some("Don't miss"));
        assert_eq!(attrs.to_html(), r#" title="Don't miss" width='500'"#);
    }

    #[test]
    fn test_both_quote_characters_in_value() {
        let attrs = EmbedAttributes::new().with("title", r#"it's "big""#);
        assert_eq!(attrs.to_html(), r#" title='it&#39;s "big"'"#);
    }

    #[test]
    fn test_escaped() {
        let attrs = EmbedAttributes::parse(r#"title="a 'quoted' <b>""#).escaped();
        assert_eq!(attrs.get("title"), Some("a &#39;quoted&#39; &lt;b&gt;"));
    }
}
