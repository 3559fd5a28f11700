//! Shorthand syntax parsing.
//!
//! Parses what follows a trigger emoji: `[label]<link>{attrs}` or
//! `[label](link){attrs}`, where the label and attribute block are optional.

use crate::{EmbedAttributes, EmbedRequest};

/// Emoji presentation selector, often typed after an emoji.
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Fields captured from one shorthand occurrence.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedShorthand {
    pub(crate) label: String,
    pub(crate) link: String,
    pub(crate) attrs: EmbedAttributes,
}

impl ParsedShorthand {
    pub(crate) fn into_request(self, emoji: &str) -> EmbedRequest {
        EmbedRequest::new(emoji, self.link)
            .with_label(self.label)
            .with_attributes(self.attrs)
    }
}

/// Parse the text directly after a trigger emoji.
///
/// Returns the parsed fields and the number of bytes consumed, or `None` if
/// no link follows (the emoji is then plain text).
pub(crate) fn parse_after_emoji(s: &str) -> Option<(ParsedShorthand, usize)> {
    let mut pos = s
        .strip_prefix(VARIATION_SELECTOR)
        .map_or(0, |_| VARIATION_SELECTOR.len_utf8());

    let mut label = "";
    if s[pos..].starts_with('[') {
        let (content, consumed) = parse_delimited(&s[pos..], '[', ']')?;
        label = content;
        pos += consumed;
    }

    let link = match s[pos..].chars().next()? {
        '<' => {
            let end = s[pos..].find('>')?;
            let link = &s[pos + 1..pos + end];
            pos += end + 1;
            link
        }
        '(' => {
            let (content, consumed) = parse_delimited(&s[pos..], '(', ')')?;
            pos += consumed;
            content
        }
        _ => return None,
    };

    let mut attrs = EmbedAttributes::default();
    if s[pos..].starts_with('{')
        && let Some(end) = s[pos..].find('}')
    {
        attrs = EmbedAttributes::parse(&s[pos + 1..pos + end]);
        pos += end + 1;
    }

    let parsed = ParsedShorthand {
        label: label.to_owned(),
        link: link.trim().to_owned(),
        attrs,
    };
    Some((parsed, pos))
}

/// Parse a balanced `open ... close` group at the start of `s`.
///
/// Returns the inner content and the bytes consumed, including delimiters.
fn parse_delimited(s: &str, open: char, close: char) -> Option<(&str, usize)> {
    let mut depth = 0usize;

    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some((&s[open.len_utf8()..i], i + close.len_utf8()));
            }
        }
    }

    None
}
