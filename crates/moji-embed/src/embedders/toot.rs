//! Mastodon toot embeds.

use std::sync::LazyLock;

use regex::Regex;

use crate::{EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform};

static META: EmbedderMeta = EmbedderMeta {
    platform: Platform::Toot,
    // Elephant, like the Mastodon mascot
    emoji: "🐘",
    required_assets: &["<script src='https://toot.wales/embed.js' async='async'></script>"],
    example: "🐘<https://universeodon.com/@TheTweetOfGod/109597493614530062>",
};

/// `<host>.com/@<user>/<status id>` with an optional `/embed` suffix.
static STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)?\w*\.com/@\w*/\d*(/embed)?").unwrap());

/// Embedded Mastodon toot.
///
/// The iframe always points at the status `/embed` page; the suffix is
/// appended only when the link does not already carry it. The label is
/// ignored: embedded toots have no alt text.
pub struct Toot;

impl LinkEmbedder for Toot {
    fn meta(&self) -> &'static EmbedderMeta {
        &META
    }

    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
        let link = request.link();
        let caps = STATUS_RE.captures(link).ok_or_else(|| {
            MalformedLinkError::new(Platform::Toot, link, "expected <host>.com/@<user>/<status id>")
        })?;
        let suffix = if caps.get(1).is_some() { "" } else { "/embed" };

        Ok(format!(
            "<iframe src='{link}{suffix}' class='mastodon-embed'{}></iframe>",
            request.html_params()
        ))
    }
}
