//! Tumblr post embeds.

use std::sync::LazyLock;

use regex::Regex;

use crate::{EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform};

static META: EmbedderMeta = EmbedderMeta {
    platform: Platform::Tumblr,
    emoji: "ⓣ",
    required_assets: &["<script async src='https://assets.tumblr.com/post.js'></script>"],
    example: "ⓣ<https://tinyleavesdream.tumblr.com/post/663071895596548096>",
};

/// `<username>.tumblr.com/post/<post id>`, anything after the id is ignored.
static POST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?([\w\-]*)\.tumblr\.com/post/(\d*)(?:/.*)?").unwrap()
});

/// Embedded Tumblr post.
///
/// The label is ignored: embedded posts have no alt text.
pub struct TumblrPost;

impl LinkEmbedder for TumblrPost {
    fn meta(&self) -> &'static EmbedderMeta {
        &META
    }

    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
        let link = request.link();
        let caps = POST_RE.captures(link).ok_or_else(|| {
            MalformedLinkError::new(
                Platform::Tumblr,
                link,
                "expected <username>.tumblr.com/post/<post id>",
            )
        })?;
        let (username, post_id) = (&caps[1], &caps[2]);

        Ok(format!(
            "<div class='tumblr-post' data-href='https://embed.tumblr.com/embed/post/{username}/{post_id}'{}><a href='{link}'></a></div>",
            request.html_params()
        ))
    }
}
