//! Twitter embeds.

use crate::{EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform};

static META: EmbedderMeta = EmbedderMeta {
    platform: Platform::Tweet,
    emoji: "🐦",
    required_assets: &[
        "<script async src='https://platform.twitter.com/widgets.js' charset='utf-8'></script>",
    ],
    example: "🐦<https://twitter.com/edballs/status/63623585020915713>",
};

/// Embedded tweet, upgraded client-side by the Twitter widgets script.
///
/// The label is ignored. Any link is accepted as-is, including an empty one.
pub struct Tweet;

impl LinkEmbedder for Tweet {
    fn meta(&self) -> &'static EmbedderMeta {
        &META
    }

    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
        Ok(format!(
            "<blockquote class=twitter-tweet{}><a href='{}'></a></blockquote>",
            request.html_params(),
            request.link()
        ))
    }
}
