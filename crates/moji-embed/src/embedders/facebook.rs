//! Facebook post embeds.

use crate::{EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform};

static META: EmbedderMeta = EmbedderMeta {
    platform: Platform::Facebook,
    // F in a square, like the logo
    emoji: "🅵",
    required_assets: &[],
    example: "🅵<https://www.facebook.com/TheXKCD/posts/pfbid0KZZoxocUJYYE8NnZUHtpDkmr7Jw1qpMBE4QpFKBNBMVJByNX9iPctUfpRCmCwCiMl>",
};

/// Embedded Facebook post, rendered through the post plugin iframe.
///
/// The label is ignored: embedded posts have no alt text. Any link is
/// accepted as-is, including an empty one; the plugin resolves it.
pub struct FacebookPost;

impl LinkEmbedder for FacebookPost {
    fn meta(&self) -> &'static EmbedderMeta {
        &META
    }

    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
        Ok(format!(
            "<iframe src='https://www.facebook.com/plugins/post.php?href={}' class=facebook-embed{}></iframe>",
            request.link(),
            request.html_params()
        ))
    }
}
