//! LinkedIn post embeds.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::{EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform};

static META: EmbedderMeta = EmbedderMeta {
    platform: Platform::LinkedIn,
    emoji: "📠",
    required_assets: &[],
    example: "📠[My body is ready for this great advice](linkedin.com/posts/reggie-fils-aime-nintendo_former-nintendo-of-america-exec-shares-the-activity-6957484429954945024-8q95)",
};

const POSTS_PATH: &str = "linkedin.com/posts/";
const EMBED_PATH: &str = "linkedin.com/embed/feed/update/";
const EMBED_PREFIX: &str = "https://www.linkedin.com/embed/feed/update/urn:li:activity:";

/// Activity id inside a post slug: the first run of digits between hyphens.
static URD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-(\d+)-").unwrap());

/// Embedded LinkedIn post.
///
/// Accepts a post link (`linkedin.com/posts/<slug>-<id>-<suffix>`), an embed
/// link (`linkedin.com/embed/feed/update/...`, reused unchanged) or a bare
/// activity id. The label is used as the iframe title. There is no slot for
/// extra attributes.
pub struct LinkedInPost;

impl LinkedInPost {
    /// Normalise a link into an embed URL.
    fn embed_url(link: &str) -> Result<Cow<'_, str>, MalformedLinkError> {
        let mut url = Cow::Borrowed(link);

        if link.contains(POSTS_PATH) {
            let urd = URD_RE
                .captures(link)
                .and_then(|caps| caps.get(1))
                .ok_or_else(|| {
                    MalformedLinkError::new(
                        Platform::LinkedIn,
                        link,
                        "expected an activity id between hyphens in the post link",
                    )
                })?;
            url = Cow::Borrowed(urd.as_str());
        }

        if !url.contains(EMBED_PATH) {
            url = Cow::Owned(format!("{EMBED_PREFIX}{url}"));
        }

        Ok(url)
    }
}

impl LinkEmbedder for LinkedInPost {
    fn meta(&self) -> &'static EmbedderMeta {
        &META
    }

    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
        let url = Self::embed_url(request.link())?;
        Ok(format!(
            "<iframe src='{url}' title='{}'></iframe>",
            request.label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_post_link_normalised() {
        assert_eq!(
            LinkedInPost::embed_url("linkedin.com/posts/foo-bar-6957484429954945024-baz").unwrap(),
            "https://www.linkedin.com/embed/feed/update/urn:li:activity:6957484429954945024"
        );
    }

    #[test]
    fn test_embed_link_reused() {
        let link = "https://www.linkedin.com/embed/feed/update/urn:li:activity:123";
        assert_eq!(LinkedInPost::embed_url(link).unwrap(), link);
        assert!(matches!(
            LinkedInPost::embed_url(link).unwrap(),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_bare_activity_id() {
        assert_eq!(
            LinkedInPost::embed_url("6957484429954945024").unwrap(),
            "https://www.linkedin.com/embed/feed/update/urn:li:activity:6957484429954945024"
        );
    }

    #[test]
    fn test_post_link_without_digits() {
        let err = LinkedInPost::embed_url("https://linkedin.com/posts/nodigitshere").unwrap_err();
        assert_eq!(err.platform, Platform::LinkedIn);
        assert_eq!(err.raw_link, "https://linkedin.com/posts/nodigitshere");
    }

    #[test]
    fn test_iframe_title_from_label() {
        let request = EmbedRequest::new("📠", "linkedin.com/posts/foo-bar-6957484429954945024-baz")
            .with_label("Great advice");
        assert_eq!(
            LinkedInPost.html(&request).unwrap(),
            "<iframe src='https://www.linkedin.com/embed/feed/update/urn:li:activity:6957484429954945024' title='Great advice'></iframe>"
        );
    }

    #[test]
    fn test_example_label_and_link() {
        let request = META.example_request().unwrap();
        assert_eq!(request.label(), "My body is ready for this great advice");
        let html = LinkedInPost.html(&request).unwrap();
        assert!(html.contains("urn:li:activity:6957484429954945024'"));
    }
}
