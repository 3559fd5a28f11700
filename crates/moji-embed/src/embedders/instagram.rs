//! Instagram post embeds.

use std::sync::LazyLock;

use regex::Regex;

use crate::{EmbedRequest, EmbedderMeta, LinkEmbedder, MalformedLinkError, Platform};

static META: EmbedderMeta = EmbedderMeta {
    platform: Platform::Instagram,
    emoji: "📷",
    required_assets: &["<script async src='//www.instagram.com/embed.js'></script>"],
    example: "📷<https://www.instagram.com/p/CkYXXhlt5N7>",
};

static POST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?instagram\.com/p/(\w*)").unwrap()
});

/// Embedded Instagram post.
///
/// The link must look like `[http(s)://][www.]instagram.com/p/<post id>`.
/// The label becomes the text of the fallback link inside the blockquote.
pub struct InstagramPost;

impl LinkEmbedder for InstagramPost {
    fn meta(&self) -> &'static EmbedderMeta {
        &META
    }

    fn html(&self, request: &EmbedRequest) -> Result<String, MalformedLinkError> {
        let link = request.link();
        let caps = POST_RE.captures(link).ok_or_else(|| {
            MalformedLinkError::new(
                Platform::Instagram,
                link,
                "expected instagram.com/p/<post id>",
            )
        })?;
        let post_id = &caps[1];
        let permalink = format!(
            "https://www.instagram.com/p/{post_id}/?utm_source=ig_embed&amp;utm_campaign=loading"
        );

        Ok(format!(
            "<blockquote class='instagram-media' data-instgrm-captioned data-instgrm-permalink='{permalink}' data-instgrm-version='14'{}><a href='{permalink}'>{}</a></blockquote>",
            request.html_params(),
            request.label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::EmbedAttributes;

    #[test]
    fn test_post_id_extracted() {
        let request = EmbedRequest::new("📷", "https://www.instagram.com/p/CkYXXhlt5N7")
            .with_label("Look at this");
        assert_eq!(
            InstagramPost.html(&request).unwrap(),
            "<blockquote class='instagram-media' data-instgrm-captioned \
             data-instgrm-permalink='https://www.instagram.com/p/CkYXXhlt5N7/?utm_source=ig_embed&amp;utm_campaign=loading' \
             data-instgrm-version='14'><a href='https://www.instagram.com/p/CkYXXhlt5N7/?utm_source=ig_embed&amp;utm_campaign=loading'>Look at this</a></blockquote>"
        );
    }

    #[test]
    fn test_scheme_and_www_optional() {
        for link in [
            "instagram.com/p/abc123",
            "http://instagram.com/p/abc123",
            "www.instagram.com/p/abc123/",
        ] {
            let html = InstagramPost.html(&EmbedRequest::new("📷", link)).unwrap();
            assert!(html.contains("instagram.com/p/abc123/?utm_source"), "{link}");
        }
    }

    #[test]
    fn test_trailing_path_ignored() {
        let request = EmbedRequest::new("📷", "https://www.instagram.com/p/CkYXXhlt5N7/?img_index=1");
        let html = InstagramPost.html(&request).unwrap();
        assert!(html.contains("/p/CkYXXhlt5N7/?utm_source"));
        assert!(!html.contains("img_index"));
    }

    #[test]
    fn test_extra_attributes_on_blockquote() {
        let request = EmbedRequest::new("📷", "instagram.com/p/abc")
            .with_attributes(EmbedAttributes::parse("#post width=400"));
        assert_eq!(
            InstagramPost.html(&request).unwrap(),
            "<blockquote class='instagram-media' data-instgrm-captioned \
             data-instgrm-permalink='https://www.instagram.com/p/abc/?utm_source=ig_embed&amp;utm_campaign=loading' \
             data-instgrm-version='14' id='post' width='400'><a href='https://www.instagram.com/p/abc/?utm_source=ig_embed&amp;utm_campaign=loading'></a></blockquote>"
        );
    }

    #[test]
    fn test_not_a_post_url() {
        let err = InstagramPost
            .html(&EmbedRequest::new("📷", "https://instagram.com/notaposturl"))
            .unwrap_err();
        assert_eq!(err.platform, Platform::Instagram);
        assert_eq!(err.raw_link, "https://instagram.com/notaposturl");
    }

    #[test]
    fn test_other_domain_rejected() {
        let result = InstagramPost.html(&EmbedRequest::new("📷", "https://example.com/p/abc"));
        assert!(result.is_err());
    }
}
