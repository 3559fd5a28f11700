//! Built-in embedders, one per platform.
//!
//! Each embedder is a stateless unit struct exposed as a `static` so
//! registries can hold `&'static` references to it.

mod facebook;
mod instagram;
mod linkedin;
mod toot;
mod tumblr;
mod tweet;

pub use facebook::FacebookPost;
pub use instagram::InstagramPost;
pub use linkedin::LinkedInPost;
pub use toot::Toot;
pub use tumblr::TumblrPost;
pub use tweet::Tweet;

use crate::LinkEmbedder;

/// Built-in embedders in registration order.
pub static BUILTIN: [&dyn LinkEmbedder; 6] = [
    &FacebookPost,
    &InstagramPost,
    &LinkedInPost,
    &Toot,
    &TumblrPost,
    &Tweet,
];
