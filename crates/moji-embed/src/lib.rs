//! Social post embeds for emoji link shorthand.
//!
//! This crate turns a trigger emoji plus a post link into the HTML snippet a
//! platform expects for embedding that post:
//!
//! | Emoji | Platform | Output |
//! |---|---|---|
//! | `🅵` | Facebook | post plugin `iframe` |
//! | `📷` | Instagram | `blockquote.instagram-media` |
//! | `📠` | LinkedIn | feed update `iframe` |
//! | `🐘` | Mastodon | `iframe.mastodon-embed` |
//! | `ⓣ` | Tumblr | `div.tumblr-post` |
//! | `🐦` | Twitter | `blockquote.twitter-tweet` |
//!
//! # Architecture
//!
//! - [`LinkEmbedder`]: stateless per-platform strategy described by static
//!   [`EmbedderMeta`]; renders an [`EmbedRequest`] into an [`EmbedResult`] or
//!   fails with [`MalformedLinkError`]
//! - [`EmbedRegistry`]: maps trigger emoji to embedders
//! - [`ShorthandProcessor`]: expands shorthand occurrences in markdown text
//!   and collects the `<script>` assets the embeds need
//!
//! # Example
//!
//! ```
//! use moji_embed::{EmbedRegistry, ShorthandProcessor};
//!
//! let registry = EmbedRegistry::builtin();
//! let mut processor = ShorthandProcessor::new(&registry);
//!
//! let mut html = processor
//!     .process("🐘<https://universeodon.com/@TheTweetOfGod/109597493614530062>")
//!     .unwrap();
//! processor.inject_assets(&mut html);
//!
//! assert!(html.contains("109597493614530062/embed"));
//! assert!(html.contains("toot.wales/embed.js"));
//! ```

mod attrs;
mod embedder;
pub mod embedders;
mod error;
mod escape;
mod registry;
mod request;
mod shorthand;

pub use attrs::EmbedAttributes;
pub use embedder::{EmbedderMeta, LinkEmbedder, Platform};
pub use error::{MalformedLinkError, RegistryError, ShorthandError};
pub use escape::escape_html;
pub use registry::EmbedRegistry;
pub use request::{EmbedRequest, EmbedResult};
pub use shorthand::ShorthandProcessor;
