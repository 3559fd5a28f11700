//! Emoji shorthand expansion for markdown documents.
//!
//! A shorthand occurrence is a registered trigger emoji followed by an
//! optional `[label]`, a link in `<...>` or `(...)`, and an optional
//! `{#id .class key=value}` attribute block:
//!
//! ```text
//! 🐦<https://twitter.com/edballs/status/63623585020915713>
//! 📠[Great advice](linkedin.com/posts/someone_title-activity-6957484429954945024-8q95)
//! ⓣ<https://tinyleavesdream.tumblr.com/post/663071895596548096>{.wide}
//! ```
//!
//! [`ShorthandProcessor`] replaces each occurrence with its embed HTML before
//! the document goes through a markdown renderer, and collects the assets
//! the embeds need so they are injected once per document.

mod fence;
mod parser;
mod processor;

pub(crate) use parser::parse_after_emoji;
pub use processor::ShorthandProcessor;
