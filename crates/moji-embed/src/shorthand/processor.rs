//! Shorthand processor.

use super::fence::FenceTracker;
use super::parser::parse_after_emoji;
use crate::{EmbedRegistry, ShorthandError};

/// Expands emoji shorthand in markdown text.
///
/// The processor keeps per-document state (fence tracking and collected
/// assets); create one per document or per thread.
///
/// # Example
///
/// ```
/// use moji_embed::{EmbedRegistry, ShorthandProcessor};
///
/// let registry = EmbedRegistry::builtin();
/// let mut processor = ShorthandProcessor::new(&registry);
///
/// let output = processor
///     .process("Look: 🐦<https://twitter.com/edballs/status/63623585020915713>")
///     .unwrap();
///
/// assert!(output.starts_with("Look: <blockquote class=twitter-tweet>"));
/// assert_eq!(processor.assets().len(), 1);
/// ```
pub struct ShorthandProcessor<'r> {
    registry: &'r EmbedRegistry,
    fence: FenceTracker,
    escape_html: bool,
    assets: Vec<String>,
    rendered: usize,
}

impl<'r> ShorthandProcessor<'r> {
    /// Create a processor dispatching to the given registry.
    #[must_use]
    pub fn new(registry: &'r EmbedRegistry) -> Self {
        Self {
            registry,
            fence: FenceTracker::default(),
            escape_html: false,
            assets: Vec::new(),
            rendered: 0,
        }
    }

    /// HTML-escape labels, links and attribute values before rendering.
    ///
    /// Off by default: shorthand is interpolated into the embed markup as
    /// written.
    #[must_use]
    pub fn with_escaping(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    /// Replace every shorthand occurrence in `input` with its embed HTML.
    ///
    /// Lines inside fenced code blocks are left unchanged. An emoji that is
    /// not followed by a link is left as plain text. The first malformed
    /// link aborts processing; nothing is returned for the document.
    pub fn process(&mut self, input: &str) -> Result<String, ShorthandError> {
        self.fence = FenceTracker::default();

        let mut output = String::with_capacity(input.len());
        let rendered_before = self.rendered;

        for (idx, raw_line) in input.split_inclusive('\n').enumerate() {
            let (line, ending) = split_line_ending(raw_line);
            let processed = self.process_line(line, idx + 1)?;
            output.push_str(&processed);
            output.push_str(ending);
        }

        tracing::info!(
            embeds = self.rendered - rendered_before,
            assets = self.assets.len(),
            "Expanded shorthand"
        );

        Ok(output)
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<String, ShorthandError> {
        if self.fence.observe(line) || self.fence.in_fence() {
            return Ok(line.to_owned());
        }

        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some((start, embedder)) = self.registry.find_first(remaining) {
            result.push_str(&remaining[..start]);
            let emoji_end = start + embedder.emoji().len();

            let Some((parsed, consumed)) = parse_after_emoji(&remaining[emoji_end..]) else {
                result.push_str(&remaining[start..emoji_end]);
                remaining = &remaining[emoji_end..];
                continue;
            };

            let mut request = parsed.into_request(embedder.emoji());
            if self.escape_html {
                request = request.escaped();
            }

            let embed = embedder
                .render(&request)
                .map_err(|source| ShorthandError::MalformedLink {
                    line: line_num,
                    source,
                })?;
            result.push_str(&embed.html);
            self.collect_assets(embed.required_assets);
            self.rendered += 1;

            remaining = &remaining[emoji_end + consumed..];
        }

        result.push_str(remaining);
        Ok(result)
    }

    fn collect_assets(&mut self, assets: Vec<String>) {
        for asset in assets {
            if !self.assets.contains(&asset) {
                self.assets.push(asset);
            }
        }
    }

    /// Assets required by the embeds rendered so far, in first-seen order.
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Number of shorthand occurrences rendered so far.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered
    }

    /// Append the collected assets to a rendered document, one per line.
    pub fn inject_assets(&self, html: &mut String) {
        for asset in &self.assets {
            if !html.is_empty() && !html.ends_with('\n') {
                html.push('\n');
            }
            html.push_str(asset);
        }
        if !self.assets.is_empty() {
            html.push('\n');
        }
    }
}

/// Split a line into its content and its `\n` or `\r\n` terminator.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
