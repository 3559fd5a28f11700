//! Fenced code block tracking.
//!
//! Shorthand inside fenced code is documentation, not content, and must be
//! left as written.

/// Tracks whether the current line is inside a fenced code block.
///
/// A fence opens with three or more backticks or tildes and closes with a
/// line of the same character at least as long as the opener.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn observe(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some((marker, len)) = fence_marker(trimmed) else {
            return false;
        };

        match self.open {
            Some((open_marker, open_len)) => {
                let closes = marker == open_marker
                    && len >= open_len
                    && trimmed[len..].trim().is_empty();
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                self.open = Some((marker, len));
                true
            }
        }
    }
}

/// Fence character and run length at the start of a trimmed line.
fn fence_marker(trimmed: &str) -> Option<(char, usize)> {
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    (len >= 3).then_some((marker, len))
}
