use std::time::{Duration, Instant};

/// Typewriter reveal of a block of text.
///
/// How much is visible is a pure function of the time elapsed since `start`,
/// so the renderer can just ask on every frame.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the end of each character, for O(1) slicing
    boundaries: Vec<usize>,
    per_char: Duration,
    start: Instant,
    skipped: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, per_char: Duration, start: Instant) -> Self {
        let text = text.into();
        let boundaries = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        Self {
            text,
            boundaries,
            per_char,
            start,
            skipped: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters revealed at `now`
    pub fn revealed_chars(&self, now: Instant) -> usize {
        let total = self.boundaries.len();
        if self.skipped || self.per_char.is_zero() {
            return total;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let count = elapsed.as_nanos() / self.per_char.as_nanos();
        usize::try_from(count).map_or(total, |n| n.min(total))
    }

    pub fn visible(&self, now: Instant) -> &str {
        match self.revealed_chars(now) {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.revealed_chars(now) == self.boundaries.len()
    }

    /// Lines in the visible text; what the gutter numbers up to
    pub fn line_count(&self, now: Instant) -> usize {
        self.visible(now).split('\n').count()
    }

    pub fn total_lines(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Reveal everything now
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Instant at which the whole text is visible
    pub fn finish_time(&self) -> Instant {
        let chars = u32::try_from(self.boundaries.len()).unwrap_or(u32::MAX);
        self.start + self.per_char.saturating_mul(chars)
    }
}
