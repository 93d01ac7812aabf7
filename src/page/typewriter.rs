//! Character-by-character text reveal

/// Delay between characters (ms)
pub const TYPE_INTERVAL_MS: i32 = 100;
/// Delay after page load before typing starts (ms)
pub const TYPE_START_DELAY_MS: i32 = 1000;

/// Reveals `text` one Unicode scalar at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte length of the visible prefix
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Reveal the next character. Returns the visible text, or `None` once
    /// everything is shown.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(self.visible())
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }
}
