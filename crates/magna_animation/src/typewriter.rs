//! Typewriter text reveal
//!
//! Reveals a growing prefix of a target string one character per fixed tick,
//! with an independently blinking cursor. Replacing the text restarts the
//! reveal from empty rather than splicing.

use crate::CURSOR_BLINK_MS;

/// Character-by-character text reveal with a blinking cursor.
///
/// Once the full string is revealed the advance stops firing; the cursor
/// keeps blinking unless [`Typewriter::hold_cursor_after`] was set, in which
/// case it is forced visible that many milliseconds after completion.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    speed_ms: f32,
    blink_ms: f32,
    /// Revealed prefix length in characters, not bytes
    revealed: usize,
    char_count: usize,
    reveal_elapsed: f32,
    blink_elapsed: f32,
    cursor_visible: bool,
    hold_after_ms: Option<f32>,
    done_elapsed: f32,
}

impl Typewriter {
    /// Create a typewriter revealing `text` at `speed_ms` per character
    pub fn new(text: impl Into<String>, speed_ms: f32) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            speed_ms,
            blink_ms: CURSOR_BLINK_MS,
            revealed: 0,
            char_count,
            reveal_elapsed: 0.0,
            blink_elapsed: 0.0,
            cursor_visible: true,
            hold_after_ms: None,
            done_elapsed: 0.0,
        }
    }

    /// Override the cursor blink period
    pub fn blink_period(mut self, blink_ms: f32) -> Self {
        self.blink_ms = blink_ms;
        self
    }

    /// Stop blinking and force the cursor visible `delay_ms` after the text
    /// finishes revealing
    pub fn hold_cursor_after(mut self, delay_ms: f32) -> Self {
        self.hold_after_ms = Some(delay_ms);
        self
    }

    /// Replace the target text, restarting the reveal from empty
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_count = self.text.chars().count();
        self.revealed = 0;
        self.reveal_elapsed = 0.0;
        self.done_elapsed = 0.0;
    }

    /// The revealed prefix of the target text
    pub fn prefix(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Revealed length in characters
    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Whether the full string has been revealed
    pub fn is_done(&self) -> bool {
        self.revealed >= self.char_count
    }

    /// Whether the reveal still has characters left to emit.
    ///
    /// The cursor blink is not activity; it is driven by the scheduler's
    /// continuous-redraw mode instead.
    pub fn is_active(&self) -> bool {
        !self.is_done()
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.is_done() && self.speed_ms > 0.0 {
            self.reveal_elapsed += dt_ms;
            while self.reveal_elapsed >= self.speed_ms && !self.is_done() {
                self.reveal_elapsed -= self.speed_ms;
                self.revealed += 1;
            }
        } else if !self.is_done() {
            // Zero speed reveals everything on the first tick
            self.revealed = self.char_count;
        }

        if self.is_done() {
            self.done_elapsed += dt_ms;
            if let Some(delay) = self.hold_after_ms {
                if self.done_elapsed >= delay {
                    self.cursor_visible = true;
                    return;
                }
            }
        }

        if self.blink_ms > 0.0 {
            self.blink_elapsed += dt_ms;
            while self.blink_elapsed >= self.blink_ms {
                self.blink_elapsed -= self.blink_ms;
                self.cursor_visible = !self.cursor_visible;
            }
        }
    }
}
