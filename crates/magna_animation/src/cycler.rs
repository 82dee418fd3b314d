//! Wrap-around index cycler
//!
//! A fixed-period counter over a list of items, with an optional bounce
//! pulse after each step. Drives the hero's rotating terminal lines (one
//! step every 2200 ms) and the "Magna Coders" title marquee (one letter
//! every 300 ms with a 150 ms ball bounce).

/// Fixed-period wrap-around index counter
#[derive(Clone, Debug)]
pub struct Cycler {
    len: usize,
    period_ms: f32,
    bounce_ms: f32,
    index: usize,
    elapsed: f32,
    bounce_remaining: f32,
}

impl Cycler {
    /// Cycle through `len` items, advancing every `period_ms`
    pub fn new(len: usize, period_ms: f32) -> Self {
        Self {
            len,
            period_ms,
            bounce_ms: 0.0,
            index: 0,
            elapsed: 0.0,
            bounce_remaining: 0.0,
        }
    }

    /// Pulse the bounce flag for `bounce_ms` after every step
    pub fn with_bounce(mut self, bounce_ms: f32) -> Self {
        self.bounce_ms = bounce_ms;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the bounce pulse from the last step is still live
    pub fn bouncing(&self) -> bool {
        self.bounce_remaining > 0.0
    }

    /// The cycle loops for as long as it has items
    pub fn is_active(&self) -> bool {
        self.len > 0
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if self.len == 0 || self.period_ms <= 0.0 {
            return;
        }
        self.bounce_remaining = (self.bounce_remaining - dt_ms).max(0.0);
        self.elapsed += dt_ms;
        while self.elapsed >= self.period_ms {
            self.elapsed -= self.period_ms;
            self.index = (self.index + 1) % self.len;
            self.bounce_remaining = self.bounce_ms;
        }
    }
}
