//! Border trace cycle
//!
//! Owns the clock behind the account-card outline effect: the first half of
//! the cycle draws the border edge by edge, the second half erases it in the
//! same order, and a ball rides the frontier the whole way around.
//!
//! The rectangle size is captured at construction and never re-measured. The
//! shipped animation freezes geometry at mount time; callers that want live
//! geometry build a new trace from the new measurement.

use magna_core::{border_lengths, position_at, BorderLengths, Point, Size, TracePhase};

/// One sampled frame of a border trace
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceFrame {
    pub borders: BorderLengths,
    pub ball: Point,
    pub phase: TracePhase,
}

/// Draw/erase outline cycle over a fixed-size rectangle.
///
/// The step counter lives in `[0, 2 * steps_per_phase)`: the first half is
/// the draw phase, the second half the erase phase, then the cycle wraps.
#[derive(Clone, Debug)]
pub struct BorderTrace {
    size: Size,
    steps_per_phase: u32,
    tick_ms: f32,
    step: u32,
    elapsed: f32,
}

impl BorderTrace {
    /// Create a trace over `size`, stepping every `tick_ms` milliseconds and
    /// taking `steps_per_phase` steps to draw (and again to erase) the
    /// outline
    pub fn new(size: Size, steps_per_phase: u32, tick_ms: f32) -> Self {
        Self {
            size,
            steps_per_phase: steps_per_phase.max(1),
            tick_ms,
            step: 0,
            elapsed: 0.0,
        }
    }

    /// The geometry captured at construction
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current step within the full draw/erase cycle
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn phase(&self) -> TracePhase {
        if self.step < self.steps_per_phase {
            TracePhase::Draw
        } else {
            TracePhase::Erase
        }
    }

    /// The cycle loops forever
    pub fn is_active(&self) -> bool {
        true
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if self.tick_ms <= 0.0 {
            return;
        }
        self.elapsed += dt_ms;
        while self.elapsed >= self.tick_ms {
            self.elapsed -= self.tick_ms;
            self.step = (self.step + 1) % (2 * self.steps_per_phase);
        }
    }

    /// Sample the current frame
    pub fn frame(&self) -> TraceFrame {
        let phase = self.phase();
        let step_in_phase = match phase {
            TracePhase::Draw => self.step,
            TracePhase::Erase => self.step - self.steps_per_phase,
        };
        let borders = border_lengths(
            step_in_phase,
            self.steps_per_phase,
            self.size.width,
            self.size.height,
            phase,
        );
        // The ball rides the frontier: the leading edge of the drawn outline
        // while drawing, the erase front while erasing.
        let progress = step_in_phase as f32 / self.steps_per_phase as f32;
        let ball = position_at(progress, self.size.width, self.size.height);
        TraceFrame {
            borders,
            ball,
            phase,
        }
    }
}
