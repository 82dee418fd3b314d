//! Account-creation card border
//!
//! The card outline draws itself clockwise edge by edge, a ball riding the
//! frontier, then erases in the same order. The card's measured size is
//! captured when the component mounts and intentionally not re-measured on
//! resize.

use magna_animation::{AnimatedTrace, BorderTrace, SchedulerHandle};
use magna_core::{BorderLengths, Point, Size, TracePhase};

/// Steps to draw (and again to erase) the full outline
pub const BORDER_STEPS_PER_PHASE: u32 = 120;

/// Milliseconds between outline steps
pub const BORDER_TICK_MS: f32 = 25.0;

/// One rendered frame of the card border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderFrame {
    pub borders: BorderLengths,
    pub ball: Point,
    pub phase: TracePhase,
}

/// The animated account-card border.
///
/// Owns its trace driver; dropping the component cancels the timer.
pub struct AccountCardBorder {
    trace: AnimatedTrace,
    size: Size,
}

impl AccountCardBorder {
    /// Mount the border over the card's measured size
    pub fn new(handle: SchedulerHandle, size: Size) -> Self {
        Self {
            trace: AnimatedTrace::new(
                handle,
                BorderTrace::new(size, BORDER_STEPS_PER_PHASE, BORDER_TICK_MS),
            ),
            size,
        }
    }

    /// The size captured at mount
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sample the current frame. Falls back to an empty outline once the
    /// scheduler is gone.
    pub fn frame(&self) -> BorderFrame {
        match self.trace.frame() {
            Some(f) => BorderFrame {
                borders: f.borders,
                ball: f.ball,
                phase: f.phase,
            },
            None => BorderFrame {
                borders: BorderLengths::default(),
                ball: Point::ZERO,
                phase: TracePhase::Draw,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magna_animation::AnimationScheduler;

    #[test]
    fn test_border_draws_then_erases() {
        let scheduler = AnimationScheduler::new();
        let card = AccountCardBorder::new(scheduler.handle(), Size::new(300.0, 100.0));

        assert_eq!(card.frame().phase, TracePhase::Draw);
        assert_eq!(card.frame().borders.total(), 0.0);

        // Halfway through the draw phase
        scheduler.advance(BORDER_TICK_MS * BORDER_STEPS_PER_PHASE as f32 / 2.0);
        let frame = card.frame();
        assert_eq!(frame.phase, TracePhase::Draw);
        assert_eq!(frame.borders.total(), 400.0);

        // Into the erase phase
        scheduler.advance(BORDER_TICK_MS * BORDER_STEPS_PER_PHASE as f32);
        let frame = card.frame();
        assert_eq!(frame.phase, TracePhase::Erase);
        assert_eq!(frame.borders.total(), 400.0);
    }

    #[test]
    fn test_geometry_frozen_at_mount() {
        let scheduler = AnimationScheduler::new();
        let card = AccountCardBorder::new(scheduler.handle(), Size::new(300.0, 100.0));
        scheduler.advance(1000.0);
        assert_eq!(card.size(), Size::new(300.0, 100.0));
    }

    #[test]
    fn test_unmount_cancels_trace() {
        let scheduler = AnimationScheduler::new();
        let card = AccountCardBorder::new(scheduler.handle(), Size::new(300.0, 100.0));
        assert_eq!(scheduler.trace_count(), 1);
        drop(card);
        assert_eq!(scheduler.trace_count(), 0);
    }
}
