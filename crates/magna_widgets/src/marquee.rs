//! Title marquee
//!
//! The about page's "Magna Coders" title: a red ball hops letter to letter
//! every 300 ms, the letter underneath lights up, and the ball pulses for
//! 150 ms after each landing.

use magna_animation::{AnimatedCycler, Cycler, SchedulerHandle};

/// The marquee title
pub const MARQUEE_TITLE: &str = "Magna Coders";

/// Milliseconds between letter hops
pub const MARQUEE_STEP_MS: f32 = 300.0;

/// Duration of the landing pulse
pub const MARQUEE_BOUNCE_MS: f32 = 150.0;

/// One rendered frame of the marquee
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeFrame {
    /// Index of the highlighted letter
    pub active_index: usize,
    /// Whether the ball is mid-pulse
    pub bouncing: bool,
}

/// The bouncing-ball title component.
///
/// Owns its cycler; dropping the component cancels the timer.
pub struct TitleMarquee {
    cycler: AnimatedCycler,
    letters: Vec<char>,
}

impl TitleMarquee {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_title(handle, MARQUEE_TITLE)
    }

    pub fn with_title(handle: SchedulerHandle, title: &str) -> Self {
        let letters: Vec<char> = title.chars().collect();
        Self {
            cycler: AnimatedCycler::new(
                handle,
                Cycler::new(letters.len(), MARQUEE_STEP_MS).with_bounce(MARQUEE_BOUNCE_MS),
            ),
            letters,
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Sample the current frame
    pub fn frame(&self) -> MarqueeFrame {
        MarqueeFrame {
            active_index: self.cycler.index(),
            bouncing: self.cycler.bouncing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magna_animation::AnimationScheduler;

    #[test]
    fn test_ball_hops_across_all_letters() {
        let scheduler = AnimationScheduler::new();
        let marquee = TitleMarquee::new(scheduler.handle());
        assert_eq!(marquee.letters().len(), 12);

        assert_eq!(marquee.frame().active_index, 0);
        for expected in 1..12 {
            scheduler.advance(MARQUEE_STEP_MS);
            assert_eq!(marquee.frame().active_index, expected);
        }
        // Wraps back to the first letter
        scheduler.advance(MARQUEE_STEP_MS);
        assert_eq!(marquee.frame().active_index, 0);
    }

    #[test]
    fn test_pulse_lasts_150ms() {
        let scheduler = AnimationScheduler::new();
        let marquee = TitleMarquee::new(scheduler.handle());
        scheduler.advance(MARQUEE_STEP_MS);
        assert!(marquee.frame().bouncing);
        scheduler.advance(MARQUEE_BOUNCE_MS);
        assert!(!marquee.frame().bouncing);
    }

    #[test]
    fn test_unmount_cancels_timer() {
        let scheduler = AnimationScheduler::new();
        let marquee = TitleMarquee::new(scheduler.handle());
        assert_eq!(scheduler.cycler_count(), 1);
        drop(marquee);
        assert_eq!(scheduler.cycler_count(), 0);
    }
}
