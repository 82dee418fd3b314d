//! Hero section
//!
//! The landing headline typed out character by character with a blinking
//! cursor, a terminal line rotating beneath it, floating code icons with
//! pointer parallax, and the constants the shipped page used.

use magna_animation::{AnimatedCycler, AnimatedTypewriter, Cycler, SchedulerHandle, Typewriter};
use magna_core::{Point, Size};

/// The typed-out landing headline
pub const HERO_HEADLINE: &str = "> Build. Collaborate. Ship Real-World Solutions_";

/// Milliseconds per revealed character
pub const HERO_TYPE_SPEED_MS: f32 = 35.0;

/// Terminal status lines rotated under the headline
pub const HERO_COMMAND_LINES: [&str; 4] = [
    "> Connecting to builders network...",
    "> 523 collaborators online",
    "> Challenge detected: AI-powered LMS",
    "> Syncing repositories... done",
];

/// Period of the terminal line rotation
pub const COMMAND_CYCLE_MS: f32 = 2200.0;

/// A floating code icon and its resting transform
#[derive(Clone, Copy, Debug)]
pub struct FloatingIcon {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub glyph: &'static str,
}

/// The four floating icons around the headline
pub const FLOATING_ICONS: [FloatingIcon; 4] = [
    FloatingIcon { x: -120.0, y: -40.0, rotation_deg: -10.0, glyph: "</>" },
    FloatingIcon { x: 160.0, y: -10.0, rotation_deg: 8.0, glyph: "{ }" },
    FloatingIcon { x: -200.0, y: 80.0, rotation_deg: 14.0, glyph: "⚡" },
    FloatingIcon { x: 220.0, y: 120.0, rotation_deg: -6.0, glyph: "🚀" },
];

/// Pointer offset normalized against the hero rect center, in `[-0.5, 0.5]`
/// on each axis for pointers inside the rect
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    pub x: f32,
    pub y: f32,
}

/// Normalize a pointer position against the hero rectangle's center
pub fn parallax_offset(pointer: Point, rect: Size) -> ParallaxOffset {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return ParallaxOffset::default();
    }
    ParallaxOffset {
        x: (pointer.x - rect.width / 2.0) / rect.width,
        y: (pointer.y - rect.height / 2.0) / rect.height,
    }
}

/// Displace an icon's resting transform by the current parallax: 30 px of
/// travel and 5 degrees of tilt at full offset
pub fn icon_transform(icon: &FloatingIcon, parallax: ParallaxOffset) -> (Point, f32) {
    (
        Point::new(icon.x + parallax.x * 30.0, icon.y + parallax.y * 30.0),
        icon.rotation_deg + parallax.x * 5.0,
    )
}

/// One rendered frame of the hero section
#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    pub headline: String,
    pub cursor_visible: bool,
    pub terminal_line: &'static str,
}

/// The hero headline component.
///
/// Owns its typewriter and terminal cycler; dropping the component cancels
/// both timers.
pub struct HeroHeadline {
    typewriter: AnimatedTypewriter,
    commands: AnimatedCycler,
}

impl HeroHeadline {
    /// Create the hero with the shipped defaults
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_text(handle, HERO_HEADLINE)
    }

    /// Create the hero with a custom headline
    pub fn with_text(handle: SchedulerHandle, headline: impl Into<String>) -> Self {
        Self {
            typewriter: AnimatedTypewriter::new(
                handle.clone(),
                Typewriter::new(headline, HERO_TYPE_SPEED_MS),
            ),
            commands: AnimatedCycler::new(
                handle,
                Cycler::new(HERO_COMMAND_LINES.len(), COMMAND_CYCLE_MS),
            ),
        }
    }

    /// Swap the headline, restarting the reveal from empty
    pub fn set_headline(&self, text: impl Into<String>) {
        self.typewriter.set_text(text);
    }

    pub fn is_typed_out(&self) -> bool {
        self.typewriter.is_done()
    }

    /// Sample the current frame
    pub fn frame(&self) -> HeroFrame {
        HeroFrame {
            headline: self.typewriter.prefix(),
            cursor_visible: self.typewriter.cursor_visible(),
            terminal_line: HERO_COMMAND_LINES[self.commands.index() % HERO_COMMAND_LINES.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magna_animation::AnimationScheduler;

    #[test]
    fn test_headline_types_out_and_holds() {
        let scheduler = AnimationScheduler::new();
        let hero = HeroHeadline::new(scheduler.handle());
        assert_eq!(hero.frame().headline, "");

        scheduler.advance(HERO_TYPE_SPEED_MS * 3.0);
        assert_eq!(hero.frame().headline, "> B");

        // Type everything out, then keep ticking
        scheduler.advance(HERO_TYPE_SPEED_MS * 100.0);
        assert!(hero.is_typed_out());
        assert_eq!(hero.frame().headline, HERO_HEADLINE);
    }

    #[test]
    fn test_terminal_lines_rotate() {
        let scheduler = AnimationScheduler::new();
        let hero = HeroHeadline::new(scheduler.handle());
        assert_eq!(hero.frame().terminal_line, HERO_COMMAND_LINES[0]);
        scheduler.advance(COMMAND_CYCLE_MS);
        assert_eq!(hero.frame().terminal_line, HERO_COMMAND_LINES[1]);
        scheduler.advance(COMMAND_CYCLE_MS * 3.0);
        assert_eq!(hero.frame().terminal_line, HERO_COMMAND_LINES[0]);
    }

    #[test]
    fn test_dropping_hero_cancels_timers() {
        let scheduler = AnimationScheduler::new();
        let hero = HeroHeadline::new(scheduler.handle());
        assert_eq!(scheduler.typewriter_count(), 1);
        assert_eq!(scheduler.cycler_count(), 1);
        drop(hero);
        assert_eq!(scheduler.typewriter_count(), 0);
        assert_eq!(scheduler.cycler_count(), 0);
    }

    #[test]
    fn test_parallax_is_centered_and_bounded() {
        let rect = Size::new(1000.0, 600.0);
        assert_eq!(parallax_offset(Point::new(500.0, 300.0), rect), ParallaxOffset::default());
        let p = parallax_offset(Point::new(1000.0, 0.0), rect);
        assert_eq!(p.x, 0.5);
        assert_eq!(p.y, -0.5);
        // Degenerate rect produces no displacement
        assert_eq!(
            parallax_offset(Point::new(10.0, 10.0), Size::new(0.0, 0.0)),
            ParallaxOffset::default()
        );
    }

    #[test]
    fn test_icon_transform_displacement() {
        let icon = FLOATING_ICONS[0];
        let (pos, rot) = icon_transform(&icon, ParallaxOffset { x: 0.5, y: -0.5 });
        assert_eq!(pos, Point::new(icon.x + 15.0, icon.y - 15.0));
        assert_eq!(rot, icon.rotation_deg + 2.5);
    }
}
