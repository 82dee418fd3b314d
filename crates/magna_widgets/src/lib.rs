//! Magna Widgets
//!
//! The animated components of the Magna Coders site, expressed as
//! frame-producing state holders. Each component owns its animation drivers
//! through scheduler wrappers, so dropping a component cancels its timers.
//!
//! Components don't render; they hand back a plain frame struct each tick
//! and the host view layer turns it into transforms and text.

pub mod account_card;
pub mod avatar_ring;
pub mod hero;
pub mod marquee;

pub use account_card::{AccountCardBorder, BorderFrame};
pub use avatar_ring::{AvatarRing, AvatarSlot};
pub use hero::{
    icon_transform, parallax_offset, FloatingIcon, HeroFrame, HeroHeadline, ParallaxOffset,
    FLOATING_ICONS, HERO_COMMAND_LINES, HERO_HEADLINE, HERO_TYPE_SPEED_MS,
};
pub use marquee::{MarqueeFrame, TitleMarquee, MARQUEE_TITLE};
