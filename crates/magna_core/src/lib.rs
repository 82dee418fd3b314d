//! Magna Core
//!
//! Foundational geometry for the Magna Coders site animations:
//!
//! - **Perimeter Tracer**: maps a progress fraction along a rectangle's
//!   perimeter to a boundary point, and computes the partial border-segment
//!   lengths behind the "drawing/erasing" outline effect
//! - **Orbit Layout**: angular placement for items evenly spaced around
//!   concentric rings
//! - **Value types**: `Point` and `Size` shared by the animation layer
//!
//! Everything in this crate is pure and deterministic: no clocks, no timers,
//! no shared state. The `magna_animation` crate owns the clocks that feed
//! these functions.

pub mod geometry;
pub mod orbit;
pub mod perimeter;

pub use geometry::{Point, Size};
pub use orbit::{angle_for, ring_placements, OrbitPlacement, RING_ONE_OFFSET_DEG, RING_TWO_OFFSET_DEG};
pub use perimeter::{border_lengths, position_at, BorderLengths, TracePhase};
