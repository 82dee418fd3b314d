//! Magna Animation System
//!
//! Fixed-cadence animation drivers and the scheduler that ticks them.
//!
//! # Features
//!
//! - **Typewriter**: monotonically growing text reveal with an independent
//!   blinking cursor
//! - **Border Trace**: draw/erase perimeter outline cycle with a traced ball
//! - **Cycler**: wrap-around index counter with a bounce pulse, behind the
//!   hero terminal lines and the title marquee
//! - **Scheduler**: registry of all active drivers; every driver is owned
//!   through a wrapper whose `Drop` deregisters it, so a torn-down component
//!   can never receive a stale tick
//!
//! All state transitions happen inside `tick`/`advance` calls on one timer,
//! strictly in order and non-overlapping. There is no failure path in this
//! crate; degenerate inputs settle to safe defaults.

pub mod cycler;
pub mod scheduler;
pub mod trace;
pub mod typewriter;

pub use cycler::Cycler;
pub use scheduler::{
    AnimatedCycler, AnimatedTrace, AnimatedTypewriter, AnimationScheduler, CyclerId,
    SchedulerHandle, TraceId, TypewriterId, WakeCallback,
};
pub use trace::{BorderTrace, TraceFrame};
pub use typewriter::Typewriter;

/// Default cursor blink period used across the site
pub const CURSOR_BLINK_MS: f32 = 600.0;
