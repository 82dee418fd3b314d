//! Animation scheduler
//!
//! Manages all active animation drivers and updates them each frame.
//! Drivers are implicitly registered when created through wrapper types:
//! - `AnimatedTypewriter` - character reveal with blinking cursor
//! - `AnimatedTrace` - draw/erase border outline cycle
//! - `AnimatedCycler` - wrap-around index counter with bounce pulse
//!
//! Every wrapper deregisters its driver in `Drop`, so a tick can never reach
//! a torn-down component. The scheduler is always passed in explicitly; no
//! global instance exists.

use crate::cycler::Cycler;
use crate::trace::{BorderTrace, TraceFrame};
use crate::typewriter::Typewriter;
use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a registered typewriter
    pub struct TypewriterId;
    /// Handle to a registered border trace
    pub struct TraceId;
    /// Handle to a registered cycler
    pub struct CyclerId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    typewriters: SlotMap<TypewriterId, Typewriter>,
    traces: SlotMap<TraceId, BorderTrace>,
    cyclers: SlotMap<CyclerId, Cycler>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn step(&mut self, dt_ms: f32) -> bool {
        for (_, tw) in self.typewriters.iter_mut() {
            tw.tick(dt_ms);
        }
        for (_, trace) in self.traces.iter_mut() {
            trace.tick(dt_ms);
        }
        for (_, cycler) in self.cyclers.iter_mut() {
            cycler.tick(dt_ms);
        }
        // Drivers are only removed when their wrapper drops; a finished
        // typewriter stays registered so its final frame remains readable.
        self.typewriters.iter().any(|(_, t)| t.is_active())
            || self.traces.iter().any(|(_, t)| t.is_active())
            || self.cyclers.iter().any(|(_, c)| c.is_active())
    }
}

/// Callback for waking the host event loop from the animation thread
pub type WakeCallback = Arc<dyn Fn() + Send + Sync>;

/// The animation scheduler that ticks all active drivers.
///
/// Typically held by the page/application context and shared with components
/// via [`SchedulerHandle`].
///
/// # Background thread mode
///
/// The scheduler can run on its own background thread via
/// `start_background()`, setting a `needs_redraw` flag whenever any driver
/// is active. Cursor blink does not count as driver activity; enable
/// continuous redraw for it instead.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    /// Stop signal for the background thread
    stop_flag: Arc<AtomicBool>,
    /// Set by the background thread when a redraw is needed
    needs_redraw: Arc<AtomicBool>,
    /// Request redraws every frame regardless of activity (cursor blink)
    continuous_redraw: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
    wake_callback: Option<WakeCallback>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                typewriters: SlotMap::with_key(),
                traces: SlotMap::with_key(),
                cyclers: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
            stop_flag: Arc::new(AtomicBool::new(false)),
            needs_redraw: Arc::new(AtomicBool::new(false)),
            continuous_redraw: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
            wake_callback: None,
        }
    }

    /// Set a callback invoked from the background thread when a redraw is
    /// needed, e.g. an event-loop wake proxy
    pub fn set_wake_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.wake_callback = Some(Arc::new(callback));
    }

    /// Start ticking on a background thread at 60fps
    pub fn start_background(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);
        let needs_redraw = Arc::clone(&self.needs_redraw);
        let continuous_redraw = Arc::clone(&self.continuous_redraw);
        let wake_callback = self.wake_callback.clone();

        self.thread_handle = Some(thread::spawn(move || {
            let frame_duration = Duration::from_micros(1_000_000 / 60);

            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();
                let wants_continuous = continuous_redraw.load(Ordering::Relaxed);

                let has_active = {
                    let mut inner = inner.lock().unwrap();
                    let now = Instant::now();
                    let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
                    inner.last_frame = now;
                    inner.step(dt_ms)
                };

                if has_active || wants_continuous {
                    needs_redraw.store(true, Ordering::Release);
                    if let Some(ref callback) = wake_callback {
                        callback();
                    }
                }

                let elapsed = start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        }));
    }

    /// Stop the background thread
    pub fn stop_background(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        self.stop_flag.store(false, Ordering::Relaxed);
    }

    pub fn is_background_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    /// Check and clear the needs_redraw flag in one atomic swap
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Acquire)
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Enable continuous redraw mode for features like cursor blink that
    /// need regular frames without counting as driver activity
    pub fn set_continuous_redraw(&self, enabled: bool) {
        tracing::debug!("AnimationScheduler: set_continuous_redraw({})", enabled);
        self.continuous_redraw.store(enabled, Ordering::Release);
    }

    pub fn is_continuous_redraw(&self) -> bool {
        self.continuous_redraw.load(Ordering::Relaxed)
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all drivers using wall-clock elapsed time.
    ///
    /// Returns true if any driver is still active.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        inner.step(dt_ms)
    }

    /// Tick all drivers by an explicit duration.
    ///
    /// Deterministic alternative to [`AnimationScheduler::tick`] for tests
    /// and offline frame rendering.
    pub fn advance(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        inner.step(dt_ms)
    }

    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.typewriters.iter().any(|(_, t)| t.is_active())
            || inner.traces.iter().any(|(_, t)| t.is_active())
            || inner.cyclers.iter().any(|(_, c)| c.is_active())
    }

    pub fn typewriter_count(&self) -> usize {
        self.inner.lock().unwrap().typewriters.len()
    }

    pub fn trace_count(&self) -> usize {
        self.inner.lock().unwrap().traces.len()
    }

    pub fn cycler_count(&self) -> usize {
        self.inner.lock().unwrap().cyclers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.stop_background();
    }
}

/// A weak handle to the animation scheduler.
///
/// Passed to components that need to register drivers. It won't keep the
/// scheduler alive; every operation no-ops once the scheduler is gone.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a typewriter and return its ID
    pub fn register_typewriter(&self, tw: Typewriter) -> Option<TypewriterId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            // Reset last_frame so a long-idle scheduler doesn't burst-reveal
            guard.last_frame = Instant::now();
            guard.typewriters.insert(tw)
        })
    }

    pub fn with_typewriter<F, R>(&self, id: TypewriterId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Typewriter) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().typewriters.get_mut(id).map(f))
    }

    pub fn remove_typewriter(&self, id: TypewriterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().typewriters.remove(id);
        }
    }

    /// Register a border trace and return its ID
    pub fn register_trace(&self, trace: BorderTrace) -> Option<TraceId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            guard.last_frame = Instant::now();
            guard.traces.insert(trace)
        })
    }

    pub fn with_trace<F, R>(&self, id: TraceId, f: F) -> Option<R>
    where
        F: FnOnce(&mut BorderTrace) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().traces.get_mut(id).map(f))
    }

    pub fn remove_trace(&self, id: TraceId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().traces.remove(id);
        }
    }

    /// Register a cycler and return its ID
    pub fn register_cycler(&self, cycler: Cycler) -> Option<CyclerId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            guard.last_frame = Instant::now();
            guard.cyclers.insert(cycler)
        })
    }

    pub fn with_cycler<F, R>(&self, id: CyclerId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Cycler) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().cyclers.get_mut(id).map(f))
    }

    pub fn remove_cycler(&self, id: CyclerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().cyclers.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated wrappers
// ============================================================================

/// A typewriter that registers with the scheduler on creation and
/// deregisters when dropped
pub struct AnimatedTypewriter {
    handle: SchedulerHandle,
    id: Option<TypewriterId>,
}

impl AnimatedTypewriter {
    pub fn new(handle: SchedulerHandle, tw: Typewriter) -> Self {
        let id = handle.register_typewriter(tw);
        Self { handle, id }
    }

    /// The revealed prefix, cloned out of the registry
    pub fn prefix(&self) -> String {
        self.id
            .and_then(|id| self.handle.with_typewriter(id, |t| t.prefix().to_string()))
            .unwrap_or_default()
    }

    pub fn cursor_visible(&self) -> bool {
        self.id
            .and_then(|id| self.handle.with_typewriter(id, |t| t.cursor_visible()))
            .unwrap_or(true)
    }

    pub fn is_done(&self) -> bool {
        self.id
            .and_then(|id| self.handle.with_typewriter(id, |t| t.is_done()))
            .unwrap_or(true)
    }

    /// Swap the target text, restarting the reveal from empty
    pub fn set_text(&self, text: impl Into<String>) {
        if let Some(id) = self.id {
            let text = text.into();
            self.handle.with_typewriter(id, move |t| t.set_text(text));
        }
    }
}

impl Drop for AnimatedTypewriter {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_typewriter(id);
        }
    }
}

/// A border trace that registers with the scheduler on creation and
/// deregisters when dropped
pub struct AnimatedTrace {
    handle: SchedulerHandle,
    id: Option<TraceId>,
}

impl AnimatedTrace {
    pub fn new(handle: SchedulerHandle, trace: BorderTrace) -> Self {
        let id = handle.register_trace(trace);
        Self { handle, id }
    }

    /// Sample the current frame, or None once the scheduler is gone
    pub fn frame(&self) -> Option<TraceFrame> {
        self.id.and_then(|id| self.handle.with_trace(id, |t| t.frame()))
    }
}

impl Drop for AnimatedTrace {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_trace(id);
        }
    }
}

/// A cycler that registers with the scheduler on creation and deregisters
/// when dropped
pub struct AnimatedCycler {
    handle: SchedulerHandle,
    id: Option<CyclerId>,
}

impl AnimatedCycler {
    pub fn new(handle: SchedulerHandle, cycler: Cycler) -> Self {
        let id = handle.register_cycler(cycler);
        Self { handle, id }
    }

    pub fn index(&self) -> usize {
        self.id
            .and_then(|id| self.handle.with_cycler(id, |c| c.index()))
            .unwrap_or(0)
    }

    pub fn bouncing(&self) -> bool {
        self.id
            .and_then(|id| self.handle.with_cycler(id, |c| c.bouncing()))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedCycler {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_cycler(id);
        }
    }
}
