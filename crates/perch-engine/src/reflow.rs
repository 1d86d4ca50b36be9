#![forbid(unsafe_code)]

//! Reflow scheduling: keep a floating panel positioned across its open
//! lifetime without a visible first-paint jump.
//!
//! # State machine
//!
//! ```text
//! Closed --open()--> Settling(2) --frame()--> Settling(1) --frame()--> Tracking
//!    ^                                                                    |
//!    +------------------------- close() / unmount() ---------------------+
//! ```
//!
//! On open the panel is gated hidden (opacity 0, pointer events off, no
//! transition) and two paint frames are awaited: one for the panel to mount
//! into the layout tree, one for layout to stabilize. Reading geometry one
//! frame too early yields stale, often zero-sized rects; the second frame is
//! load-bearing and must not be optimized away. Only after the second frame
//! does the scheduler measure, position, and reveal.
//!
//! While tracking, scroll (captured on all ancestors) and resize events
//! re-position synchronously on every event. The computation is a handful of
//! float ops, so no debouncing is applied; throttling here would make the
//! panel visibly lag the anchor during scrolling.
//!
//! # Invariants
//!
//! - Listeners attached on open are detached exactly once, on close or
//!   unmount, whichever comes first.
//! - A frame that arrives after close is superseded: open state is checked
//!   before any style write, so a stale settle never revives a closed panel.
//! - Only this scheduler writes the panel's position (single-writer); hosts
//!   must not mutate position-related style elsewhere.

use perch_core::{Position, Viewport, clamp, resolve};
use tracing::{debug, trace};

use crate::capability::ElementHandle;

pub use perch_core::placement::{DEFAULT_GAP, Placement};

/// Visibility gate applied to the floating panel.
///
/// `Hidden` means opacity 0, pointer events disabled, and transitions
/// suppressed, so the panel occupies layout (and is measurable) without
/// flashing at a stale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Host services the reflow scheduler consumes.
///
/// The scheduler owns *when*; the host owns *how*. `request_frame` must
/// invoke [`ReflowScheduler::frame`] on the next paint boundary (a real
/// next-paint callback, not a timer — timers are not equivalent under
/// variable render cost). Listener registration must deliver
/// [`ReflowScheduler::layout_changed`] for captured ancestor scrolls and
/// window resizes.
pub trait ReflowHost {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Schedule a callback for the next paint frame.
    fn request_frame(&mut self);

    /// Register scroll (capture) and resize listeners.
    fn attach_layout_listeners(&mut self);

    /// Remove the listeners registered by `attach_layout_listeners`.
    fn detach_layout_listeners(&mut self);

    /// Write the computed position to the panel's inline style.
    ///
    /// Only the scheduler calls this; no other component may write
    /// position-related style on the panel.
    fn apply_position(&mut self, position: &Position);

    /// Apply the visibility gate to the panel.
    fn set_visibility(&mut self, visibility: Visibility);
}

/// Positioning configuration for a floating panel.
#[derive(Debug, Clone, Copy)]
pub struct ReflowConfig {
    /// Requested placement. Default: centered bottom.
    pub placement: Placement,
    /// Gap between the anchor edge and the panel, in pixels. Default: 8.
    pub gap: f64,
    /// Minimum distance kept from the viewport edges. Default: 8.
    pub viewport_margin: f64,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            gap: DEFAULT_GAP,
            viewport_margin: perch_core::DEFAULT_VIEWPORT_MARGIN,
        }
    }
}

/// Scheduler phase. `Settling` counts down the two-frame settle; `Tracking`
/// remembers whether the panel has been revealed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Settling { frames_left: u8 },
    Tracking { revealed: bool },
}

/// Keeps a floating panel's position correct across its open lifetime.
///
/// Drive it with lifecycle events: [`open`](Self::open) /
/// [`close`](Self::close) on open-state transitions, [`frame`](Self::frame)
/// from the host's next-paint callback, [`layout_changed`](Self::layout_changed)
/// from scroll/resize listeners, and [`unmount`](Self::unmount) when the
/// owning component goes away.
#[derive(Debug)]
pub struct ReflowScheduler {
    config: ReflowConfig,
    phase: Phase,
    listeners_attached: bool,
}

impl ReflowScheduler {
    /// Create a scheduler in the closed state.
    pub fn new(config: ReflowConfig) -> Self {
        Self {
            config,
            phase: Phase::Closed,
            listeners_attached: false,
        }
    }

    /// Whether the panel is currently open (settling or tracking).
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    /// The active configuration.
    pub fn config(&self) -> &ReflowConfig {
        &self.config
    }

    /// Transition to open: gate the panel hidden and start the two-frame
    /// settle. A no-op if already open.
    pub fn open(&mut self, host: &mut impl ReflowHost) {
        if self.is_open() {
            return;
        }
        debug!(placement = %self.config.placement, "panel opening; starting settle");
        self.phase = Phase::Settling { frames_left: 2 };
        host.set_visibility(Visibility::Hidden);
        host.request_frame();
    }

    /// Transition to closed: detach listeners immediately. The last applied
    /// position is retained; it is inert while the panel is hidden.
    pub fn close(&mut self, host: &mut impl ReflowHost) {
        if !self.is_open() {
            return;
        }
        debug!("panel closing");
        self.phase = Phase::Closed;
        self.detach(host);
    }

    /// The owning component unmounted. Equivalent to close: all listeners
    /// must be released, whichever of close/unmount comes first.
    pub fn unmount(&mut self, host: &mut impl ReflowHost) {
        self.phase = Phase::Closed;
        self.detach(host);
    }

    /// A paint frame fired. Advances the settle; the second frame attaches
    /// listeners, positions, and reveals. Frames arriving while closed or
    /// tracking are stale and ignored.
    pub fn frame(
        &mut self,
        host: &mut impl ReflowHost,
        anchor: &dyn ElementHandle,
        panel: &dyn ElementHandle,
    ) {
        match self.phase {
            Phase::Settling { frames_left: 2 } => {
                // Panel has mounted; give layout one more frame to stabilize.
                self.phase = Phase::Settling { frames_left: 1 };
                host.request_frame();
            }
            Phase::Settling { frames_left: _ } => {
                trace!("settle complete");
                self.attach(host);
                let revealed = self.reposition(host, anchor, panel);
                if revealed {
                    host.set_visibility(Visibility::Visible);
                }
                self.phase = Phase::Tracking { revealed };
            }
            // Superseded by a close (or a duplicate frame while tracking).
            Phase::Closed | Phase::Tracking { .. } => {}
        }
    }

    /// A scroll or resize event fired. Re-positions synchronously while
    /// tracking; ignored otherwise.
    pub fn layout_changed(
        &mut self,
        host: &mut impl ReflowHost,
        anchor: &dyn ElementHandle,
        panel: &dyn ElementHandle,
    ) {
        let Phase::Tracking { revealed } = self.phase else {
            return;
        };
        if self.reposition(host, anchor, panel) && !revealed {
            // First successful pass after an unmeasurable settle.
            host.set_visibility(Visibility::Visible);
            self.phase = Phase::Tracking { revealed: true };
        }
    }

    /// Run one positioning pass: measure, resolve, clamp, apply.
    ///
    /// Returns `false` when either handle is not yet measurable; the pass is
    /// skipped (expected before refs attach) and retried on the next trigger.
    fn reposition(
        &self,
        host: &mut impl ReflowHost,
        anchor: &dyn ElementHandle,
        panel: &dyn ElementHandle,
    ) -> bool {
        let (Some(anchor_rect), Some(panel_rect)) = (anchor.bounding_rect(), panel.bounding_rect())
        else {
            trace!("positioning pass skipped: handle not measurable");
            return false;
        };
        let panel_size = panel_rect.size();
        let raw = resolve(anchor_rect, panel_size, self.config.placement, self.config.gap);
        let position = clamp(
            raw,
            panel_size,
            anchor_rect,
            self.config.placement,
            self.config.gap,
            host.viewport(),
            self.config.viewport_margin,
        );
        trace!(top = position.top, left = position.left, "position applied");
        host.apply_position(&position);
        true
    }

    fn attach(&mut self, host: &mut impl ReflowHost) {
        if !self.listeners_attached {
            self.listeners_attached = true;
            host.attach_layout_listeners();
        }
    }

    fn detach(&mut self, host: &mut impl ReflowHost) {
        if self.listeners_attached {
            self.listeners_attached = false;
            host.detach_layout_listeners();
        }
    }
}

impl Default for ReflowScheduler {
    fn default() -> Self {
        Self::new(ReflowConfig::default())
    }
}
