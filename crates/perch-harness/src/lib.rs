#![forbid(unsafe_code)]

//! Test doubles for the Perch engine.
//!
//! Everything the engine touches at runtime is a capability trait, so tests
//! drive it with scripted stand-ins instead of a live host:
//!
//! - [`FixedElement`]: an [`ElementHandle`] with settable geometry, or none
//!   at all (to exercise the unmounted/unresolvable path).
//! - [`ScriptedWidget`]: an [`OverlayWidget`] with a configurable capability
//!   set, call counters, and optionally failing state queries.
//! - [`RecordingHost`]: a [`ReflowHost`] that records frame requests,
//!   listener attach/detach pairs, applied positions, and visibility writes,
//!   for call-count assertions.

use std::cell::Cell;

use perch_core::{Position, Rect, Viewport};
use perch_engine::capability::{ElementHandle, OverlayCaps, OverlayWidget};
use perch_engine::reflow::{ReflowHost, Visibility};

/// An element handle with fixed, test-controlled geometry.
///
/// Interior-mutable so a test can move or unmount the element while the
/// scheduler holds a shared reference to it, the way a live layout would
/// shift under an engine.
#[derive(Debug, Default)]
pub struct FixedElement {
    rect: Cell<Option<Rect>>,
}

impl FixedElement {
    /// A measurable element with the given bounding box.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Cell::new(Some(rect)),
        }
    }

    /// An element that is not yet mounted (never measurable).
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Move or resize the element.
    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(Some(rect));
    }

    /// Make the element unmeasurable, as if it left the layout tree.
    pub fn unmount(&self) {
        self.rect.set(None);
    }
}

impl ElementHandle for FixedElement {
    fn bounding_rect(&self) -> Option<Rect> {
        self.rect.get()
    }
}

/// An overlay widget double with a configurable capability set.
///
/// Records every imperative call. `show`/`hide`/`toggle` also update the
/// internal open state so reconciliation tests observe convergence.
#[derive(Debug)]
pub struct ScriptedWidget {
    caps: OverlayCaps,
    open: bool,
    fail_queries: bool,
    pub show_calls: usize,
    pub hide_calls: usize,
    pub toggle_calls: usize,
}

impl ScriptedWidget {
    /// A widget advertising exactly the given capabilities, initially closed.
    pub fn new(caps: OverlayCaps) -> Self {
        Self {
            caps,
            open: false,
            fail_queries: false,
            show_calls: 0,
            hide_calls: 0,
            toggle_calls: 0,
        }
    }

    /// Force the widget's open state without recording a call.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Make `query_open` report unknown even though `QUERY` is advertised,
    /// simulating a host whose live-state predicate throws.
    pub fn fail_queries(&mut self, fail: bool) {
        self.fail_queries = fail;
    }

    /// The widget's current open state, for assertions.
    pub fn open(&self) -> bool {
        self.open
    }
}

impl OverlayWidget for ScriptedWidget {
    fn caps(&self) -> OverlayCaps {
        self.caps
    }

    fn show(&mut self) {
        self.show_calls += 1;
        self.open = true;
    }

    fn hide(&mut self) {
        self.hide_calls += 1;
        self.open = false;
    }

    fn toggle(&mut self) {
        self.toggle_calls += 1;
        self.open = !self.open;
    }

    fn query_open(&self) -> Option<bool> {
        if self.fail_queries || !self.caps.contains(OverlayCaps::QUERY) {
            None
        } else {
            Some(self.open)
        }
    }
}

/// A reflow host that records everything the scheduler asks of it.
#[derive(Debug)]
pub struct RecordingHost {
    /// Viewport reported to the scheduler.
    pub viewport: Viewport,
    /// Number of paint frames requested. The test drives the scheduler's
    /// `frame()` by hand; this only counts the requests.
    pub frames_requested: usize,
    /// Listener registrations.
    pub attach_calls: usize,
    /// Listener removals.
    pub detach_calls: usize,
    /// Every position applied, in order.
    pub applied: Vec<Position>,
    /// Last visibility write, if any.
    pub visibility: Option<Visibility>,
}

impl RecordingHost {
    /// A host with the given viewport and empty recordings.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames_requested: 0,
            attach_calls: 0,
            detach_calls: 0,
            applied: Vec::new(),
            visibility: None,
        }
    }

    /// Listeners currently attached (attach/detach delta).
    pub fn listeners_live(&self) -> usize {
        self.attach_calls - self.detach_calls
    }
}

impl ReflowHost for RecordingHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn request_frame(&mut self) {
        self.frames_requested += 1;
    }

    fn attach_layout_listeners(&mut self) {
        self.attach_calls += 1;
    }

    fn detach_layout_listeners(&mut self) {
        self.detach_calls += 1;
    }

    fn apply_position(&mut self, position: &Position) {
        self.applied.push(*position);
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_element_tracks_mount_state() {
        let el = FixedElement::unmounted();
        assert!(el.bounding_rect().is_none());
        el.set_rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(el.bounding_rect(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        el.unmount();
        assert!(el.bounding_rect().is_none());
    }

    #[test]
    fn scripted_widget_query_respects_caps_and_failures() {
        let mut w = ScriptedWidget::new(OverlayCaps::FULL);
        assert_eq!(w.query_open(), Some(false));
        w.fail_queries(true);
        assert_eq!(w.query_open(), None);

        let w = ScriptedWidget::new(OverlayCaps::SHOW);
        assert_eq!(w.query_open(), None);
    }

    #[test]
    fn toggle_flips_state() {
        let mut w = ScriptedWidget::new(OverlayCaps::FULL);
        w.toggle();
        assert!(w.open());
        w.toggle();
        assert!(!w.open());
        assert_eq!(w.toggle_calls, 2);
    }
}
