#![forbid(unsafe_code)]

//! Open-state synchronization between a caller-owned boolean and an
//! imperative native overlay widget.
//!
//! Two parties can drive a widget open or closed: the caller (controlled
//! mode, via a boolean it owns) and the user (via a trigger wired straight
//! to the widget, bypassing the caller entirely). The synchronizer keeps
//! both honest by tracking two states separately:
//!
//! - the **external** belief: the caller's controlled value, or the
//!   synchronizer's own store in uncontrolled mode;
//! - the **native** state: the last value reported by the widget's
//!   open/close notification.
//!
//! Cross-notification happens only on genuine deltas. If the widget reports
//! a state that already matches the external belief, the caller is not
//! notified — re-announcing it would feed a notify → apply → notify loop.
//!
//! Every native call is guarded on the widget's advertised capabilities;
//! absence is a silent no-op. Nothing here panics or surfaces an error:
//! worst case is a widget that stays out of sync until the next interaction.

use tracing::{debug, trace};

use crate::capability::{OverlayCaps, OverlayWidget, TriggerAction, TriggerProps};

/// Caller notification hook.
type Hook = Box<dyn FnMut()>;

/// Bridges a boolean open/closed state to an imperative overlay widget,
/// supporting controlled and uncontrolled callers without feedback loops.
pub struct LifecycleSynchronizer {
    /// Caller's controlled value; `None` means uncontrolled.
    controlled: Option<bool>,
    /// Internal store, authoritative only in uncontrolled mode.
    internal_open: bool,
    /// Last state reported by the widget's notification event.
    last_native: Option<bool>,
    on_open: Option<Hook>,
    on_close: Option<Hook>,
}

impl std::fmt::Debug for LifecycleSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleSynchronizer")
            .field("controlled", &self.controlled)
            .field("internal_open", &self.internal_open)
            .field("last_native", &self.last_native)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl LifecycleSynchronizer {
    /// Uncontrolled mode: the synchronizer owns the open state.
    pub fn uncontrolled(default_open: bool) -> Self {
        Self {
            controlled: None,
            internal_open: default_open,
            last_native: None,
            on_open: None,
            on_close: None,
        }
    }

    /// Controlled mode: the caller owns the open state and must keep it
    /// current via [`set_controlled_open`](Self::set_controlled_open).
    pub fn controlled(is_open: bool) -> Self {
        Self {
            controlled: Some(is_open),
            internal_open: is_open,
            last_native: None,
            on_open: None,
            on_close: None,
        }
    }

    /// Install a hook invoked when the widget genuinely opens.
    pub fn with_on_open(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(hook));
        self
    }

    /// Install a hook invoked when the widget genuinely closes.
    pub fn with_on_close(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    /// Whether the synchronizer is operating in controlled mode.
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// The current external belief: the controlled value when controlled,
    /// the internal store otherwise.
    pub fn is_open(&self) -> bool {
        self.controlled.unwrap_or(self.internal_open)
    }

    /// Update the controlled value. Called by the caller on every render in
    /// controlled mode; a no-op in uncontrolled mode.
    pub fn set_controlled_open(&mut self, is_open: bool) {
        if self.controlled.is_some() {
            self.controlled = Some(is_open);
        }
    }

    /// Show the widget, if it supports being shown.
    pub fn show(&self, widget: &mut dyn OverlayWidget) {
        if widget.caps().contains(OverlayCaps::SHOW) {
            widget.show();
        }
    }

    /// Hide the widget, if it supports being hidden.
    pub fn hide(&self, widget: &mut dyn OverlayWidget) {
        if widget.caps().contains(OverlayCaps::HIDE) {
            widget.hide();
        }
    }

    /// Toggle the widget, if it supports toggling.
    pub fn toggle(&self, widget: &mut dyn OverlayWidget) {
        if widget.caps().contains(OverlayCaps::TOGGLE) {
            widget.toggle();
        }
    }

    /// The widget's open/close notification fired with a new state.
    ///
    /// Updates the internal store in uncontrolled mode. In either mode the
    /// caller's hook runs only on a genuine delta: a notification that
    /// echoes the external belief, or repeats the last native report, is
    /// absorbed here, which is what breaks the notify loop. The repeat check
    /// matters in controlled mode, where the external belief lags the widget
    /// until the caller reacts; without it a widget that re-emits the same
    /// state would re-announce the same transition.
    pub fn native_state_changed(&mut self, open: bool) {
        let previous = self.is_open();
        let repeated = self.last_native == Some(open);
        self.last_native = Some(open);
        if self.controlled.is_none() {
            self.internal_open = open;
        }
        if repeated || open == previous {
            trace!(open, "native notification echoes known state; absorbed");
            return;
        }
        debug!(open, "native state delta; notifying caller");
        let hook = if open {
            self.on_open.as_mut()
        } else {
            self.on_close.as_mut()
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Last state reported by the widget, if any notification has fired.
    pub fn last_native_state(&self) -> Option<bool> {
        self.last_native
    }

    /// Controlled-mode reconciliation, run once per render.
    ///
    /// Queries the widget's live state and issues `show`/`hide` only on
    /// mismatch. Skipped entirely when uncontrolled, when the widget cannot
    /// be queried, or when the query fails (unknown state is never acted
    /// on). Idempotent: once the widget matches, further calls do nothing.
    pub fn reconcile(&mut self, widget: &mut dyn OverlayWidget) {
        let Some(want) = self.controlled else {
            return;
        };
        if !widget.caps().contains(OverlayCaps::QUERY) {
            return;
        }
        let Some(actual) = widget.query_open() else {
            trace!("state query failed; reconciliation skipped this render");
            return;
        };
        if actual != want {
            debug!(want, actual, "controlled value and native state diverged");
            if want {
                self.show(widget);
            } else {
                self.hide(widget);
            }
        }
    }

    /// Declarative trigger attributes targeting the widget with `id`,
    /// using the default toggle action.
    pub fn trigger_props(&self, id: impl Into<String>) -> TriggerProps {
        TriggerProps::new(id, TriggerAction::Toggle)
    }
}
