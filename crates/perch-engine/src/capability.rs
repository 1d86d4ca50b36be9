#![forbid(unsafe_code)]

//! Capability boundary between the engine and its host environment.
//!
//! The engine never talks to a concrete DOM or widget toolkit. It sees two
//! opaque handles: something measurable ([`ElementHandle`]) and something
//! that can be shown, hidden, toggled, and observed ([`OverlayWidget`]).
//! Hosts advertise what they actually support via [`OverlayCaps`]; all
//! feature detection is resolved against those flags at this boundary so the
//! controllers can assume a clean contract. A host that supports nothing is
//! a valid host — every call degrades to a silent no-op.

use perch_core::Rect;

use bitflags::bitflags;

/// A live, measurable element handle (anchor or floating panel).
///
/// Returns `None` while the element is not yet mounted into the layout tree.
/// That is an expected transient during the first render, not an error; a
/// positioning pass that sees `None` skips and retries on the next trigger.
pub trait ElementHandle {
    /// Current bounding box in viewport coordinates, if measurable.
    fn bounding_rect(&self) -> Option<Rect>;
}

bitflags! {
    /// Capability surface of the host's native overlay widget.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OverlayCaps: u8 {
        /// The widget can be shown imperatively.
        const SHOW = 1 << 0;
        /// The widget can be hidden imperatively.
        const HIDE = 1 << 1;
        /// The widget can be toggled imperatively.
        const TOGGLE = 1 << 2;
        /// The widget's live open state can be queried.
        const QUERY = 1 << 3;
        /// The widget emits open/close notifications.
        const NOTIFY = 1 << 4;
    }
}

impl OverlayCaps {
    /// A fully capable native overlay widget.
    pub const FULL: Self = Self::all();
}

/// Imperative native overlay widget (popover-style) capability set.
///
/// Implementations must make the imperative methods safe to call even when
/// the corresponding capability is absent; callers additionally guard on
/// [`caps`](OverlayWidget::caps) so an unsupported call is never issued.
pub trait OverlayWidget {
    /// Which capabilities this widget actually supports.
    fn caps(&self) -> OverlayCaps;

    /// Show the widget.
    fn show(&mut self);

    /// Hide the widget.
    fn hide(&mut self);

    /// Toggle the widget.
    fn toggle(&mut self);

    /// Query the widget's live open state.
    ///
    /// `None` means unknown: the capability is absent or the host query
    /// failed. Callers treat unknown as "skip whatever depended on it".
    fn query_open(&self) -> Option<bool>;
}

/// Action a trigger element requests from its target widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TriggerAction {
    #[default]
    Toggle,
    Show,
    Hide,
}

impl TriggerAction {
    /// The attribute token for this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

/// Declarative trigger attributes.
///
/// A serializable attribute bag a trigger element can spread to drive a
/// widget without the caller writing an explicit click handler. Data, not a
/// function reference, so it can be attached to any element type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerProps {
    /// Id of the target widget.
    pub target: String,
    /// Action to invoke on the target. Defaults to toggle.
    pub target_action: TriggerAction,
}

impl TriggerProps {
    /// Build trigger props for the widget with the given id.
    pub fn new(target: impl Into<String>, action: TriggerAction) -> Self {
        Self {
            target: target.into(),
            target_action: action,
        }
    }

    /// The attribute key/value pairs to spread onto the trigger element.
    pub fn attrs(&self) -> [(&'static str, String); 2] {
        [
            ("target", self.target.clone()),
            ("target-action", self.target_action.as_str().to_string()),
        ]
    }
}
