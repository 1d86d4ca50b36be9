#![forbid(unsafe_code)]

//! Perch public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the positioning math from `perch-core` and the lifecycle
//! controllers from `perch-engine`, and offers a lightweight prelude.
//!
//! # Overview
//!
//! A floating panel (popover, tooltip, menu) is positioned relative to an
//! anchor in three steps: [`resolve`] computes a raw candidate for one of
//! twelve [`Placement`]s, [`clamp`] keeps it inside the viewport (flipping
//! vertically when the requested side has no room), and a
//! [`ReflowScheduler`] applies it to the panel behind a two-frame settle so
//! the first paint never shows the panel mid-jump. Open/closed state is
//! bridged to the host's native overlay widget by a
//! [`LifecycleSynchronizer`], in either controlled or uncontrolled mode.

// --- Core re-exports -------------------------------------------------------

pub use perch_core::clamp::{DEFAULT_VIEWPORT_MARGIN, clamp};
pub use perch_core::geometry::{Position, RawPosition, Rect, Size, Viewport};
pub use perch_core::placement::{
    Align, DEFAULT_GAP, ParsePlacementError, Placement, Side, resolve,
};

// --- Engine re-exports -----------------------------------------------------

pub use perch_engine::capability::{
    ElementHandle, OverlayCaps, OverlayWidget, TriggerAction, TriggerProps,
};
pub use perch_engine::reflow::{ReflowConfig, ReflowHost, ReflowScheduler, Visibility};
pub use perch_engine::sync::LifecycleSynchronizer;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        ElementHandle, LifecycleSynchronizer, OverlayCaps, OverlayWidget, Placement, Position,
        Rect, ReflowConfig, ReflowHost, ReflowScheduler, Size, TriggerAction, TriggerProps,
        Viewport, Visibility,
    };
}
