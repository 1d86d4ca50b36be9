#![forbid(unsafe_code)]

//! Core: pure geometry and positioning math for anchored floating panels.
//!
//! Everything in this crate is side-effect-free. Given an anchor rectangle,
//! a panel size, a requested placement, and viewport bounds, the same inputs
//! always produce the same output position. Measurement, scheduling, and
//! open-state bookkeeping live in `perch-engine`.

pub mod clamp;
pub mod geometry;
pub mod placement;

pub use clamp::{DEFAULT_VIEWPORT_MARGIN, clamp};
pub use geometry::{Position, RawPosition, Rect, Size, Viewport};
pub use placement::{Align, DEFAULT_GAP, ParsePlacementError, Placement, Side, resolve};
