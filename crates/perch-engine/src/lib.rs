#![forbid(unsafe_code)]

//! Engine: imperative controllers for anchored floating panels.
//!
//! Two controllers sit on top of the pure math in `perch-core`:
//!
//! - [`reflow::ReflowScheduler`] keeps a panel's position correct across its
//!   open lifetime (two-frame settle on open, synchronous re-position on
//!   scroll/resize, listener cleanup on close/unmount).
//! - [`sync::LifecycleSynchronizer`] bridges a caller-owned or internal
//!   open/closed boolean to an imperative native overlay widget without
//!   notify feedback loops.
//!
//! Both depend only on the capability traits in [`capability`]; nothing in
//! this crate touches a concrete rendering host. Capability absence always
//! degrades to a no-op, never an error.

pub mod capability;
pub mod reflow;
pub mod sync;

pub use capability::{ElementHandle, OverlayCaps, OverlayWidget, TriggerAction, TriggerProps};
pub use reflow::{ReflowConfig, ReflowHost, ReflowScheduler, Visibility};
pub use sync::LifecycleSynchronizer;
