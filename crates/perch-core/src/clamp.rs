#![forbid(unsafe_code)]

//! Viewport clamping with axis-specific flip fallback.
//!
//! The calculator in [`crate::placement`] is deliberately ignorant of the
//! viewport; this module is the only place flip logic lives. Each axis is
//! corrected independently:
//!
//! - Horizontal: pull in from the right edge, then floor at the left margin.
//!   Horizontal overflow never flips a `left`/`right` placement; this
//!   asymmetry is inherited from the system being modeled and is kept for
//!   behavioral compatibility (see `horizontal_overflow_clamps_never_flips`).
//! - Vertical: a `bottom` placement that overflows the bottom edge flips to
//!   the `top` formula; a `top` placement that underflows the top edge flips
//!   to the `bottom` formula. After any flip the position is pulled back
//!   inside and floored.
//!
//! The floor guarantee (`top >= margin && left >= margin`) holds for every
//! input. On a viewport too small to hold the panel this means the panel may
//! overlap its anchor; overlap is accepted degradation, off-screen is not.

use crate::geometry::{Position, RawPosition, Rect, Size, Viewport};
use crate::placement::{Placement, Side};

/// Default minimum distance kept between the panel and the viewport edges.
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 8.0;

/// Clamp a raw candidate position so the panel stays inside the viewport.
///
/// `anchor`, `placement`, and `gap` are the inputs the raw position was
/// computed from; the vertical flip fallback re-derives the opposite-side
/// formula from them. Pure, like the calculator.
pub fn clamp(
    raw: RawPosition,
    panel: Size,
    anchor: Rect,
    placement: Placement,
    gap: f64,
    viewport: Viewport,
    margin: f64,
) -> Position {
    let mut left = raw.left;
    let mut top = raw.top;

    // Horizontal: pull-in, then floor. No flip on this axis.
    if left + panel.width > viewport.width - margin {
        left = viewport.width - panel.width - margin;
    }
    if left < margin {
        left = margin;
    }

    // Vertical: flip only the placement's own primary side, then pull-in.
    if top + panel.height > viewport.height - margin && placement.side() == Side::Bottom {
        top = anchor.top - panel.height - gap;
    }
    if top < margin && placement.side() == Side::Top {
        top = anchor.bottom() + gap;
    }
    if top + panel.height > viewport.height - margin {
        top = viewport.height - panel.height - margin;
    }
    if top < margin {
        top = margin;
    }

    Position { top, left }
}
