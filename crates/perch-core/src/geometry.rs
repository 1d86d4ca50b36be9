#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS pixels in viewport coordinates (origin at the top-left
//! of the visible viewport). Rectangles are immutable snapshots taken once
//! per positioning pass; a reflow re-measures rather than mutating.

use std::fmt;

/// An axis-aligned box in viewport coordinates.
///
/// Stores the top-left corner and size; the right/bottom edges are derived.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn from_edges(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Right edge. Alias for `left + width`.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge. Alias for `top + height`.
    #[inline]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal center.
    #[inline]
    pub const fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical center.
    #[inline]
    pub const fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Measured size of a floating panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A raw, unclamped candidate position from the placement calculator.
///
/// May lie partially or fully outside the viewport; feed it through
/// [`clamp`](crate::clamp::clamp) before applying it to an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPosition {
    pub top: f64,
    pub left: f64,
}

/// The final clamped position written to the floating panel.
///
/// This is the only mutable output of a positioning pass; it is applied to
/// the panel's inline style exactly once per settle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// The top offset as a CSS pixel length, e.g. `"158px"`.
    pub fn top_px(&self) -> String {
        format!("{}px", Px(self.top))
    }

    /// The left offset as a CSS pixel length, e.g. `"50px"`.
    pub fn left_px(&self) -> String {
        format!("{}px", Px(self.left))
    }

    /// Render the full inline-style fragment for this position.
    ///
    /// Includes `margin: 0` to neutralize inherited auto-margins, which
    /// would otherwise corrupt absolute/fixed positioning.
    pub fn inline_style(&self) -> String {
        format!("top: {}px; left: {}px; margin: 0;", Px(self.top), Px(self.left))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}px, {}px)", Px(self.top), Px(self.left))
    }
}

/// Pixel-length formatter: whole values print without a decimal point.
struct Px(f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_derived_edges() {
        let r = Rect::new(100.0, 100.0, 100.0, 50.0);
        assert_eq!(r.right(), 200.0);
        assert_eq!(r.bottom(), 150.0);
        assert_eq!(r.center_x(), 150.0);
        assert_eq!(r.center_y(), 125.0);
    }

    #[test]
    fn rect_from_edges_round_trips() {
        let r = Rect::from_edges(100.0, 100.0, 200.0, 150.0);
        assert_eq!(r, Rect::new(100.0, 100.0, 100.0, 50.0));
    }

    #[test]
    fn position_inline_style_has_margin_reset() {
        let p = Position::new(158.0, 50.0);
        assert_eq!(p.inline_style(), "top: 158px; left: 50px; margin: 0;");
    }

    #[test]
    fn px_formatting_drops_trailing_zero() {
        assert_eq!(Position::new(12.0, 0.0).top_px(), "12px");
        assert_eq!(Position::new(12.5, 0.0).top_px(), "12.5px");
    }
}
