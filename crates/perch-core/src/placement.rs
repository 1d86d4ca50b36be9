#![forbid(unsafe_code)]

//! Placement model and the raw position calculator.
//!
//! A [`Placement`] combines a primary side (which edge of the anchor the
//! panel hangs off) with an optional alignment (where on the cross axis the
//! panel lines up). Twelve combinations total. [`resolve`] turns a placement
//! into a raw, unclamped candidate position; it knows nothing about the
//! viewport, so flipping and clamping live in [`crate::clamp`].

use std::fmt;
use std::str::FromStr;

use crate::geometry::{RawPosition, Rect, Size};

/// Default gap between the anchor edge and the panel, in pixels.
pub const DEFAULT_GAP: f64 = 8.0;

/// The primary side of the anchor the panel is placed against.
///
/// Determines the offset axis: `Top`/`Bottom` offset vertically by the gap,
/// `Left`/`Right` offset horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Cross-axis alignment of the panel against the anchor.
///
/// `Start` is the anchor's leading edge on the cross axis (left edge for
/// `top`/`bottom` placements, top edge for `left`/`right` placements);
/// `End` is the trailing edge; `Center` splits the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Center,
    Start,
    End,
}

/// Requested placement of a floating panel relative to its anchor.
///
/// Variant names use side + alignment; the string form uses the physical
/// tokens the host markup speaks (`"top-left"`, `"right-bottom"`, ...).
/// Defaults to centered `Bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Right,
    RightStart,
    RightEnd,
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
}

impl Placement {
    /// All twelve placements, for exhaustive testing and docs.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
    ];

    /// The primary side of this placement.
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
        }
    }

    /// The cross-axis alignment of this placement.
    pub const fn align(self) -> Align {
        match self {
            Self::TopStart | Self::RightStart | Self::BottomStart | Self::LeftStart => Align::Start,
            Self::TopEnd | Self::RightEnd | Self::BottomEnd | Self::LeftEnd => Align::End,
            _ => Align::Center,
        }
    }

    /// The physical token for this placement, e.g. `"bottom-right"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-left",
            Self::TopEnd => "top-right",
            Self::Right => "right",
            Self::RightStart => "right-top",
            Self::RightEnd => "right-bottom",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-left",
            Self::BottomEnd => "bottom-right",
            Self::Left => "left",
            Self::LeftStart => "left-top",
            Self::LeftEnd => "left-bottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a placement token is not one of the twelve known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlacementError {
    token: String,
}

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown placement token: {:?}", self.token)
    }
}

impl std::error::Error for ParsePlacementError {}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePlacementError {
                token: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for Placement {
    type Error = ParsePlacementError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl From<Placement> for String {
    fn from(p: Placement) -> Self {
        p.as_str().to_string()
    }
}

/// Compute the raw, unclamped position for a panel of size `panel` placed
/// against `anchor` with the given placement and gap.
///
/// Pure: identical inputs always yield identical output, so placements are
/// unit-testable without live measurement. The result may fall outside the
/// viewport; run it through [`clamp`](crate::clamp::clamp) before use.
pub fn resolve(anchor: Rect, panel: Size, placement: Placement, gap: f64) -> RawPosition {
    let (side, align) = (placement.side(), placement.align());

    match side {
        Side::Top | Side::Bottom => {
            let top = match side {
                Side::Bottom => anchor.bottom() + gap,
                _ => anchor.top - panel.height - gap,
            };
            let left = match align {
                Align::Center => anchor.center_x() - panel.width / 2.0,
                Align::Start => anchor.left,
                Align::End => anchor.right() - panel.width,
            };
            RawPosition { top, left }
        }
        Side::Left | Side::Right => {
            let left = match side {
                Side::Right => anchor.right() + gap,
                _ => anchor.left - panel.width - gap,
            };
            let top = match align {
                Align::Center => anchor.center_y() - panel.height / 2.0,
                Align::Start => anchor.top,
                Align::End => anchor.bottom() - panel.height,
            };
            RawPosition { top, left }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anchor and panel from the worked examples: anchor 100x50 at (100, 100),
    // panel 200x100, gap 8.
    fn anchor() -> Rect {
        Rect::new(100.0, 100.0, 100.0, 50.0)
    }

    fn panel() -> Size {
        Size::new(200.0, 100.0)
    }

    #[test]
    fn bottom_centered() {
        let pos = resolve(anchor(), panel(), Placement::Bottom, 8.0);
        assert_eq!(pos, RawPosition { top: 158.0, left: 50.0 });
    }

    #[test]
    fn top_centered_can_go_negative() {
        let pos = resolve(anchor(), panel(), Placement::Top, 8.0);
        assert_eq!(pos, RawPosition { top: -8.0, left: 50.0 });
    }

    #[test]
    fn right_centered() {
        let pos = resolve(anchor(), panel(), Placement::Right, 8.0);
        assert_eq!(pos, RawPosition { top: 75.0, left: 208.0 });
    }

    #[test]
    fn left_centered() {
        let pos = resolve(anchor(), panel(), Placement::Left, 8.0);
        assert_eq!(pos, RawPosition { top: 75.0, left: -108.0 });
    }

    #[test]
    fn start_alignment_pins_leading_edge() {
        let pos = resolve(anchor(), panel(), Placement::TopStart, 8.0);
        assert_eq!(pos.left, 100.0);
        let pos = resolve(anchor(), panel(), Placement::RightStart, 8.0);
        assert_eq!(pos.top, 100.0);
    }

    #[test]
    fn end_alignment_pins_trailing_edge() {
        let pos = resolve(anchor(), panel(), Placement::TopEnd, 8.0);
        assert_eq!(pos.left, 0.0); // anchor.right - panel.width
        let pos = resolve(anchor(), panel(), Placement::LeftEnd, 8.0);
        assert_eq!(pos.top, 50.0); // anchor.bottom - panel.height
    }

    #[test]
    fn gap_offsets_only_the_primary_axis() {
        let near = resolve(anchor(), panel(), Placement::Bottom, 0.0);
        let far = resolve(anchor(), panel(), Placement::Bottom, 24.0);
        assert_eq!(far.top - near.top, 24.0);
        assert_eq!(far.left, near.left);
    }

    #[test]
    fn default_placement_is_centered_bottom() {
        assert_eq!(Placement::default(), Placement::Bottom);
        assert_eq!(Placement::default().align(), Align::Center);
    }

    #[test]
    fn tokens_parse_and_display() {
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p));
        }
        assert_eq!("bottom-right".parse::<Placement>(), Ok(Placement::BottomEnd));
        assert_eq!("left-bottom".parse::<Placement>(), Ok(Placement::LeftEnd));
        assert!("bottom-start".parse::<Placement>().is_err());
        assert!("".parse::<Placement>().is_err());
    }
}
