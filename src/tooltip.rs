/// Gap between the pointer and the tooltip, in pixels
const POINTER_GAP: f64 = 10.0;

/// Horizontal anchoring of a tooltip box
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalAnchor {
    Left(f64),
    Right(f64),
}

/// Vertical anchoring of a tooltip box
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    Top(f64),
    Bottom(f64),
}

/// CSS position of a tooltip, always growing away from the nearest window corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipAnchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl TooltipAnchor {
    /// Inline style for an absolutely positioned element
    #[must_use]
    pub fn style(&self) -> String {
        let horizontal = match self.horizontal {
            HorizontalAnchor::Left(px) => format!("left: {px}px;"),
            HorizontalAnchor::Right(px) => format!("right: {px}px;"),
        };
        let vertical = match self.vertical {
            VerticalAnchor::Top(px) => format!("top: {px}px;"),
            VerticalAnchor::Bottom(px) => format!("bottom: {px}px;"),
        };
        format!("position: absolute; {horizontal} {vertical}")
    }
}

/// Position a tooltip next to the pointer.
///
/// `page` is the pointer position in document coordinates, `screen` the
/// position used to pick the window quadrant and `window` the inner window
/// size. In the left half the tooltip extends to the right of the pointer,
/// in the top half it extends downwards, and vice versa.
#[must_use]
pub fn place_tooltip(page: (f64, f64), screen: (f64, f64), window: (f64, f64)) -> TooltipAnchor {
    let (page_x, page_y) = page;
    let (window_width, window_height) = window;

    let horizontal = if screen.0 < window_width / 2.0 {
        HorizontalAnchor::Left(page_x + POINTER_GAP)
    } else {
        HorizontalAnchor::Right(window_width - page_x + POINTER_GAP)
    };
    let vertical = if screen.1 < window_height / 2.0 {
        VerticalAnchor::Top(page_y + POINTER_GAP)
    } else {
        VerticalAnchor::Bottom(window_height - page_y + POINTER_GAP)
    };

    TooltipAnchor { horizontal, vertical }
}
