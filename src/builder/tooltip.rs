//! Info tooltip placement
//!
//! Pure geometry: the tooltip is centered above its anchor, kept inside
//! the horizontal margins of the viewport and flipped below the anchor
//! when there is no room above.

/// Axis-aligned rectangle in surface cells (or pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Spacing used by [`place_tooltip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipRules {
    /// Distance between anchor and tooltip
    pub gap: i32,
    /// Minimum distance to the viewport edges
    pub margin: i32,
}

impl Default for TooltipRules {
    fn default() -> Self {
        Self { gap: 15, margin: 10 }
    }
}

impl TooltipRules {
    /// Spacing for a character-cell terminal
    pub fn terminal() -> Self {
        Self { gap: 1, margin: 1 }
    }
}

/// Where a tooltip ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    /// Whether the tooltip was flipped below the anchor
    pub below: bool,
}

/// Position a `width` x `height` tooltip for `anchor` in a viewport
/// `viewport_width` wide
pub fn place_tooltip(
    anchor: Rect,
    width: i32,
    height: i32,
    viewport_width: i32,
    rules: TooltipRules,
) -> Placement {
    let mut x = anchor.x + anchor.width / 2 - width / 2;
    let mut y = anchor.y - height - rules.gap;

    if x < rules.margin {
        x = rules.margin;
    }
    if x + width > viewport_width - rules.margin {
        x = viewport_width - width - rules.margin;
    }

    let below = y < rules.margin;
    if below {
        y = anchor.bottom() + rules.gap;
    }

    Placement { x, y, below }
}
