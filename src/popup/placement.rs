//! Popup text measurement and on-screen placement.

use crate::constants::POPUP_MARGIN;

/// Bounds of the display area containing a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether at least one cell is left once the margin is taken off every
    /// side.
    pub fn can_hold_popup(&self) -> bool {
        self.width > 2 * POPUP_MARGIN && self.height > 2 * POPUP_MARGIN
    }
}

/// Where a popup sits on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PopupRect {
    /// Whether the rect lies inside `screen` with at least `margin` to spare
    /// on every side.
    pub fn within(&self, screen: &ScreenRect, margin: i32) -> bool {
        self.x >= screen.x + margin
            && self.y >= screen.y + margin
            && self.x + self.width <= screen.right() - margin
            && self.y + self.height <= screen.bottom() - margin
    }
}

/// Width and height of text as drawn in the popup font.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
    fn line_height(&self) -> i32;
}

/// Everything needed to paint a popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLayout {
    pub lines: Vec<String>,
    pub rect: PopupRect,
    /// Distance between the tops of consecutive lines.
    pub line_pitch: i32,
    /// Left edge of the text inside the popup.
    pub text_x: i32,
}

impl PopupLayout {
    /// Top-left corner of line `row`, relative to the popup.
    pub fn line_origin(&self, row: usize) -> (i32, i32) {
        (self.text_x, self.line_pitch * row as i32 + 1)
    }
}

/// Split popup text into its visible lines. Consecutive line breaks collapse.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Natural popup size for `lines`: the widest line plus `padding`, and one
/// pitch (line height plus `line_spacing`) per line plus a top pixel.
pub fn measure(
    lines: &[&str],
    metrics: &impl TextMetrics,
    padding: i32,
    line_spacing: i32,
) -> (i32, i32) {
    let width = lines
        .iter()
        .map(|line| metrics.text_width(line) + padding)
        .max()
        .unwrap_or(0);
    let height = 1 + lines.len() as i32 * (metrics.line_height() + line_spacing);
    (width, height)
}

/// Place a popup of the given size near the anchor `(x, y)`.
///
/// The popup goes below the anchor, or above it when less than twice its
/// height is left below. It is then shrunk and shifted as needed to stay
/// inside `screen` with `POPUP_MARGIN` on every side. Anchors outside the
/// screen are pulled onto its edge first.
///
/// A screen that fails [`ScreenRect::can_hold_popup`] still gets a 1x1 rect
/// at the top-left margin, which does not satisfy [`PopupRect::within`].
pub fn place(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    line_height: i32,
    screen: &ScreenRect,
) -> PopupRect {
    let width = width.min(screen.width - 2 * POPUP_MARGIN).max(1);
    let height = height.min(screen.height - 2 * POPUP_MARGIN).max(1);
    let x = x.clamp(screen.x, screen.right());
    let y = y.clamp(screen.y, screen.bottom());

    let mut top = if y + 2 * height + POPUP_MARGIN >= screen.bottom() {
        y - height - POPUP_MARGIN
    } else {
        y + line_height + POPUP_MARGIN
    };
    let mut left = x;

    left = left.min(screen.right() - width - POPUP_MARGIN);
    top = top.min(screen.bottom() - height - POPUP_MARGIN);
    left = left.max(screen.x + POPUP_MARGIN);
    top = top.max(screen.y + POPUP_MARGIN);

    PopupRect {
        x: left,
        y: top,
        width,
        height,
    }
}
