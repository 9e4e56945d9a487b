//! Shared crate-wide constants.

use std::time::Duration;

/// Default height of the title bar. Title-bar buttons are square, so this is
/// also the default button width.
pub const DEFAULT_TITLE_HEIGHT: i32 = 24;

/// Default width of the outline drawn around frames without a title bar (and
/// along the sides and bottom of frames that have one).
pub const DEFAULT_BORDER_WIDTH: i32 = 4;

/// Default radius used when rounding frame corners.
pub const DEFAULT_CORNER_RADIUS: i32 = 4;

/// Space reserved around the window icon in the title bar, on top of the
/// icon itself, before title text may start.
pub const TITLE_ICON_GUTTER: i32 = 7 + 6;

/// Minimum distance a popup keeps from every edge of its screen.
pub const POPUP_MARGIN: i32 = 2;

/// Default horizontal padding added to the widest popup line.
pub const DEFAULT_POPUP_PADDING: i32 = 9;

/// Default extra spacing added below each popup line.
pub const DEFAULT_POPUP_LINE_SPACING: i32 = 1;

/// How often the popup controller checks whether the pointer has left the
/// position it was shown at.
pub const POPUP_TICK_INTERVAL: Duration = Duration::from_millis(100);
