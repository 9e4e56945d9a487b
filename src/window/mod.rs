pub mod border;
pub mod buttons;
pub mod decorator;
pub mod drag;

pub use border::{
    BorderInsets, border_insets, frame_size, has_menu_icon, should_draw_border, title_text_width,
};
pub use buttons::{Button, ButtonKind, ButtonSet, compute_buttons};
pub use decorator::{FrameDecorator, ShapeSupport};
pub use drag::{FrameGeometry, apply_drag};
pub use hit_test::{Action, ActionKind, Horizontal, Vertical, classify};

/// Decoration features a window's frame carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderFlags {
    pub title: bool,
    pub outline: bool,
    pub resize: bool,
    pub move_: bool,
    pub close: bool,
    pub maximize: bool,
    pub minimize: bool,
    pub icon: bool,
}

impl BorderFlags {
    /// Title bar, outline, every button and both move and resize.
    pub fn full() -> Self {
        Self {
            title: true,
            outline: true,
            resize: true,
            move_: true,
            close: true,
            maximize: true,
            minimize: true,
            icon: true,
        }
    }
}

/// Window status as tracked by the window lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub active: bool,
    pub shaded: bool,
    pub fullscreen: bool,
    pub hidden: bool,
    pub minimized: bool,
    pub mapped: bool,
    /// Only changes which maximize glyph is painted.
    pub maximized: bool,
}

/// Read-only snapshot of a window, supplied per query.
///
/// `width` and `height` describe the client content; frame coordinates used
/// by hit testing have their origin at the frame's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationState {
    pub width: i32,
    pub height: i32,
    pub border: BorderFlags,
    pub status: StatusFlags,
}

impl DecorationState {
    pub fn new(width: i32, height: i32, border: BorderFlags) -> Self {
        Self {
            width,
            height,
            border,
            status: StatusFlags {
                mapped: true,
                ..StatusFlags::default()
            },
        }
    }
}
