//! Title-bar button layout.
//!
//! Buttons are packed right to left in a fixed priority order, each one a
//! title-bar-height wide. Packing stops as soon as the remaining offset is no
//! longer greater than one button width, so the menu icon zone on the left
//! and some of the move region always stay free. The same layout is used by
//! hit testing and painting, which keeps the two from disagreeing.

use crate::config::DecorationConfig;

use super::DecorationState;
use super::border::border_insets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Close,
    Maximize,
    Minimize,
}

impl ButtonKind {
    /// Packing order, rightmost first.
    pub const ORDER: [ButtonKind; 3] = [
        ButtonKind::Close,
        ButtonKind::Maximize,
        ButtonKind::Minimize,
    ];

    fn enabled(self, state: &DecorationState) -> bool {
        match self {
            ButtonKind::Close => state.border.close,
            ButtonKind::Maximize => state.border.maximize,
            ButtonKind::Minimize => state.border.minimize,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonKind::Close => "Close",
            ButtonKind::Maximize => "Maximize",
            ButtonKind::Minimize => "Minimize",
        }
    }
}

/// A placed button. `offset` is the left edge in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub kind: ButtonKind,
    pub offset: i32,
    pub width: i32,
}

impl Button {
    /// Whether `x` falls inside the button zone. Both edges are exclusive.
    pub fn contains_x(&self, x: i32) -> bool {
        x > self.offset && x < self.offset + self.width
    }
}

/// Visible buttons in right-to-left order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonSet {
    buttons: Vec<Button>,
}

impl ButtonSet {
    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, kind: ButtonKind) -> Option<&Button> {
        self.buttons.iter().find(|b| b.kind == kind)
    }

    /// First button whose zone encloses `x`.
    pub fn button_at(&self, x: i32) -> Option<&Button> {
        self.buttons.iter().find(|b| b.contains_x(x))
    }
}

pub fn compute_buttons(state: &DecorationState, cfg: &DecorationConfig) -> ButtonSet {
    let mut set = ButtonSet::default();
    if !state.border.title {
        return set;
    }

    let insets = border_insets(state, cfg);
    let size = cfg.button_width();
    let mut offset = state.width + insets.east + insets.west - size;
    if offset <= size {
        return set;
    }

    for kind in ButtonKind::ORDER {
        if !kind.enabled(state) {
            continue;
        }
        set.buttons.push(Button {
            kind,
            offset,
            width: size,
        });
        offset -= size;
        if offset <= size {
            break;
        }
    }

    set
}
