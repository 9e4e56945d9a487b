use super::hit_test::{Action, ActionKind, Horizontal, Vertical};

/// Window origin with content size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Apply a pointer delta to `start` according to `action`.
///
/// `Move` translates the window. `Resize` moves the edges named by the
/// action's directions; West and North drags keep the opposite edge fixed,
/// including when the minimum size kicks in. Every other action leaves the
/// geometry untouched.
pub fn apply_drag(
    start: FrameGeometry,
    action: Action,
    dx: i32,
    dy: i32,
    min_width: i32,
    min_height: i32,
) -> FrameGeometry {
    let mut next = start;
    match action.kind() {
        ActionKind::Move => {
            next.x += dx;
            next.y += dy;
            return next;
        }
        ActionKind::Resize => {}
        _ => return start,
    }

    match action.horizontal() {
        Horizontal::West => {
            next.x += dx;
            next.width -= dx;
        }
        Horizontal::East => next.width += dx,
        Horizontal::None => {}
    }
    match action.vertical() {
        Vertical::North => {
            next.y += dy;
            next.height -= dy;
        }
        Vertical::South => next.height += dy,
        Vertical::None => {}
    }

    let min_width = min_width.max(1);
    let min_height = min_height.max(1);
    if next.width < min_width {
        if action.horizontal() == Horizontal::West {
            next.x -= min_width - next.width;
        }
        next.width = min_width;
    }
    if next.height < min_height {
        if action.vertical() == Vertical::North {
            next.y -= min_height - next.height;
        }
        next.height = min_height;
    }

    next
}
