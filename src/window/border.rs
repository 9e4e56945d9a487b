use crate::config::DecorationConfig;
use crate::constants::TITLE_ICON_GUTTER;

use super::DecorationState;
use super::buttons::compute_buttons;

/// Space the frame occupies on each side of the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderInsets {
    pub north: i32,
    pub south: i32,
    pub east: i32,
    pub west: i32,
}

impl BorderInsets {
    pub fn uniform(width: i32) -> Self {
        Self {
            north: width,
            south: width,
            east: width,
            west: width,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Compute the frame insets for `state`.
///
/// Fullscreen suppresses the frame entirely. Otherwise the outline sets all
/// four sides, a title bar replaces the north side and shading removes the
/// south side.
pub fn border_insets(state: &DecorationState, cfg: &DecorationConfig) -> BorderInsets {
    if state.status.fullscreen {
        return BorderInsets::default();
    }

    let mut insets = if state.border.outline {
        BorderInsets::uniform(cfg.border_width)
    } else {
        BorderInsets::default()
    };

    if state.border.title {
        insets.north = cfg.title_height;
    }

    if state.status.shaded {
        insets.south = 0;
    }

    insets
}

/// Outer size of the frame. A shaded frame is rolled up to its title bar.
pub fn frame_size(state: &DecorationState, cfg: &DecorationConfig) -> (i32, i32) {
    let insets = border_insets(state, cfg);
    let width = state.width + insets.east + insets.west;
    let height = if state.status.shaded {
        insets.north + insets.south
    } else {
        state.height + insets.north + insets.south
    };
    (width, height)
}

/// Whether a frame should be painted at all.
pub fn should_draw_border(state: &DecorationState) -> bool {
    let status = state.status;
    if !(status.mapped || status.shaded) {
        return false;
    }
    if status.hidden || status.fullscreen {
        return false;
    }
    state.border.title || state.border.outline
}

/// Whether the menu icon occupies the left end of the title bar.
pub fn has_menu_icon(state: &DecorationState, cfg: &DecorationConfig) -> bool {
    state.border.icon && state.width >= cfg.title_height
}

/// Width left for the title text once buttons and the icon gutter are taken.
/// May be zero or negative, in which case no title is drawn.
pub fn title_text_width(state: &DecorationState, cfg: &DecorationConfig) -> i32 {
    let (width, _) = frame_size(state, cfg);
    let buttons = compute_buttons(state, cfg).len() as i32;
    width - cfg.title_height * buttons - (cfg.icon_size() + TITLE_ICON_GUTTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{BorderFlags, StatusFlags};

    fn cfg() -> DecorationConfig {
        DecorationConfig {
            title_height: 24,
            border_width: 4,
            corner_radius: 4,
        }
    }

    fn state(border: BorderFlags, status: StatusFlags) -> DecorationState {
        DecorationState {
            width: 300,
            height: 200,
            border,
            status,
        }
    }

    #[test]
    fn outline_only_is_uniform() {
        let border = BorderFlags {
            outline: true,
            ..BorderFlags::default()
        };
        let insets = border_insets(&state(border, StatusFlags::default()), &cfg());
        assert_eq!(insets, BorderInsets::uniform(4));
    }

    #[test]
    fn title_replaces_north_edge() {
        let insets = border_insets(
            &state(BorderFlags::full(), StatusFlags::default()),
            &cfg(),
        );
        assert_eq!(
            insets,
            BorderInsets {
                north: 24,
                south: 4,
                east: 4,
                west: 4
            }
        );
    }

    #[test]
    fn title_without_outline_only_has_north() {
        let border = BorderFlags {
            title: true,
            ..BorderFlags::default()
        };
        let insets = border_insets(&state(border, StatusFlags::default()), &cfg());
        assert_eq!(
            insets,
            BorderInsets {
                north: 24,
                ..BorderInsets::default()
            }
        );
    }

    #[test]
    fn shading_drops_south_edge() {
        let status = StatusFlags {
            shaded: true,
            ..StatusFlags::default()
        };
        let s = state(BorderFlags::full(), status);
        let insets = border_insets(&s, &cfg());
        assert_eq!(insets.south, 0);
        assert_eq!(insets.north, 24);
        assert_eq!(frame_size(&s, &cfg()), (308, 24));
    }

    #[test]
    fn fullscreen_has_no_frame() {
        for shaded in [false, true] {
            let status = StatusFlags {
                fullscreen: true,
                shaded,
                ..StatusFlags::default()
            };
            let s = state(BorderFlags::full(), status);
            assert!(border_insets(&s, &cfg()).is_zero());
            assert!(!should_draw_border(&s));
        }
    }

    #[test]
    fn draw_gating_requires_visible_decorated_window() {
        let mapped = StatusFlags {
            mapped: true,
            ..StatusFlags::default()
        };
        assert!(should_draw_border(&state(BorderFlags::full(), mapped)));
        assert!(!should_draw_border(&state(
            BorderFlags::full(),
            StatusFlags::default()
        )));
        assert!(!should_draw_border(&state(BorderFlags::default(), mapped)));
        let hidden = StatusFlags {
            hidden: true,
            ..mapped
        };
        assert!(!should_draw_border(&state(BorderFlags::full(), hidden)));
        let shaded_unmapped = StatusFlags {
            shaded: true,
            ..StatusFlags::default()
        };
        assert!(should_draw_border(&state(BorderFlags::full(), shaded_unmapped)));
    }

    #[test]
    fn title_width_accounts_for_buttons_and_icon() {
        let s = state(BorderFlags::full(), StatusFlags::default());
        // 308 - 3 buttons * 24 - (18 + 13)
        assert_eq!(title_text_width(&s, &cfg()), 205);
        assert!(has_menu_icon(&s, &cfg()));
        let narrow = DecorationState { width: 20, ..s };
        assert!(!has_menu_icon(&narrow, &cfg()));
    }
}
