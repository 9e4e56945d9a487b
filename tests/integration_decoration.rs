use frame_wm::DecorationConfig;
use frame_wm::window::{
    Action, ActionKind, BorderFlags, BorderInsets, ButtonKind, DecorationState, Horizontal,
    StatusFlags, Vertical, border_insets, classify, compute_buttons,
};

fn cfg() -> DecorationConfig {
    DecorationConfig {
        title_height: 24,
        border_width: 4,
        corner_radius: 4,
    }
}

fn no_icon() -> BorderFlags {
    BorderFlags {
        icon: false,
        ..BorderFlags::full()
    }
}

fn flag_combinations() -> Vec<BorderFlags> {
    let mut all = Vec::new();
    for bits in 0u16..256 {
        let bit = |n: u16| bits & (1 << n) != 0;
        all.push(BorderFlags {
            title: bit(0),
            outline: bit(1),
            resize: bit(2),
            move_: bit(3),
            close: bit(4),
            maximize: bit(5),
            minimize: bit(6),
            icon: bit(7),
        });
    }
    all
}

#[test]
fn three_buttons_pack_from_the_right() {
    let state = DecorationState::new(300, 200, no_icon());
    let buttons = compute_buttons(&state, &cfg());
    let placed: Vec<_> = buttons.iter().map(|b| (b.kind, b.offset, b.width)).collect();
    assert_eq!(
        placed,
        vec![
            (ButtonKind::Close, 284, 24),
            (ButtonKind::Maximize, 260, 24),
            (ButtonKind::Minimize, 236, 24),
        ]
    );
    assert_eq!(
        classify(&state, &cfg(), 290, 10),
        Action::new(ActionKind::Close)
    );
}

#[test]
fn fullscreen_without_resize_has_no_active_border() {
    let mut state = DecorationState::new(300, 200, no_icon());
    state.status.fullscreen = true;
    assert_eq!(border_insets(&state, &cfg()), BorderInsets::default());

    state.border.title = false;
    state.border.resize = false;
    for (x, y) in [(0, 100), (2, 100), (150, 0), (150, 3), (299, 100), (150, 199)] {
        assert_eq!(classify(&state, &cfg(), x, y), Action::NONE, "at ({x}, {y})");
    }
}

#[test]
fn fullscreen_zeroes_insets_for_every_flag_combination() {
    for border in flag_combinations() {
        let mut state = DecorationState::new(120, 80, border);
        state.status = StatusFlags {
            fullscreen: true,
            shaded: border.close,
            ..state.status
        };
        assert!(border_insets(&state, &cfg()).is_zero(), "{border:?}");
    }
}

#[test]
fn outline_without_title_is_uniform() {
    let border = BorderFlags {
        title: false,
        ..BorderFlags::full()
    };
    for width in [1, 4, 9] {
        let cfg = DecorationConfig {
            border_width: width,
            ..cfg()
        };
        let insets = border_insets(&DecorationState::new(200, 100, border), &cfg);
        assert_eq!(insets, BorderInsets::uniform(width));
        assert!(insets.north > 0);
    }
}

#[test]
fn shaded_title_keeps_only_the_top() {
    for border in flag_combinations().into_iter().filter(|b| b.title) {
        let mut state = DecorationState::new(200, 100, border);
        state.status.shaded = true;
        let insets = border_insets(&state, &cfg());
        assert_eq!(insets.south, 0, "{border:?}");
        assert_eq!(insets.north, 24, "{border:?}");
    }
}

#[test]
fn title_band_away_from_buttons_moves_when_movable() {
    let mut state = DecorationState::new(300, 200, BorderFlags::full());
    let buttons = compute_buttons(&state, &cfg());
    let first_button = buttons.iter().map(|b| b.offset).min().unwrap();
    for x in (25..=first_button).step_by(7) {
        for y in [4, 12, 24] {
            assert_eq!(
                classify(&state, &cfg(), x, y),
                Action::new(ActionKind::Move),
                "at ({x}, {y})"
            );
        }
    }

    state.border.move_ = false;
    for x in (25..=first_button).step_by(7) {
        assert_eq!(classify(&state, &cfg(), x, 12), Action::NONE, "at ({x}, 12)");
    }
}

#[test]
fn content_interior_is_inert() {
    let state = DecorationState::new(300, 200, BorderFlags::full());
    for x in (30..270).step_by(11) {
        for y in (30..200).step_by(13) {
            assert_eq!(classify(&state, &cfg(), x, y), Action::NONE, "at ({x}, {y})");
        }
    }
}

#[test]
fn resize_directions_stay_consistent() {
    for border in flag_combinations() {
        for (width, height) in [(10, 10), (48, 48), (300, 200)] {
            let state = DecorationState::new(width, height, border);
            for x in (-6..width + 14).step_by(3) {
                for y in (-6..height + 34).step_by(3) {
                    let action = classify(&state, &cfg(), x, y);
                    if action.is_resize() {
                        assert!(
                            action.vertical() != Vertical::None
                                || action.horizontal() != Horizontal::None
                        );
                    } else {
                        assert_eq!(action.vertical(), Vertical::None);
                        assert_eq!(action.horizontal(), Horizontal::None);
                    }
                }
            }
        }
    }
}

#[test]
fn button_hits_match_layout() {
    for width in [30, 50, 73, 100, 300] {
        let state = DecorationState::new(width, 100, no_icon());
        let buttons = compute_buttons(&state, &cfg());
        assert_eq!(buttons, compute_buttons(&state, &cfg()));
        for x in 0..width + 8 {
            let expected = buttons.button_at(x).map(|b| Action::from(b.kind));
            let got = classify(&state, &cfg(), x, 12);
            match expected {
                Some(action) => assert_eq!(got, action, "width {width} x {x}"),
                None => assert!(
                    !matches!(
                        got.kind(),
                        ActionKind::Close | ActionKind::Maximize | ActionKind::Minimize
                    ),
                    "width {width} x {x}"
                ),
            }
        }
    }
}
