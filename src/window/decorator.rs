use ratatui::style::{Color, Style};

use crate::config::DecorationConfig;
use crate::theme;
use crate::ui::UiFrame;

use super::DecorationState;
use super::border::{
    border_insets, frame_size, has_menu_icon, should_draw_border, title_text_width,
};
use super::buttons::{ButtonKind, compute_buttons};

/// Whether the output can clip frames to a rounded shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeSupport {
    Rounded,
    #[default]
    Rectangular,
}

/// Paints window frames. Geometry comes from the border and button layout
/// modules so painted buttons sit exactly where hit testing finds them.
#[derive(Debug, Clone, Copy)]
pub struct FrameDecorator {
    cfg: DecorationConfig,
    shape: ShapeSupport,
}

impl FrameDecorator {
    pub fn new(cfg: DecorationConfig, shape: ShapeSupport) -> Self {
        Self { cfg, shape }
    }

    fn rounded(&self) -> bool {
        self.shape == ShapeSupport::Rounded && self.cfg.corner_radius > 0
    }

    /// Paint the frame of `state` with its top-left corner at `(x, y)`.
    /// Content pixels are left untouched.
    pub fn render(
        &self,
        frame: &mut UiFrame<'_>,
        x: i32,
        y: i32,
        state: &DecorationState,
        title: &str,
    ) {
        if !should_draw_border(state) {
            return;
        }

        let cfg = &self.cfg;
        let active = state.status.active;
        let insets = border_insets(state, cfg);
        let (width, height) = frame_size(state, cfg);
        let title_style = theme::title_style(active);
        let outline_style = theme::outline_style(active);

        // Border bands
        frame.fill(x, y, width, insets.north, title_style);
        if !state.status.shaded {
            let body_top = y + insets.north;
            frame.fill(x, body_top, insets.west, state.height, outline_style);
            let east_x = x + width - insets.east;
            frame.fill(east_x, body_top, insets.east, state.height, outline_style);
            frame.fill(x, body_top + state.height, width, insets.south, outline_style);
        }

        if state.border.title {
            let mid = y + cfg.title_height / 2;
            if has_menu_icon(state, cfg) {
                frame.put(x + cfg.title_height / 2, mid, "≡", title_style);
            }

            let text_x = cfg.title_height + 1;
            let buttons = compute_buttons(state, cfg);
            let before_buttons = buttons
                .iter()
                .map(|b| b.offset)
                .min()
                .unwrap_or(width)
                - text_x;
            let text_width = title_text_width(state, cfg).min(before_buttons);
            if !title.is_empty() && text_width > 0 {
                frame.put_str(x + text_x, mid, title, text_width, title_style);
            }

            for button in buttons.iter() {
                let glyph = match button.kind {
                    ButtonKind::Close => "×",
                    ButtonKind::Maximize if state.status.maximized => "❐",
                    ButtonKind::Maximize => "□",
                    ButtonKind::Minimize => "_",
                };
                frame.put(x + button.offset + button.width / 2, mid, glyph, title_style);
            }
        }

        if state.border.outline || state.border.title {
            self.render_outline(frame, x, y, width, height, outline_style);
        }
    }

    fn render_outline(
        &self,
        frame: &mut UiFrame<'_>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        style: Style,
    ) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;
        let (tl, tr, bl, br) = if self.rounded() {
            ("╭", "╮", "╰", "╯")
        } else {
            ("┌", "┐", "└", "┘")
        };

        let mut cells = Vec::new();
        for col in x + 1..right {
            cells.push((col, y, "─"));
            cells.push((col, bottom, "─"));
        }
        for row in y + 1..bottom {
            cells.push((x, row, "│"));
            cells.push((right, row, "│"));
        }
        cells.extend([(x, y, tl), (right, y, tr), (x, bottom, bl), (right, bottom, br)]);

        // Keep the title background underneath the outline.
        for (col, row, symbol) in cells {
            let cell_style = match frame.bg_at(col, row) {
                Some(bg) if bg != Color::Reset => style.bg(bg),
                _ => style,
            };
            frame.put(col, row, symbol, cell_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{BorderFlags, StatusFlags};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn cfg() -> DecorationConfig {
        DecorationConfig {
            title_height: 3,
            border_width: 1,
            corner_radius: 1,
        }
    }

    fn paint(state: &DecorationState, shape: ShapeSupport) -> Buffer {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        FrameDecorator::new(cfg(), shape).render(&mut frame, 0, 0, state, "demo");
        buf
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).unwrap().symbol()
    }

    #[test]
    fn buttons_are_painted_at_layout_offsets() {
        let state = DecorationState::new(30, 10, BorderFlags::full());
        let buf = paint(&state, ShapeSupport::Rectangular);
        let buttons = compute_buttons(&state, &cfg());
        let close = buttons.get(ButtonKind::Close).unwrap();
        assert_eq!(symbol(&buf, (close.offset + 1) as u16, 1), "×");
        let max = buttons.get(ButtonKind::Maximize).unwrap();
        assert_eq!(symbol(&buf, (max.offset + 1) as u16, 1), "□");
        assert_eq!(symbol(&buf, 1, 1), "≡");
        assert_eq!(symbol(&buf, 4, 1), "d");
    }

    #[test]
    fn rounded_corners_degrade_without_shape_support() {
        let state = DecorationState::new(30, 10, BorderFlags::full());
        assert_eq!(symbol(&paint(&state, ShapeSupport::Rounded), 0, 0), "╭");
        assert_eq!(symbol(&paint(&state, ShapeSupport::Rectangular), 0, 0), "┌");
    }

    #[test]
    fn shaded_frames_stop_at_title_bar() {
        let mut state = DecorationState::new(30, 10, BorderFlags::full());
        state.status.shaded = true;
        let buf = paint(&state, ShapeSupport::Rectangular);
        assert_eq!(symbol(&buf, 0, 2), "└");
        assert_eq!(symbol(&buf, 0, 5), " ");
    }

    #[test]
    fn fullscreen_frames_are_not_painted() {
        let mut state = DecorationState::new(30, 10, BorderFlags::full());
        state.status = StatusFlags {
            fullscreen: true,
            mapped: true,
            ..StatusFlags::default()
        };
        let buf = paint(&state, ShapeSupport::Rounded);
        assert_eq!(symbol(&buf, 0, 0), " ");
    }

    #[test]
    fn maximized_uses_restore_glyph() {
        let mut state = DecorationState::new(30, 10, BorderFlags::full());
        state.status.maximized = true;
        let buf = paint(&state, ShapeSupport::Rectangular);
        let max = compute_buttons(&state, &cfg());
        let max = max.get(ButtonKind::Maximize).unwrap();
        assert_eq!(symbol(&buf, (max.offset + 1) as u16, 1), "❐");
    }
}
