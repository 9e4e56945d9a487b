//! `PopupBackend` for terminals: surfaces are offscreen ratatui buffers that
//! get composited over the rest of the UI on every draw.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;

use super::placement::{PopupLayout, PopupRect, ScreenRect, TextMetrics};
use super::{PointerPosition, PopupBackend};
use crate::theme;
use crate::ui::UiFrame;

/// Windows known to the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalWindow {
    Desktop,
    Frame(usize),
    Popup(u32),
}

#[derive(Debug)]
pub struct TerminalSurface {
    window: TerminalWindow,
    rect: PopupRect,
    buffer: Buffer,
}

#[derive(Debug)]
pub struct TerminalPopupBackend {
    screen: Rect,
    pointer: PointerPosition<TerminalWindow>,
    next_id: u32,
    presented: Option<(TerminalWindow, PopupRect, Buffer)>,
}

impl TerminalPopupBackend {
    pub fn new(screen: Rect) -> Self {
        Self {
            screen,
            pointer: PointerPosition {
                x: 0,
                y: 0,
                window: TerminalWindow::Desktop,
            },
            next_id: 0,
            presented: None,
        }
    }

    pub fn set_screen(&mut self, screen: Rect) {
        self.screen = screen;
    }

    pub fn set_pointer(&mut self, pointer: PointerPosition<TerminalWindow>) {
        self.pointer = pointer;
    }

    /// Window of the currently presented popup, if it covers `(x, y)`.
    pub fn window_at(&self, x: i32, y: i32) -> Option<TerminalWindow> {
        let (window, rect, _) = self.presented.as_ref()?;
        let inside =
            x >= rect.x && y >= rect.y && x < rect.x + rect.width && y < rect.y + rect.height;
        inside.then_some(*window)
    }

    /// Composite the presented popup onto `frame`.
    pub fn render(&self, frame: &mut UiFrame<'_>) {
        if let Some((_, rect, buffer)) = &self.presented {
            frame.blit_from_signed(buffer, rect.x, rect.y);
        }
    }

    fn blank_buffer(rect: &PopupRect) -> Buffer {
        let width = rect.width.clamp(0, u16::MAX as i32) as u16;
        let height = rect.height.clamp(0, u16::MAX as i32) as u16;
        Buffer::empty(Rect::new(0, 0, width, height))
    }
}

impl TextMetrics for TerminalPopupBackend {
    fn text_width(&self, text: &str) -> i32 {
        Line::from(text).width() as i32
    }

    fn line_height(&self) -> i32 {
        1
    }
}

impl PopupBackend for TerminalPopupBackend {
    type Window = TerminalWindow;
    type Surface = TerminalSurface;

    fn screen_at(&self, _x: i32, _y: i32) -> ScreenRect {
        ScreenRect {
            x: self.screen.x as i32,
            y: self.screen.y as i32,
            width: self.screen.width as i32,
            height: self.screen.height as i32,
        }
    }

    fn pointer(&self) -> PointerPosition<TerminalWindow> {
        self.pointer
    }

    fn create_surface(&mut self, layout: &PopupLayout) -> TerminalSurface {
        self.next_id = self.next_id.wrapping_add(1);
        TerminalSurface {
            window: TerminalWindow::Popup(self.next_id),
            rect: layout.rect,
            buffer: Self::blank_buffer(&layout.rect),
        }
    }

    fn configure_surface(&mut self, surface: &mut TerminalSurface, layout: &PopupLayout) {
        surface.rect = layout.rect;
        surface.buffer = Self::blank_buffer(&layout.rect);
    }

    fn paint(&mut self, surface: &mut TerminalSurface, layout: &PopupLayout) {
        let area = surface.buffer.area;
        let mut frame = UiFrame::from_parts(area, &mut surface.buffer);
        frame.fill(0, 0, layout.rect.width, layout.rect.height, theme::popup_style());
        let text_width = layout.rect.width - layout.text_x;
        for (row, line) in layout.lines.iter().enumerate() {
            let (x, y) = layout.line_origin(row);
            frame.put_str(x, y, line, text_width, theme::popup_style());
        }
    }

    fn present(&mut self, surface: &TerminalSurface) {
        self.presented = Some((surface.window, surface.rect, surface.buffer.clone()));
    }

    fn surface_window(&self, surface: &TerminalSurface) -> TerminalWindow {
        surface.window
    }

    fn destroy_surface(&mut self, _surface: TerminalSurface) {
        self.presented = None;
    }
}
