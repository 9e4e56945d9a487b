//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area.
//!
//! Frames and popups are positioned with signed coordinates and may hang off
//! any edge of the terminal. Writing out-of-bounds into the underlying
//! `Buffer` panics, so every draw call here is clipped to the visible area
//! and painters can work in their own coordinate space without guarding each
//! cell.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    ///
    /// Used for offscreen painting (popup surfaces) and in tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        let clipped = area.intersection(self.area);
        if clipped.width > 0 && clipped.height > 0 {
            widget.render(clipped, self.buffer);
        }
    }

    fn cell_coords(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let x0 = self.area.x as i32;
        let y0 = self.area.y as i32;
        if x < x0
            || y < y0
            || x >= x0 + self.area.width as i32
            || y >= y0 + self.area.height as i32
        {
            return None;
        }
        Some((x as u16, y as u16))
    }

    /// Set a single cell at signed coordinates.
    pub fn put(&mut self, x: i32, y: i32, symbol: &str, style: Style) {
        if let Some(pos) = self.cell_coords(x, y)
            && let Some(cell) = self.buffer.cell_mut(pos)
        {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Background currently set on the cell at signed coordinates.
    pub fn bg_at(&self, x: i32, y: i32) -> Option<Color> {
        let pos = self.cell_coords(x, y)?;
        self.buffer.cell(pos).map(|cell| cell.bg)
    }

    /// Write `text` starting at signed coordinates, at most `max_width` cells.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, max_width: i32, style: Style) {
        let mut buf = [0u8; 4];
        for (idx, ch) in text.chars().take(max_width.max(0) as usize).enumerate() {
            self.put(x + idx as i32, y, ch.encode_utf8(&mut buf), style);
        }
    }

    /// Fill a signed rectangle with blanks in `style`.
    pub fn fill(&mut self, x: i32, y: i32, width: i32, height: i32, style: Style) {
        for row in y..y + height {
            for col in x..x + width {
                self.put(col, row, " ", style);
            }
        }
    }

    /// Copy `src` (whose area starts at the origin) so its top-left lands on
    /// the signed position `(x, y)`.
    pub fn blit_from_signed(&mut self, src: &Buffer, x: i32, y: i32) {
        let src_area = src.area;
        for sy in 0..src_area.height {
            for sx in 0..src_area.width {
                let Some(pos) = self.cell_coords(x + sx as i32, y + sy as i32) else {
                    continue;
                };
                if let (Some(src_cell), Some(dst_cell)) =
                    (src.cell((sx, sy)), self.buffer.cell_mut(pos))
                {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}
