//! Transient tooltip-style popups.
//!
//! `PopupController` owns at most one popup at a time. It is driven by show
//! requests, a periodic tick that hides the popup once the pointer has moved
//! away from where it was shown, and events delivered to the popup's own
//! window. Everything platform-specific (screen geometry, pointer queries,
//! surfaces and painting) goes through a `PopupBackend`.

pub mod placement;
pub mod terminal;

use std::fmt;

use serde::Deserialize;

use crate::config::PopupConfig;

pub use placement::{PopupLayout, PopupRect, ScreenRect, TextMetrics};
pub use terminal::{TerminalPopupBackend, TerminalSurface, TerminalWindow};

/// Part of the UI a popup request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupContext {
    Button,
    Clock,
    Menu,
    Task,
    Pager,
}

impl PopupContext {
    pub const ALL: [PopupContext; 5] = [
        PopupContext::Button,
        PopupContext::Clock,
        PopupContext::Menu,
        PopupContext::Task,
        PopupContext::Pager,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of contexts allowed to show popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupMask(u8);

impl PopupMask {
    pub const NONE: PopupMask = PopupMask(0);
    pub const ALL: PopupMask = PopupMask(0b1_1111);

    pub fn allows(&self, context: PopupContext) -> bool {
        self.0 & context.bit() != 0
    }

    pub fn insert(&mut self, context: PopupContext) {
        self.0 |= context.bit();
    }
}

impl Default for PopupMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<PopupContext> for PopupMask {
    fn from_iter<I: IntoIterator<Item = PopupContext>>(iter: I) -> Self {
        let mut mask = PopupMask::NONE;
        for context in iter {
            mask.insert(context);
        }
        mask
    }
}

/// Pointer coordinates and the window under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition<W> {
    pub x: i32,
    pub y: i32,
    pub window: W,
}

/// Events delivered to the popup's own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupWindowEvent {
    /// Part of the window needs repainting; `remaining` more exposes follow.
    Expose { remaining: u32 },
    Motion,
}

/// What a show request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupRequest {
    /// The context is not allowed to show popups.
    Masked,
    /// The text has nothing to show.
    Empty,
    /// The same text is already shown for the same anchor.
    Unchanged,
    /// The screen under the anchor is too small to hold a popup.
    NoRoom,
    Shown,
    Replaced,
}

/// Platform services used by the popup controller.
pub trait PopupBackend: TextMetrics {
    type Window: Copy + Eq + fmt::Debug;
    type Surface;

    fn screen_at(&self, x: i32, y: i32) -> ScreenRect;
    fn pointer(&self) -> PointerPosition<Self::Window>;

    fn create_surface(&mut self, layout: &PopupLayout) -> Self::Surface;
    /// Move and resize an existing surface to match `layout`.
    fn configure_surface(&mut self, surface: &mut Self::Surface, layout: &PopupLayout);
    fn paint(&mut self, surface: &mut Self::Surface, layout: &PopupLayout);
    /// Copy painted contents to the screen.
    fn present(&mut self, surface: &Self::Surface);
    fn surface_window(&self, surface: &Self::Surface) -> Self::Window;
    fn destroy_surface(&mut self, surface: Self::Surface);
}

struct ShownPopup<B: PopupBackend> {
    text: String,
    anchor: (i32, i32),
    pointer: PointerPosition<B::Window>,
    layout: PopupLayout,
    surface: B::Surface,
}

enum PopupPhase<B: PopupBackend> {
    Hidden,
    Shown(ShownPopup<B>),
}

pub struct PopupController<B: PopupBackend> {
    backend: B,
    mask: PopupMask,
    padding: i32,
    line_spacing: i32,
    phase: PopupPhase<B>,
}

impl<B: PopupBackend> PopupController<B> {
    pub fn new(backend: B, cfg: &PopupConfig) -> Self {
        Self {
            backend,
            mask: cfg.mask(),
            padding: cfg.padding,
            line_spacing: cfg.line_spacing,
            phase: PopupPhase::Hidden,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, PopupPhase::Shown(_))
    }

    pub fn layout(&self) -> Option<&PopupLayout> {
        match &self.phase {
            PopupPhase::Shown(shown) => Some(&shown.layout),
            PopupPhase::Hidden => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.phase {
            PopupPhase::Shown(shown) => Some(&shown.text),
            PopupPhase::Hidden => None,
        }
    }

    /// Show `text` anchored at screen position `(x, y)`.
    pub fn request(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        context: PopupContext,
    ) -> PopupRequest {
        if !self.mask.allows(context) {
            return PopupRequest::Masked;
        }

        let lines = placement::split_lines(text);
        if lines.is_empty() {
            return PopupRequest::Empty;
        }

        if let PopupPhase::Shown(shown) = &self.phase
            && shown.anchor == (x, y)
            && shown.text == text
        {
            tracing::trace!(x, y, "popup already shown");
            return PopupRequest::Unchanged;
        }

        let screen = self.backend.screen_at(x, y);
        if !screen.can_hold_popup() {
            tracing::debug!(?screen, "screen too small for popup");
            return PopupRequest::NoRoom;
        }

        let (width, height) =
            placement::measure(&lines, &self.backend, self.padding, self.line_spacing);
        let line_height = self.backend.line_height();
        let layout = PopupLayout {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            rect: placement::place(x, y, width, height, line_height, &screen),
            line_pitch: line_height + self.line_spacing,
            text_x: self.padding / 2,
        };
        let pointer = self.backend.pointer();

        let phase = std::mem::replace(&mut self.phase, PopupPhase::Hidden);
        let (mut surface, outcome) = match phase {
            PopupPhase::Shown(shown) => {
                let mut surface = shown.surface;
                self.backend.configure_surface(&mut surface, &layout);
                (surface, PopupRequest::Replaced)
            }
            PopupPhase::Hidden => (self.backend.create_surface(&layout), PopupRequest::Shown),
        };
        self.backend.paint(&mut surface, &layout);
        self.backend.present(&surface);

        tracing::debug!(
            ?context,
            x = layout.rect.x,
            y = layout.rect.y,
            width = layout.rect.width,
            height = layout.rect.height,
            ?outcome,
            "showing popup"
        );
        self.phase = PopupPhase::Shown(ShownPopup {
            text: text.to_string(),
            anchor: (x, y),
            pointer,
            layout,
            surface,
        });
        outcome
    }

    /// Periodic check: hide the popup once the pointer is no longer where it
    /// was when the popup appeared. Returns whether the popup was hidden.
    pub fn tick(&mut self, pointer: PointerPosition<B::Window>) -> bool {
        let stale = match &self.phase {
            PopupPhase::Shown(shown) => shown.pointer != pointer,
            PopupPhase::Hidden => false,
        };
        if stale {
            tracing::debug!(x = pointer.x, y = pointer.y, "pointer moved, hiding popup");
            self.hide();
        }
        stale
    }

    /// Pointer motion over the popup window hides it immediately.
    pub fn on_motion(&mut self) -> bool {
        self.hide()
    }

    /// Repaint the popup window from its surface.
    pub fn on_expose(&mut self) {
        if let PopupPhase::Shown(shown) = &self.phase {
            self.backend.present(&shown.surface);
        }
    }

    /// Route an event for `window`. Returns `true` if the event belonged to
    /// the popup.
    pub fn process_event(&mut self, window: B::Window, event: PopupWindowEvent) -> bool {
        let PopupPhase::Shown(shown) = &self.phase else {
            return false;
        };
        if self.backend.surface_window(&shown.surface) != window {
            return false;
        }
        match event {
            PopupWindowEvent::Expose { remaining: 0 } => self.on_expose(),
            PopupWindowEvent::Expose { .. } => {}
            PopupWindowEvent::Motion => {
                self.on_motion();
            }
        }
        true
    }

    /// Release the popup, if any.
    pub fn hide(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, PopupPhase::Hidden) {
            PopupPhase::Shown(shown) => {
                self.backend.destroy_surface(shown.surface);
                true
            }
            PopupPhase::Hidden => false,
        }
    }

    /// Release held resources and hand the backend back.
    pub fn shutdown(mut self) -> B {
        self.hide();
        self.backend
    }
}
