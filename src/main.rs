use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use indoc::indoc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use tracing::Level;

use frame_wm::config::{Config, DecorationConfig};
use frame_wm::constants::POPUP_TICK_INTERVAL;
use frame_wm::drivers::InputDriver;
use frame_wm::drivers::console::ConsoleDriver;
use frame_wm::event_loop::{ControlFlow, EventLoop, Ticker};
use frame_wm::popup::{
    PointerPosition, PopupContext, PopupBackend, PopupController, PopupWindowEvent, TerminalPopupBackend,
    TerminalWindow,
};
use frame_wm::theme;
use frame_wm::tracing_sub::{self, LogSink};
use frame_wm::ui::UiFrame;
use frame_wm::window::{
    Action, ActionKind, BorderFlags, DecorationState, FrameDecorator, FrameGeometry, ShapeSupport,
    apply_drag, border_insets, classify, compute_buttons, frame_size,
};

const TITLE: &str = "frame-wm demo";

const HELP: &str = indoc! {"
    drag the title bar to move, the edges to resize
    buttons: close quits, maximize toggles, minimize shades
    keys: a active, f fullscreen, r corners, m mouse, q/Esc quit
"};

#[derive(Parser, Debug)]
#[command(
    name = "frame-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive demo of a decorated window frame in the terminal"
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Title bar height in cells (overrides the config file).
    #[arg(long = "title-height", value_name = "CELLS", default_value_t = 3)]
    title_height: i32,

    /// Outline width in cells (overrides the config file).
    #[arg(long = "border-width", value_name = "CELLS", default_value_t = 1)]
    border_width: i32,

    /// Append logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let sink = match &cli.log_file {
        Some(path) => LogSink::file(path)?,
        None => LogSink::Discard,
    };
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_sub::init(sink, level);

    let mut config = Config::load_or_default(cli.config.as_deref());
    // Terminal cells are far coarser than pixels, so the pixel-sized
    // defaults are replaced by the cell-sized command line values.
    config.decoration.title_height = cli.title_height;
    config.decoration.border_width = cli.border_width;
    config.popup.padding = 2;
    config.popup.line_spacing = 0;
    config.validate().map_err(io::Error::other)?;

    let mut driver = ConsoleDriver::new()?;
    driver.enter()?;
    let size = driver.terminal().size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    let mut app = App::new(&config, screen);

    let mut event_loop = EventLoop::new(driver, Duration::from_millis(16));
    let result = event_loop.run(|driver, event| {
        if let Some(Event::Key(key)) = &event
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('m')
        {
            app.mouse_capture = !app.mouse_capture;
            driver.set_mouse_capture(app.mouse_capture)?;
        }
        let flow = match event {
            Some(event) => app.handle_event(event),
            None => {
                app.on_idle(Instant::now());
                ControlFlow::Continue
            }
        };
        driver.terminal().draw(|frame| app.render(frame))?;
        Ok(flow)
    });

    event_loop.driver().exit()?;
    result
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    action: Action,
    start: FrameGeometry,
    column: i32,
    row: i32,
}

struct App {
    cfg: DecorationConfig,
    decorator: FrameDecorator,
    shape: ShapeSupport,
    state: DecorationState,
    /// Frame origin on screen plus content size.
    geometry: FrameGeometry,
    restore: Option<FrameGeometry>,
    screen: Rect,
    drag: Option<Drag>,
    hover: Action,
    popup: PopupController<TerminalPopupBackend>,
    ticker: Ticker,
    mouse_capture: bool,
}

impl App {
    fn new(config: &Config, screen: Rect) -> Self {
        let cfg = config.decoration;
        let mut state = DecorationState::new(48, 12, BorderFlags::full());
        state.status.active = true;
        let shape = ShapeSupport::Rounded;
        Self {
            cfg,
            decorator: FrameDecorator::new(cfg, shape),
            shape,
            state,
            geometry: FrameGeometry {
                x: 4,
                y: 2,
                width: state.width,
                height: state.height,
            },
            restore: None,
            screen,
            drag: None,
            hover: Action::NONE,
            popup: PopupController::new(TerminalPopupBackend::new(screen), &config.popup),
            ticker: Ticker::new(POPUP_TICK_INTERVAL, Instant::now()),
            mouse_capture: true,
        }
    }

    fn sync_state(&mut self) {
        self.state.width = self.geometry.width;
        self.state.height = self.geometry.height;
    }

    fn frame_contains(&self, column: i32, row: i32) -> bool {
        let (width, height) = frame_size(&self.state, &self.cfg);
        let x = column - self.geometry.x;
        let y = row - self.geometry.y;
        x >= 0 && y >= 0 && x < width && y < height
    }

    fn handle_event(&mut self, event: Event) -> ControlFlow {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return ControlFlow::Continue;
                }
                // q, Ctrl-Q and Esc all quit.
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return ControlFlow::Quit,
                    KeyCode::Char('a') => self.state.status.active = !self.state.status.active,
                    KeyCode::Char('f') => {
                        self.state.status.fullscreen = !self.state.status.fullscreen;
                    }
                    KeyCode::Char('r') => {
                        self.shape = match self.shape {
                            ShapeSupport::Rounded => ShapeSupport::Rectangular,
                            ShapeSupport::Rectangular => ShapeSupport::Rounded,
                        };
                        self.decorator = FrameDecorator::new(self.cfg, self.shape);
                    }
                    _ => {}
                }
                ControlFlow::Continue
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.screen = Rect::new(0, 0, width, height);
                self.popup.backend_mut().set_screen(self.screen);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ControlFlow {
        let column = mouse.column as i32;
        let row = mouse.row as i32;

        if let Some(window) = self.popup.backend().window_at(column, row) {
            if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                self.popup.process_event(window, PopupWindowEvent::Motion);
            }
            return ControlFlow::Continue;
        }

        let window = if self.frame_contains(column, row) {
            TerminalWindow::Frame(0)
        } else {
            TerminalWindow::Desktop
        };
        self.popup.backend_mut().set_pointer(PointerPosition {
            x: column,
            y: row,
            window,
        });

        let local_x = column - self.geometry.x;
        let local_y = row - self.geometry.y;
        // A fullscreen window has no frame to interact with.
        self.hover = if self.state.status.fullscreen {
            Action::NONE
        } else {
            classify(&self.state, &self.cfg, local_x, local_y)
        };

        match mouse.kind {
            MouseEventKind::Moved => self.show_tooltip(),
            MouseEventKind::Down(MouseButton::Left) => {
                return self.press(column, row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag {
                    self.geometry = apply_drag(
                        drag.start,
                        drag.action,
                        column - drag.column,
                        row - drag.row,
                        self.cfg.title_height * 3,
                        1,
                    );
                    self.sync_state();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag = None,
            _ => {}
        }
        ControlFlow::Continue
    }

    fn show_tooltip(&mut self) {
        let anchor_y = self.geometry.y + self.cfg.title_height;
        if self.hover.kind() == ActionKind::Menu {
            self.popup
                .request("Window menu", self.geometry.x, anchor_y, PopupContext::Button);
            return;
        }
        let buttons = compute_buttons(&self.state, &self.cfg);
        if let Some(button) = buttons
            .iter()
            .find(|button| Action::from(button.kind) == self.hover)
        {
            self.popup.request(
                button.kind.label(),
                self.geometry.x + button.offset,
                anchor_y,
                PopupContext::Button,
            );
        }
    }

    fn press(&mut self, column: i32, row: i32) -> ControlFlow {
        match self.hover.kind() {
            ActionKind::Move | ActionKind::Resize => {
                self.drag = Some(Drag {
                    action: self.hover,
                    start: self.geometry,
                    column,
                    row,
                });
            }
            ActionKind::Close => return ControlFlow::Quit,
            ActionKind::Maximize => self.toggle_maximize(),
            ActionKind::Minimize => self.state.status.shaded = !self.state.status.shaded,
            ActionKind::Menu => {
                let info = format!(
                    "{TITLE}\n{}x{} at {},{}\n{}",
                    self.geometry.width,
                    self.geometry.height,
                    self.geometry.x,
                    self.geometry.y,
                    HELP.trim_end()
                );
                self.popup.request(&info, column, row, PopupContext::Menu);
            }
            ActionKind::None => {}
        }
        ControlFlow::Continue
    }

    fn toggle_maximize(&mut self) {
        if let Some(restore) = self.restore.take() {
            self.geometry = restore;
            self.state.status.maximized = false;
        } else {
            let insets = border_insets(&self.state, &self.cfg);
            self.restore = Some(self.geometry);
            self.geometry = FrameGeometry {
                x: 0,
                y: 0,
                width: self.screen.width as i32 - insets.east - insets.west,
                // Keep the status line visible.
                height: self.screen.height as i32 - 1 - insets.north - insets.south,
            };
            self.state.status.maximized = true;
        }
        self.sync_state();
    }

    fn on_idle(&mut self, now: Instant) {
        if self.ticker.due(now) {
            let pointer = self.popup.backend().pointer();
            self.popup.tick(pointer);
        }
    }

    fn render(&self, frame: &mut Frame) {
        let mut ui = UiFrame::new(frame);
        let area = ui.area();

        let insets = border_insets(&self.state, &self.cfg);
        if !self.state.status.shaded {
            let content_x = self.geometry.x + insets.west;
            let content_y = self.geometry.y + insets.north;
            ui.fill(
                content_x,
                content_y,
                self.geometry.width,
                self.geometry.height,
                Style::default(),
            );
            for (idx, line) in HELP.lines().enumerate() {
                let row = content_y + 1 + idx as i32;
                if row < content_y + self.geometry.height {
                    ui.put_str(
                        content_x + 1,
                        row,
                        line,
                        self.geometry.width - 2,
                        Style::default(),
                    );
                }
            }
        }
        self.decorator
            .render(&mut ui, self.geometry.x, self.geometry.y, &self.state, TITLE);

        let status = format!(
            " {} | {}x{} at {},{}",
            self.hover,
            self.geometry.width,
            self.geometry.height,
            self.geometry.x,
            self.geometry.y
        );
        let status_area = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        ui.render_widget(
            Paragraph::new(status).style(theme::status_style()),
            status_area,
        );

        self.popup.backend().render(&mut ui);
    }
}
