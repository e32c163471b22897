//! Main application struct and event loop for sidenav TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Frame, layout::Rect, style::Style};
use tracing::{debug, info};

use crate::error::TuiError;
use crate::keybindings::KeyBindings;
use crate::layout::{AppLayout, HitTarget, panel_block};
use crate::message::{Message, SettingsAction};
use crate::navigation::{Navigator, ViewId};
use crate::state::Focus;
use crate::views::{ContentHolder, ViewRenderer};
use crate::widgets::{FooterWidget, HeaderWidget, SidebarWidget};
use crate::{SidenavTerminal, Theme, restore_terminal, setup_terminal, sidenav_default};

/// Default input poll timeout.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Default sidebar width in columns.
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 16;

/// Runtime options supplied by the caller (usually from config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// How long to wait for input before looping again.
    pub tick_rate: Duration,
    /// Sidebar width in columns.
    pub sidebar_width: u16,
    /// Capture mouse clicks and movement.
    pub mouse: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            mouse: true,
        }
    }
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub sidebar: SidebarWidget,
    pub focus: Focus,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub options: AppOptions,
    pub running: bool,
    /// Last known terminal area, used for mouse hit-testing.
    viewport: Rect,
    needs_redraw: bool,
    frames: u64,
}

impl App {
    /// Creates a new App with default options. Nothing is mounted until
    /// [`App::start`] runs.
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Creates a new App with the given options.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            navigator: Navigator::new(),
            sidebar: SidebarWidget::new(),
            focus: Focus::default(),
            keybindings: KeyBindings::default(),
            theme: sidenav_default(),
            options,
            running: true,
            viewport: Rect::default(),
            needs_redraw: true,
            frames: 0,
        }
    }

    /// Presses the first sidebar button so the main panel is never empty.
    pub fn start(&mut self) -> Result<(), TuiError> {
        if let Some(message) = self.sidebar.press(0) {
            self.update(message)?;
        }
        info!(
            views = ?ViewId::ALL,
            mounted = ?self.active_view(),
            sidebar_width = self.options.sidebar_width,
            mouse = self.options.mouse,
            "sidenav started"
        );
        Ok(())
    }

    /// The view currently mounted in the main panel.
    pub fn active_view(&self) -> Option<ViewId> {
        self.navigator.active_view()
    }

    /// Buttons of the mounted content holder, in focus order.
    fn content_buttons(&self) -> &'static [SettingsAction] {
        match self.navigator.mounted() {
            Some(holder) => holder.buttons(),
            None => &[],
        }
    }

    /// Applies a message to the application state.
    ///
    /// This is the only place state changes. Any change that affects the
    /// screen marks the app for redraw.
    pub fn update(&mut self, message: Message) -> Result<(), TuiError> {
        match message {
            Message::Navigate(view) => {
                self.navigator.select_view(view);
                self.focus = Focus::Sidebar(view.index());
            }
            Message::Settings(action) => {
                let mounted = self.navigator.active_view();
                let view = self
                    .navigator
                    .mounted_mut()
                    .and_then(ContentHolder::settings_view_mut)
                    .ok_or(TuiError::NotMounted {
                        expected: ViewId::Settings,
                        mounted,
                    })?;
                view.apply(action);
                debug!(?action, label = view.label(), "settings action");
            }
            Message::FocusNext => {
                self.focus = self
                    .focus
                    .next(self.sidebar.len(), self.content_buttons().len());
            }
            Message::FocusPrev => {
                self.focus = self
                    .focus
                    .prev(self.sidebar.len(), self.content_buttons().len());
            }
            Message::Press => return self.press_focused(),
            Message::Click(target) => {
                self.focus = match target {
                    HitTarget::Sidebar(i) => Focus::Sidebar(i),
                    HitTarget::Content(i) => Focus::Content(i),
                };
                return self.press_focused();
            }
            Message::Hover(hovered) => {
                if !self.sidebar.set_hovered(hovered) {
                    return Ok(());
                }
            }
            Message::Quit => {
                info!("quit requested");
                self.running = false;
            }
        }

        if message.mutates_display() {
            self.request_redraw();
        }
        Ok(())
    }

    /// Dispatches the message of whichever button has focus.
    fn press_focused(&mut self) -> Result<(), TuiError> {
        let message = match self.focus {
            Focus::Sidebar(i) => self.sidebar.press(i),
            Focus::Content(i) => self.content_buttons().get(i).copied().map(Message::Settings),
        };
        match message {
            Some(message) => self.update(message),
            None => Ok(()),
        }
    }

    /// Handles a key event.
    ///
    /// Ctrl-C always quits; everything else goes through the keybindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), TuiError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.update(Message::Quit);
        }

        match self.keybindings.resolve(key, self.active_view()) {
            Some(message) => self.update(message),
            None => Ok(()),
        }
    }

    /// Handles a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), TuiError> {
        let layout = self.layout(self.viewport);
        let target = layout.hit(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(target) => self.update(Message::Click(target)),
                None => Ok(()),
            },
            MouseEventKind::Moved => {
                let hovered = match target {
                    Some(HitTarget::Sidebar(i)) => Some(i),
                    _ => None,
                };
                self.update(Message::Hover(hovered))
            }
            _ => Ok(()),
        }
    }

    /// Routes a terminal event.
    pub fn handle_event(&mut self, event: Event) -> Result<(), TuiError> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if self.options.mouse => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                self.request_redraw();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Schedules a redraw before the next input is read.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consumes the pending redraw, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Number of frames drawn by the event loop.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Computes the screen layout for `area`.
    pub fn layout(&self, area: Rect) -> AppLayout {
        AppLayout::compute(
            area,
            self.options.sidebar_width,
            self.sidebar.len(),
            self.content_buttons().len(),
        )
    }

    /// Renders the application to the terminal frame.
    pub fn render(&self, frame: &mut Frame) {
        let layout = self.layout(frame.area());
        let active = self.active_view();

        HeaderWidget::render(frame, layout.header, active, &self.theme);

        let focused = match self.focus {
            Focus::Sidebar(i) => Some(i),
            Focus::Content(_) => None,
        };
        self.sidebar.render(
            frame,
            layout.sidebar,
            &layout.sidebar_buttons,
            active,
            focused,
            &self.theme,
        );

        let mut panel = panel_block().border_style(Style::default().fg(self.theme.border));
        if let Some(holder) = self.navigator.mounted() {
            panel = panel.title(format!(" {} ", holder.title()));
        }
        frame.render_widget(panel, layout.main);

        if let Some(holder) = self.navigator.mounted() {
            holder.render(frame, layout.content, self);
        }

        FooterWidget::render(frame, layout.footer, active, &self.theme);
    }

    /// Runs the application until quit.
    ///
    /// Sets up the terminal, mounts the Home view, enters the render/input
    /// loop, and restores the terminal on exit.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = setup_terminal(self.options.mouse)?;

        let result = self.start().and_then(|()| self.event_loop(&mut terminal));

        // Always restore terminal, even if the loop failed
        restore_terminal(&mut terminal, self.options.mouse)?;
        info!(frames = self.frames, "sidenav exited");

        result
    }

    /// The core event loop. Separated from `run` for testability.
    fn event_loop(&mut self, terminal: &mut SidenavTerminal) -> Result<(), TuiError> {
        let size = terminal.size()?;
        self.viewport = Rect::new(0, 0, size.width, size.height);

        while self.running {
            if self.take_redraw() {
                let completed = terminal.draw(|f| self.render(f))?;
                self.viewport = completed.area;
                self.frames += 1;
            }

            if event::poll(self.options.tick_rate)? {
                self.handle_event(event::read()?)?;
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
