//! Main application state and UI loop
//!
//! Contains the App struct and the mapping from terminal input to dashboard
//! operations

use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::dashboard::utils::nth;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::Backend};

/// Application state
#[derive(Debug)]
pub struct App {
    /// Selection state of the single dashboard view.
    dashboard: DashboardState,

    /// Cleared when the user asks to quit.
    running: bool,

    /// Area of the last drawn frame, used to hit-test mouse clicks.
    viewport: Rect,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(dashboard: DashboardState) -> Self {
        Self {
            dashboard,
            running: true,
            viewport: Rect::default(),
        }
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one terminal event to the dashboard.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.viewport = Rect::new(0, 0, width, height),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(path) = c.to_digit(10).and_then(|d| nth(d as usize - 1)) {
                    self.dashboard.select_path(path);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => self.dashboard.next_path(),
            KeyCode::Left | KeyCode::Char('h') => self.dashboard.previous_path(),
            KeyCode::Char('t') => self.dashboard.next_theme(),
            KeyCode::Char('T') => self.dashboard.previous_theme(),
            KeyCode::F(n @ 1..=5) => {
                if let Some(theme) = nth(n as usize - 1) {
                    self.dashboard.select_theme(theme);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.dashboard
                .handle_click(self.viewport, mouse.column, mouse.row);
        }
    }

    fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.running = false;
    }
}

/// Runs the dashboard until the user quits.
///
/// Each input event is handled to completion and immediately followed by a
/// redraw; nothing happens between events.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    while app.is_running() {
        let frame = terminal.draw(|f| render_dashboard(f, app.dashboard()))?;
        app.viewport = frame.area;
        app.handle_event(event::read()?);
    }
    Ok(())
}
