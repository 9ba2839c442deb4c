//! Main TUI application state and logic

use crate::session::{SessionController, SessionStatus};
use crate::stepper::SortVariant;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// How long to block on input each frame; short enough that the 10ms step
/// interval is never starved for more than one fire
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// The main application state
pub struct App {
    /// The sorting session being visualized
    pub controller: SessionController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When the previous frame was processed, for computing deltas
    last_frame: Instant,
}

impl App {
    /// Create a new app around the given session
    pub fn new(controller: SessionController) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Ready! Press b, s, or i to sort."),
            last_frame: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.last_frame = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Feed elapsed wall-clock time to the session; the scheduler
            // decides whether a sort step fires this frame
            let dt = self.last_frame.elapsed().as_secs_f32();
            self.last_frame = Instant::now();

            let active = self.controller.active_variant();
            let status = self.controller.advance(dt);

            // A Running -> Idle transition means the sort just finished
            if status == SessionStatus::Idle {
                if let Some(variant) = active {
                    let steps = self
                        .controller
                        .stats(variant)
                        .map(|s| s.last_yields)
                        .unwrap_or(0);
                    self.status_message =
                        format!("{} sort complete ({} steps)", variant.name(), steps);
                }
            }

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI: bars pane on top, one-line status bar below
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        super::panes::render_bars_pane(
            frame,
            chunks[0],
            self.controller.snapshot(),
            self.controller.active_variant(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.controller.status(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.start_sort(SortVariant::Bubble);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.start_sort(SortVariant::Selection);
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.start_sort(SortVariant::Insertion);
            }
            KeyCode::Char(' ') => {
                if self.controller.status() == SessionStatus::Running {
                    self.controller.request_cancel();
                    self.status_message = String::from("Sort cancelled");
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.controller.status() == SessionStatus::Idle {
                    self.controller.request_refill();
                    self.status_message = String::from("Buffer refilled");
                }
            }
            _ => {}
        }
    }

    /// Request a sort run; ignored (with no message churn) while one is active
    fn start_sort(&mut self, variant: SortVariant) {
        if self.controller.status() == SessionStatus::Idle {
            self.controller.request_start(variant);
            self.status_message = format!("{} sort started", variant.name());
        }
    }
}
