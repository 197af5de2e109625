//! TUI application model (Elm architecture).
//!
//! The model owns the [`Notebook`]. Key actions mutate its parameters or seed,
//! then [`TuiApp::recompute`] runs one evaluation pass; the cell events that
//! pass emits come back through the bridge channel and feed the header and
//! the cell log.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};
use crossterm::event;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::execute;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{info, warn};

use corrlab_core::graph::{CellId, Notebook};
use corrlab_core::params::ParamId;

use crate::bridge::TuiBridgeObserver;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::KeyAction;
use crate::logs::{render_logs, LogScrollState};
use crate::messages::TuiMessage;
use crate::report::render_report;
use crate::scatter::render_scatter;
use crate::sliders::{render_sliders, SLIDER_HEIGHT};
use crate::sparkline::{render_sparkline, HistoryBuffer};
use crate::styles::ColorTheme;
use crate::table::render_table;

/// Maximum retained log lines.
const MAX_LOGS: usize = 500;

/// Number of |r| values kept for the sparkline.
const HISTORY_CAPACITY: usize = 60;

/// Bridge channel capacity; one pass emits at most one event per cell.
const CHANNEL_CAPACITY: usize = 256;

/// Lines moved by one log page.
const LOG_PAGE: usize = 10;

/// Rows of the bottom-right panel (10 preview rows, header, borders).
const DETAIL_HEIGHT: u16 = 13;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// The reactive notebook driven by the sliders.
    notebook: Notebook,
    /// Slider receiving adjustments.
    pub focus: ParamId,
    /// Show the preview table.
    pub show_table: bool,
    /// Show the cell log.
    pub show_logs: bool,
    /// Log messages.
    pub logs: Vec<String>,
    /// Log panel scroll state.
    pub log_scroll: LogScrollState,
    /// |r| of every evaluation pass with a defined correlation.
    pub history: HistoryBuffer,
    /// Summed cell durations of the latest pass.
    pub last_pass: Duration,
    /// Generation the `last_pass` total belongs to.
    pass_generation: u64,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create the app, attach the cell bridge, and run the first pass.
    #[must_use]
    pub fn new(notebook: Notebook) -> Self {
        let (tx, rx) = bounded(CHANNEL_CAPACITY);
        notebook.register(Arc::new(TuiBridgeObserver::new(tx)));

        let mut app = Self {
            should_quit: false,
            notebook,
            focus: ParamId::SampleSize,
            show_table: true,
            show_logs: true,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            history: HistoryBuffer::new(HISTORY_CAPACITY),
            last_pass: Duration::ZERO,
            pass_generation: 0,
            rx,
            theme: ColorTheme::default(),
        };
        app.recompute();
        app
    }

    /// The notebook behind the view.
    #[must_use]
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Run one evaluation pass and absorb its events.
    pub fn recompute(&mut self) {
        let recomputed = self.notebook.evaluate();
        self.update();

        if !recomputed.contains(&CellId::Correlation) {
            return;
        }
        let outcome = self.notebook.correlation().map(|r| r.map_err(ToString::to_string));
        match outcome {
            Some(Ok(r)) => self.history.push(r.abs()),
            Some(Err(err)) => {
                warn!(params = ?self.notebook.params(), error = %err, "Correlation undefined");
                self.push_log(format!("[WARN] correlation undefined: {err}"));
            }
            None => {}
        }
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Cell(event) => {
                if event.generation != self.pass_generation {
                    self.pass_generation = event.generation;
                    self.last_pass = Duration::ZERO;
                }
                self.last_pass += event.duration;
                self.push_log(format!(
                    "#{} {} recomputed in {:.1?}",
                    event.generation, event.cell, event.duration
                ));
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Tick => {}
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let spec = self.focus.spec();
        let changed = match action {
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::SelectPrev => {
                self.focus = self.focus.prev();
                false
            }
            KeyAction::SelectNext => {
                self.focus = self.focus.next();
                false
            }
            KeyAction::Decrease => self.notebook.step_param(self.focus, false),
            KeyAction::Increase => self.notebook.step_param(self.focus, true),
            KeyAction::Min => self.set_focused(spec.min),
            KeyAction::Max => self.set_focused(spec.max),
            KeyAction::Reset => self.set_focused(spec.default),
            KeyAction::Reseed => {
                let seed = self.notebook.seed().wrapping_add(1);
                self.notebook.set_seed(seed)
            }
            KeyAction::ToggleTable => {
                self.show_table = !self.show_table;
                false
            }
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
                false
            }
            KeyAction::LogPageUp => {
                self.log_scroll.page_up(LOG_PAGE);
                false
            }
            KeyAction::LogPageDown => {
                self.log_scroll.page_down(LOG_PAGE, self.logs.len());
                false
            }
            KeyAction::None => false,
        };

        if changed {
            self.recompute();
        }
    }

    fn set_focused(&mut self, value: f64) -> bool {
        match self.notebook.set_param(self.focus, value) {
            Ok(changed) => changed,
            Err(err) => {
                self.push_log(format!("[ERROR] {err}"));
                false
            }
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            let removed = self.logs.len() - MAX_LOGS;
            self.logs.drain(..removed);
            self.log_scroll.on_trimmed(removed);
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Split the screen into header, left column, right column, and footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Left column: sliders, summary, |r| sparkline.
    #[must_use]
    pub fn compute_controls_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SLIDER_HEIGHT * 3),
                Constraint::Min(4),
                Constraint::Length(5),
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Right column: the plot, with an optional detail strip below it.
    #[must_use]
    pub fn compute_output_layout(area: Rect, with_details: bool) -> (Rect, Option<Rect>) {
        if !with_details {
            return (area, None);
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(DETAIL_HEIGHT)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, controls_area, output_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            self.notebook.seed(),
            self.notebook.generation(),
            self.last_pass,
            &self.theme,
        );

        let (sliders_rect, summary_rect, sparkline_rect) =
            Self::compute_controls_layout(controls_area);
        render_sliders(
            frame,
            sliders_rect,
            &self.notebook.params(),
            self.focus,
            &self.theme,
        );
        render_report(frame, summary_rect, self.notebook.summary(), &self.theme);
        render_sparkline(frame, sparkline_rect, &self.history, &self.theme);

        let (plot_rect, details) =
            Self::compute_output_layout(output_area, self.show_table || self.show_logs);
        render_scatter(frame, plot_rect, self.notebook.plot(), &self.theme);

        if let Some(details) = details {
            let rows = self.notebook.preview().unwrap_or(&[]);
            match (self.show_table, self.show_logs) {
                (true, true) => {
                    let chunks = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Length(30), Constraint::Min(10)])
                        .split(details);
                    render_table(frame, chunks[0], rows, &self.theme);
                    render_logs(frame, chunks[1], &self.logs, &self.log_scroll, &self.theme);
                }
                (true, false) => render_table(frame, details, rows, &self.theme),
                _ => render_logs(frame, details, &self.logs, &self.log_scroll, &self.theme),
            }
        }

        render_footer(frame, footer_area, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        info!(seed = self.notebook.seed(), "Explorer started");

        let result = self.event_loop(&mut terminal);

        Self::teardown_terminal(&mut terminal)?;
        info!(passes = self.notebook.generation(), "Explorer closed");
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            let msg = if event::poll(tick_rate)? {
                TuiMessage::from_terminal(&event::read()?)
            } else {
                TuiMessage::Tick
            };
            self.handle_message(msg);
            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrlab_core::params::Params;
    use corrlab_core::{correlation, generate_seeded};
    use ratatui::backend::TestBackend;

    fn make_app() -> TuiApp {
        TuiApp::new(Notebook::with_defaults())
    }

    fn screen(app: &TuiApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let frame = terminal.draw(|frame| app.render(frame)).unwrap();
        frame
            .buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn initial_state_is_evaluated() {
        let app = make_app();
        assert!(!app.should_quit);
        assert_eq!(app.focus, ParamId::SampleSize);
        assert!(app.show_table);
        assert!(app.show_logs);
        assert_eq!(app.notebook().generation(), 1);
        assert!(app.notebook().dirty_cells().is_empty());
        assert_eq!(app.logs.len(), CellId::TOPOLOGICAL_ORDER.len());
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn first_pass_logs_every_cell_in_order() {
        let app = make_app();
        for (line, cell) in app.logs.iter().zip(CellId::TOPOLOGICAL_ORDER) {
            assert!(line.starts_with("#1 "), "{line}");
            assert!(line.contains(cell.name()), "{line}");
        }
    }

    #[test]
    fn increase_recomputes_and_matches_direct_computation() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Increase);
        assert_eq!(app.notebook().params().n(), 250);
        assert_eq!(app.notebook().generation(), 2);

        let expected = correlation(&generate_seeded(&app.notebook().params(), app.notebook().seed()));
        let r = app.notebook().correlation().unwrap().unwrap();
        assert!((r - expected.unwrap()).abs() < 1e-12);
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn slope_change_skips_seed_cell() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::SelectNext);
        assert_eq!(app.focus, ParamId::Slope);
        let before = app.logs.len();
        app.handle_key_action(KeyAction::Decrease);

        let pass: Vec<&String> = app.logs[before..].iter().collect();
        assert_eq!(pass.len(), 6);
        assert!(pass.iter().all(|l| l.starts_with("#2 ")));
        assert!(!pass.iter().any(|l| l.contains(" seed ")));
    }

    #[test]
    fn select_wraps_around() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::SelectPrev);
        assert_eq!(app.focus, ParamId::Noise);
        app.handle_key_action(KeyAction::SelectNext);
        assert_eq!(app.focus, ParamId::SampleSize);
    }

    #[test]
    fn saturated_slider_does_not_recompute() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Max);
        assert_eq!(app.notebook().params().n(), 1000);
        let generation = app.notebook().generation();
        app.handle_key_action(KeyAction::Increase);
        assert_eq!(app.notebook().generation(), generation);
    }

    #[test]
    fn min_and_reset() {
        let mut app = make_app();
        app.focus = ParamId::Noise;
        app.handle_key_action(KeyAction::Min);
        assert!(app.notebook().params().noise().abs() < f64::EPSILON);
        let r = app.notebook().correlation().unwrap().unwrap();
        assert!((r - 1.0).abs() < 1e-9);

        app.handle_key_action(KeyAction::Reset);
        assert_eq!(app.notebook().params(), Params::default());
    }

    #[test]
    fn reseed_changes_data() {
        let mut app = make_app();
        let before = app.notebook().dataset().unwrap().clone();
        app.handle_key_action(KeyAction::Reseed);
        assert_eq!(app.notebook().seed(), corrlab_core::DEFAULT_SEED + 1);
        assert_ne!(app.notebook().dataset().unwrap(), &before);
        assert!(app.logs.iter().any(|l| l.starts_with("#2 seed ")));
    }

    #[test]
    fn degenerate_correlation_is_logged_not_fatal() {
        let mut app = make_app();
        app.notebook.set_params(Params::new(200, 0.0, 0.0).unwrap());
        app.recompute();

        assert!(app.notebook().correlation().unwrap().is_err());
        assert!(app.logs.iter().any(|l| l.starts_with("[WARN] correlation undefined")));
        assert!(app.notebook().summary().unwrap().contains("undefined"));
        assert!(!app.should_quit);

        app.focus = ParamId::Noise;
        app.handle_key_action(KeyAction::Increase);
        assert!(app.notebook().correlation().unwrap().is_ok());
    }

    #[test]
    fn toggles_and_quit() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::ToggleTable);
        app.handle_key_action(KeyAction::ToggleLogs);
        assert!(!app.show_table);
        assert!(!app.show_logs);
        app.handle_message(TuiMessage::KeyPress(KeyAction::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn last_pass_sums_current_generation() {
        let mut app = make_app();
        let event = |generation, micros| {
            TuiMessage::Cell(corrlab_core::CellEvent {
                cell: CellId::Plot,
                generation,
                duration: Duration::from_micros(micros),
            })
        };
        app.handle_message(event(9, 100));
        app.handle_message(event(9, 50));
        assert_eq!(app.last_pass, Duration::from_micros(150));
        app.handle_message(event(10, 20));
        assert_eq!(app.last_pass, Duration::from_micros(20));
    }

    #[test]
    fn logs_are_capped() {
        let mut app = make_app();
        for i in 0..(MAX_LOGS + 20) {
            app.push_log(format!("line {i}"));
        }
        assert_eq!(app.logs.len(), MAX_LOGS);
        assert_eq!(app.log_scroll.offset, MAX_LOGS - 1);
        assert_eq!(app.logs.last().unwrap(), &format!("line {}", MAX_LOGS + 19));
    }

    #[test]
    fn ticks_leave_the_model_untouched() {
        let mut app = make_app();
        let logs = app.logs.len();
        let generation = app.notebook().generation();
        app.handle_message(TuiMessage::Tick);
        assert_eq!(app.logs.len(), logs);
        assert_eq!(app.notebook().generation(), generation);
        assert!(!app.should_quit);
    }

    #[test]
    fn key_press_messages_drive_the_notebook() {
        let mut app = make_app();
        let seed = app.notebook().seed();
        app.handle_message(TuiMessage::KeyPress(KeyAction::Reseed));
        assert_ne!(app.notebook().seed(), seed);
    }

    #[test]
    fn layout_partitions_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let (header, left, right, footer) = TuiApp::compute_layout(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(left.height, 35);
        assert_eq!(left.width + right.width, 120);

        let (sliders, _, sparkline) = TuiApp::compute_controls_layout(left);
        assert_eq!(sliders.height, 9);
        assert_eq!(sparkline.height, 5);

        let (plot, details) = TuiApp::compute_output_layout(right, false);
        assert_eq!(plot, right);
        assert!(details.is_none());
        let (_, details) = TuiApp::compute_output_layout(right, true);
        assert_eq!(details.unwrap().height, DETAIL_HEIGHT);
    }

    #[test]
    fn full_render() {
        let app = make_app();
        let text = screen(&app, 140, 45);
        assert!(text.contains("seed 42"));
        assert!(text.contains("Sample size"));
        assert!(text.contains("Current settings"));
        assert!(text.contains("First 10 rows"));
        assert!(text.contains("Cell log"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn render_without_details() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::ToggleTable);
        app.handle_key_action(KeyAction::ToggleLogs);
        let text = screen(&app, 140, 45);
        assert!(!text.contains("First 10 rows"));
        assert!(!text.contains("Cell log"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let app = make_app();
        screen(&app, 30, 10);
    }
}
