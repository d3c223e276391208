//! Main application struct and event loop
//!
//! Contains the App struct that drives the commit flow
//! (type selection, subject entry, confirmation), and the
//! terminal loop that feeds it key events and draws it.

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Padding, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info, warn};

use crate::git::{self, GitError, VersionControl};
use crate::input::{Input, ListMove};
use crate::pager;
use crate::state::{Outcome, Phase, SessionState};
use crate::ui::{self, layout, render_footer, Styles, TextEntry, TextInput};

/// Main application state
pub struct App<V: VersionControl, T: TextEntry = TextInput> {
    state: SessionState,
    vcs: V,
    entry: T,
    styles: Styles,
}

impl<V: VersionControl> App<V> {
    /// Read the staged files and build the app
    ///
    /// Returns `None` when nothing is staged; the interactive flow
    /// should not start in that case.
    pub fn start(vcs: V, page_size: usize) -> Result<Option<Self>, GitError> {
        let staged = git::list_staged_files(&vcs)?;
        if staged.is_empty() {
            return Ok(None);
        }

        let entry = TextInput::new(
            "Enter commit message",
            layout::INPUT_CHAR_LIMIT,
            layout::INPUT_WIDTH,
        );
        Ok(Some(Self::new(SessionState::new(staged, page_size), vcs, entry)))
    }
}

impl<V: VersionControl, T: TextEntry> App<V, T> {
    /// Create a new App instance
    pub fn new(state: SessionState, vcs: V, entry: T) -> Self {
        Self {
            state,
            vcs,
            entry,
            styles: Styles::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Take the commit error out of a failed run
    pub fn take_error(&mut self) -> Option<GitError> {
        self.state.last_error.take()
    }

    /// Run the application
    ///
    /// Blocks on terminal input until the flow terminates.
    pub fn run(&mut self) -> Result<Outcome> {
        with_terminal(
            enter_terminal,
            || {
                let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
                self.event_loop(&mut terminal)
            },
            restore_terminal,
        )
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Outcome> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if let Phase::Terminated(outcome) = self.state.phase {
                return Ok(outcome);
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key);
                }
                // Resize and everything else just redraws
                _ => {}
            }
        }
    }

    /// Draw the session view with a footer underneath
    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let (vertical, horizontal) = layout::APP_PADDING;
        let block = Block::default().padding(Padding::new(horizontal, horizontal, vertical, vertical));
        let text = ui::render(&self.state, &self.entry, &self.styles);
        frame.render_widget(Paragraph::new(text).block(block), chunks[0]);

        render_footer(frame.buffer_mut(), chunks[1], self.state.phase, &self.styles);
    }

    /// Handle keyboard input. Returns true once the flow has terminated.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.phase.is_terminal() {
            return true;
        }
        let input = Input::from_key(self.state.phase, key);
        self.dispatch(input);
        self.state.phase.is_terminal()
    }

    /// Apply one input to the current phase
    pub fn dispatch(&mut self, input: Input) {
        match (self.state.phase, input) {
            (Phase::Terminated(_), _) => {}
            (_, Input::Quit) => self.set_phase(Phase::Terminated(Outcome::Cancelled)),

            (Phase::SelectingCategory, Input::AdvancePage) => self.advance_page(),
            (Phase::SelectingCategory, Input::Confirm) => self.select_category(),
            (Phase::SelectingCategory, Input::Navigate(key)) => {
                if let Some(movement) = ListMove::from_key(key) {
                    self.move_highlight(movement);
                }
            }

            (Phase::EnteringMessage, Input::AdvancePage) => {}
            (Phase::EnteringMessage, Input::Confirm) => self.submit_message(),
            (Phase::EnteringMessage, Input::Navigate(key)) => {
                self.entry.handle_key(key);
            }

            (Phase::Confirming, Input::Confirm) => self.create_commit(),
            (Phase::Confirming, _) => {}
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = ?self.state.phase, to = ?phase, "phase transition");
        self.state.phase = phase;
    }

    fn advance_page(&mut self) {
        self.state.current_page = pager::advance_page(self.state.current_page, self.state.total_pages());
        self.state.highlight = 0;
    }

    fn move_highlight(&mut self, movement: ListMove) {
        let len = self.state.page_items().len();
        self.state.highlight = match movement {
            ListMove::Up => pager::move_highlight(self.state.highlight, -1, len),
            ListMove::Down => pager::move_highlight(self.state.highlight, 1, len),
            ListMove::First => 0,
            ListMove::Last => pager::last_highlight(len),
        };
    }

    fn select_category(&mut self) {
        // An empty page has nothing to select
        let Some(item) = self.state.highlighted() else {
            return;
        };
        info!(category = item.label, "selected commit type");
        self.state.selected_category = Some(item.label.to_string());
        self.set_phase(Phase::EnteringMessage);
    }

    fn submit_message(&mut self) {
        let subject = self.entry.value().trim();
        if subject.is_empty() {
            return;
        }
        self.state.draft_message = subject.to_string();
        self.set_phase(Phase::Confirming);
    }

    fn create_commit(&mut self) {
        let result = match self.state.selected_category.as_deref() {
            Some(label) => git::commit(&self.vcs, label, &self.state.draft_message),
            None => return,
        };

        match result {
            Ok(()) => self.set_phase(Phase::Terminated(Outcome::Success)),
            Err(err) => {
                warn!(error = %err, "commit failed");
                self.state.last_error = Some(err);
                self.set_phase(Phase::Terminated(Outcome::Failed));
            }
        }
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
        .context("failed to leave alternate screen");
    raw.and(screen)
}

/// Run `body` inside `enter`/`leave`
///
/// `leave` runs whenever `enter` was attempted, so a half-entered raw mode
/// or a failed `body` still hands the terminal back.
fn with_terminal<R>(
    enter: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<R>,
    leave: impl FnOnce() -> Result<()>,
) -> Result<R> {
    let result = enter().and_then(|()| body());
    let restored = leave();
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryItem;
    use crate::git::testing::FakeGit;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(git: &FakeGit) -> App<&FakeGit> {
        App::start(git, 4).unwrap().unwrap()
    }

    fn type_str<V: VersionControl>(app: &mut App<V>, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_start_with_nothing_staged() {
        let git = FakeGit::with_staged(&[]);
        assert!(App::start(&git, 4).unwrap().is_none());
    }

    #[test]
    fn test_start_listing_failure() {
        let git = FakeGit {
            fail_listing: true,
            ..FakeGit::default()
        };
        assert!(App::start(&git, 4).is_err());
    }

    #[test]
    fn test_start_state() {
        let git = FakeGit::with_staged(&["a.txt", "b.txt"]);
        let app = app(&git);
        assert_eq!(app.state().staged_files, vec!["a.txt", "b.txt"]);
        assert_eq!(app.state().phase, Phase::SelectingCategory);
    }

    #[test]
    fn test_quit_while_selecting() {
        let git = FakeGit::with_staged(&["a.txt"]);
        let mut app = app(&git);
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.state().phase, Phase::Terminated(Outcome::Cancelled));
        assert!(git.commits.borrow().is_empty());
    }

    #[test]
    fn test_tab_cycles_pages_and_resets_highlight() {
        let git = FakeGit::with_staged(&["a.txt"]);
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.state().highlight, 1);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().current_page, 1);
        assert_eq!(app.state().highlight, 0);
        assert_eq!(app.state().highlighted().map(|item| item.label), Some("🧹refactor"));

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().current_page, 0);
        assert_eq!(app.state().phase, Phase::SelectingCategory);
    }

    #[test]
    fn test_highlight_stays_on_page() {
        let git = FakeGit::with_staged(&["a.txt"]);
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.state().highlight, 0);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.state().highlight, 3);
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.state().highlight, 3);
        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.state().highlight, 0);
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let git = FakeGit::with_staged(&["a.txt"]);
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().phase, Phase::EnteringMessage);
        assert_eq!(app.state().selected_category.as_deref(), Some("🔨fix"));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().phase, Phase::EnteringMessage);

        type_str(&mut app, "   ");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().phase, Phase::EnteringMessage);
        assert!(app.state().draft_message.is_empty());
    }

    #[test]
    fn test_full_flow_commits_once() {
        let git = FakeGit::with_staged(&["a.txt", "b.txt"]);
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "add login");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().phase, Phase::Confirming);
        assert_eq!(app.state().draft_message, "add login");

        assert!(app.handle_key(key(KeyCode::Enter)));
        assert_eq!(app.state().phase, Phase::Terminated(Outcome::Success));
        assert_eq!(*git.commits.borrow(), vec!["📦feat: add login".to_string()]);

        // Further keys do nothing once terminated
        assert!(app.handle_key(key(KeyCode::Enter)));
        assert_eq!(git.commits.borrow().len(), 1);
    }

    #[test]
    fn test_commit_failure() {
        let git = FakeGit::with_staged(&["a.txt"]).failing_commit();
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "add login");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state().phase, Phase::Terminated(Outcome::Failed));
        assert!(app.state().last_error.is_some());
        assert_eq!(git.commits.borrow().len(), 1);
        assert!(matches!(app.take_error(), Some(GitError::Failed { .. })));
    }

    #[test]
    fn test_q_and_tab_while_typing() {
        let git = FakeGit::with_staged(&["a.txt"]);
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "quiet");
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().phase, Phase::EnteringMessage);
        assert_eq!(app.entry.value(), "quiet");

        assert!(app.handle_key(key(KeyCode::Esc)));
        assert_eq!(app.state().phase, Phase::Terminated(Outcome::Cancelled));
        assert!(git.commits.borrow().is_empty());
    }

    #[test]
    fn test_quit_while_confirming() {
        let git = FakeGit::with_staged(&["a.txt"]);
        let mut app = app(&git);

        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "add login");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().phase, Phase::Confirming);

        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.state().phase, Phase::Terminated(Outcome::Cancelled));
        assert!(git.commits.borrow().is_empty());
    }

    #[test]
    fn test_confirm_on_empty_catalog_is_noop() {
        static EMPTY: [CategoryItem; 0] = [];
        let git = FakeGit::with_staged(&["a.txt"]);
        let state = SessionState::with_catalog(vec!["a.txt".to_string()], &EMPTY, 4);
        let mut app = App::new(state, &git, TextInput::new("", 80, 60));

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().phase, Phase::SelectingCategory);
        assert!(app.state().selected_category.is_none());
    }

    #[test]
    fn test_draw_full_frame() {
        let git = FakeGit::with_staged(&["a.txt", "b.txt"]);
        let app = app(&git);
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect();

        // Padding puts the first line one row down and two columns in
        assert!(rows[1].starts_with("   Staged Files "));
        assert!(rows.iter().any(|r| r.contains("Page 1/2 (Press Tab to switch pages)")));
        assert!(rows[29].starts_with(" ↑/k ↓/j move"));
    }

    #[test]
    fn test_terminal_restored_when_setup_fails() {
        use std::cell::Cell;

        let restored = Cell::new(false);
        let result: Result<Outcome> = with_terminal(
            || Ok(()),
            || Err(anyhow::anyhow!("no terminal")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(restored.get());

        restored.set(false);
        let ran = Cell::new(false);
        let result = with_terminal(
            || Err(anyhow::anyhow!("raw mode unavailable")),
            || {
                ran.set(true);
                Ok(Outcome::Success)
            },
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!ran.get());
        assert!(restored.get());
    }

    #[test]
    fn test_terminal_restore_error_surfaces_after_success() {
        let result = with_terminal(|| Ok(()), || Ok(Outcome::Cancelled), || Err(anyhow::anyhow!("stuck")));
        assert_eq!(result.unwrap_err().to_string(), "stuck");
    }
}
