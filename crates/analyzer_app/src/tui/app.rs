use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use analyzer_core::{update, AppState, Msg};
use analyzer_logging::analyzer_warn;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::AppConfig;
use crate::effects::{timestamp, EffectRunner};

use super::render;

/// File types the backend's agents accept, mirroring the upload filter.
const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "jpg", "jpeg", "png"];

const ATTACH_COMMAND: &str = "/attach";

pub fn run_app(config: AppConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run_loop(&mut terminal, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> io::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut session = Session {
        state: AppState::new(),
        effects: EffectRunner::new(config, msg_tx),
        notice: None,
        needs_render: true,
    };

    loop {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if session.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => session.needs_render = true,
                _ => {}
            }
        } else {
            session.dispatch(Msg::Tick);
        }

        // Gateway completions arrive here, on the same loop that handles
        // keys, so appends happen in event-completion order.
        while let Ok(msg) = msg_rx.try_recv() {
            session.dispatch(msg);
        }

        if session.needs_render {
            let view = session.state.view();
            terminal.draw(|frame| {
                render::render(frame, &view, session.notice.as_deref(), &config.base_url)
            })?;
            session.needs_render = false;
        }
    }
}

struct Session {
    state: AppState,
    effects: EffectRunner,
    /// App-local input feedback (bad attach path etc.); never part of the
    /// conversation log.
    notice: Option<String>,
    needs_render: bool,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.effects.enqueue(effects);
    }

    /// Returns true when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Enter => self.submit_line(),
            KeyCode::Backspace => {
                let mut text = self.state.draft().pending_text.clone();
                text.pop();
                self.dispatch(Msg::InputChanged(text));
            }
            KeyCode::Char(c) => {
                let mut text = self.state.draft().pending_text.clone();
                text.push(c);
                self.dispatch(Msg::InputChanged(text));
            }
            _ => {}
        }
        false
    }

    fn submit_line(&mut self) {
        self.clear_notice();
        let line = self.state.draft().pending_text.trim().to_string();
        if let Some(rest) = line.strip_prefix(ATTACH_COMMAND) {
            if rest.is_empty() {
                self.set_notice("Usage: /attach <path>");
                return;
            }
            if rest.starts_with(char::is_whitespace) {
                self.attach(rest.trim());
                return;
            }
            // Not the attach command (e.g. "/attachments"); send as text.
        }
        self.dispatch(Msg::SendRequested { at: timestamp() });
    }

    fn attach(&mut self, raw_path: &str) {
        let path = Path::new(raw_path);
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            self.set_notice("That path has no file name");
            return;
        };

        let extension = path.extension().map(|e| e.to_string_lossy().to_lowercase());
        let accepted = extension
            .as_deref()
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext));
        if !accepted {
            self.set_notice("Unsupported file type (accepted: csv, xlsx, jpg, jpeg, png)");
            return;
        }

        if !path.is_file() {
            analyzer_warn!("attach failed, not a file: {}", raw_path);
            self.set_notice("File not found");
            return;
        }

        self.dispatch(Msg::FileChosen {
            path: raw_path.to_string(),
            name,
        });
    }

    fn set_notice(&mut self, text: &str) {
        self.notice = Some(text.to_string());
        self.needs_render = true;
    }

    fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.needs_render = true;
        }
    }
}
