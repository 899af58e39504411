use std::io::{self, BufRead, Write};
use std::time::Duration;

use catalog_core::{update, AppState, AppViewModel, FetchOutcome, Msg, SearchField};
use catalog_engine::EngineHandle;
use catalog_logging::{catalog_error, clear_request_id, set_request_id};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;
use super::ui::commands::{parse_line, ShellCommand, HELP};

/// Extra time granted to the engine on top of the HTTP timeouts.
const RESPONSE_SLACK: Duration = Duration::from_secs(5);

/// A single non-interactive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub field: SearchField,
    pub page: u32,
    pub isbn_filter: Option<String>,
}

/// Owns the session state and drives it from user input and engine events.
pub struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    response_timeout: Duration,
    /// Draw every intermediate view (shell) or only on demand (one-shot search).
    live: bool,
}

impl<W: Write> App<W> {
    pub fn new(config: &AppConfig, viewport_rows: u32, engine: EngineHandle, out: W) -> Self {
        let fetch = config.fetch_settings();
        Self {
            state: AppState::with_settings(config.session_settings(), viewport_rows),
            runner: EffectRunner::new(engine),
            out,
            response_timeout: fetch.connect_timeout + fetch.request_timeout + RESPONSE_SLACK,
            live: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        match state.in_flight() {
            Some(request_id) => set_request_id(request_id),
            None => clear_request_id(),
        }
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty && self.live {
            self.draw()?;
        }
        Ok(())
    }

    /// Blocks until no fetch is in flight. New input is only read afterwards,
    /// so at most one request is ever pending.
    fn settle(&mut self) -> io::Result<()> {
        while let Some(request_id) = self.state.in_flight() {
            let msg = match self.runner.next_msg(self.response_timeout) {
                Some(msg) => msg,
                None => {
                    catalog_error!("No response for search {} from engine", request_id);
                    Msg::SearchCompleted {
                        request_id,
                        outcome: FetchOutcome::TransportError {
                            message: "engine did not respond".to_string(),
                        },
                    }
                }
            };
            self.dispatch(msg)?;
        }
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        for line in ui::render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    pub fn run_once(&mut self, request: SearchRequest) -> io::Result<()> {
        self.live = false;
        self.dispatch(Msg::Submit {
            query: request.query,
            field: request.field,
        })?;
        self.settle()?;

        if request.page > 1 && self.state.store().last().is_some() {
            self.dispatch(Msg::GoToPage(request.page))?;
            self.settle()?;
        }
        if let Some(fragment) = request.isbn_filter {
            self.dispatch(Msg::FilterLocal(fragment))?;
            self.settle()?;
        }
        self.draw()
    }

    pub fn run_shell<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.live = true;
        writeln!(self.out, "{HELP}")?;
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            match parse_line(&line, &self.state.view()) {
                None => {}
                Some(ShellCommand::Quit) => break,
                Some(ShellCommand::Help) => writeln!(self.out, "{HELP}")?,
                Some(ShellCommand::Unavailable(reason)) => writeln!(self.out, "({reason})")?,
                Some(ShellCommand::Unknown(text)) => {
                    writeln!(self.out, "unrecognised command: {text}")?
                }
                Some(ShellCommand::Intent(msg)) => {
                    self.dispatch(msg)?;
                    self.settle()?;
                }
            }
            self.prompt()?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}
