use edsim_core::{find_hospital, HOSPITALS};
use edsim_render::Renderer;

use crate::command::{Command, HELP};
use crate::error::AppError;
use crate::navigation::{NavRequest, Navigator, Screen};
use crate::session::FormSession;

/// What the terminal loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the current screen.
    Redraw,
    /// Print this text as-is.
    Print(String),
    Quit,
}

/// Navigator plus the live form session, if the form screen is showing.
pub struct AppState {
    nav: Navigator,
    session: Option<FormSession>,
    renderer: Renderer,
}

impl AppState {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            nav: Navigator::default(),
            session: None,
            renderer,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn session(&self) -> Option<&FormSession> {
        self.session.as_ref()
    }

    /// Apply one command. Form commands need a running tokio runtime for
    /// the success banner.
    pub fn handle(&mut self, command: Command) -> Result<Outcome, AppError> {
        match command {
            Command::Start => {
                self.require(Screen::Welcome, "start")?;
                self.nav.start();
            }
            Command::Select(query) => {
                self.require(Screen::Selection, "select")?;
                let hospital = find_hospital(&query)?;
                self.nav.select(hospital);
                self.session = Some(FormSession::new(hospital));
            }
            Command::Set { key, value } => {
                self.session_mut("set")?.set_field(key, value);
            }
            Command::Submit => {
                let session = self.session_mut("submit")?;
                if let Err(report) = session.submit() {
                    tracing::info!(errors = report.len(), "form has errors");
                }
            }
            Command::NewEntry => {
                self.session_mut("new")?.new_entry();
            }
            Command::Back => match self.nav.screen() {
                Screen::Welcome => return Err(self.invalid("back")),
                Screen::Selection => self.nav.back(),
                Screen::Form => self.close_session(FormSession::back),
            },
            Command::Reset => {
                self.require(Screen::Form, "reset")?;
                self.close_session(FormSession::reset);
            }
            Command::Show => {}
            Command::Json => {
                let session = self.session.as_ref().ok_or_else(|| self.invalid("json"))?;
                let snapshot = session.form().snapshot().ok_or(AppError::NothingSubmitted)?;
                return Ok(Outcome::Print(snapshot.to_json()?));
            }
            Command::Help => return Ok(Outcome::Print(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Redraw)
    }

    /// Text for the current screen.
    pub fn render(&self) -> Result<String, AppError> {
        let text = match (self.nav.screen(), &self.session) {
            (Screen::Welcome, _) => self.renderer.welcome()?,
            (Screen::Selection, _) => self.renderer.selection(&HOSPITALS)?,
            (Screen::Form, Some(session)) => self.renderer.form(&session.screen())?,
            (Screen::Form, None) => self.renderer.selection(&HOSPITALS)?,
        };
        Ok(text)
    }

    /// Tear down the form session and route its navigation request.
    fn close_session(&mut self, request: impl FnOnce(&FormSession) -> NavRequest) {
        if let Some(session) = self.session.take() {
            self.nav.apply(request(&session));
        }
    }

    fn session_mut(&mut self, action: &'static str) -> Result<&mut FormSession, AppError> {
        let screen = self.nav.screen();
        self.session
            .as_mut()
            .filter(|_| screen == Screen::Form)
            .ok_or(AppError::InvalidAction { action, screen })
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<(), AppError> {
        if self.nav.screen() == screen {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidAction {
            action,
            screen: self.nav.screen(),
        }
    }
}
