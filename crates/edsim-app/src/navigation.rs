use std::fmt;

use edsim_core::Hospital;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Selection,
    Form,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Welcome => "welcome",
            Screen::Selection => "hospital selection",
            Screen::Form => "data entry",
        })
    }
}

/// Requests a form session hands back instead of touching navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Back,
    Reset,
}

/// Which screen is showing and which hospital, if any, is selected.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    screen: Screen,
    selected: Option<&'static Hospital>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            screen: Screen::Welcome,
            selected: None,
        }
    }
}

impl Navigator {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> Option<&'static Hospital> {
        self.selected
    }

    pub fn start(&mut self) {
        self.go(Screen::Selection);
    }

    pub fn select(&mut self, hospital: &'static Hospital) {
        self.selected = Some(hospital);
        tracing::info!(hospital = hospital.name, "hospital selected");
        self.go(Screen::Form);
    }

    /// One step back. The selection survives a step back from the form.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Form => self.go(Screen::Selection),
            Screen::Selection => self.go(Screen::Welcome),
            Screen::Welcome => {}
        }
    }

    /// Forget the selection and return to the welcome screen.
    pub fn reset(&mut self) {
        self.selected = None;
        self.go(Screen::Welcome);
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Back => self.back(),
            NavRequest::Reset => self.reset(),
        }
    }

    fn go(&mut self, screen: Screen) {
        tracing::debug!(from = %self.screen, to = %screen, "screen change");
        self.screen = screen;
    }
}
