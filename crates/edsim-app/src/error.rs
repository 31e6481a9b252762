use thiserror::Error;

use crate::navigation::Screen;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("`{action}` is not available on the {screen} screen")]
    InvalidAction { action: &'static str, screen: Screen },

    #[error("no submission to show yet")]
    NothingSubmitted,

    #[error(transparent)]
    Core(#[from] edsim_core::CoreError),

    #[error(transparent)]
    Render(#[from] edsim_render::RenderError),
}
