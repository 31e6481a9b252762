//! edsim-app library root.
//!
//! Navigation, the form session and its success banner, settings, and the
//! command dispatcher, exposed so integration tests can drive a whole
//! session without a terminal.

pub mod command;
pub mod config;
pub mod error;
pub mod navigation;
pub mod session;
pub mod state;
