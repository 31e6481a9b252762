//! edsim-core
//!
//! Pure domain types for the emergency department data simulator: the seven
//! form fields and their declarative specs, the static hospital catalog, and
//! the value containers that flow between the form and the results view.
//! No validation logic lives here; see `edsim-metrics`.

pub mod error;
pub mod field;
pub mod hospital;
pub mod models;
pub mod weather;

pub use error::CoreError;
pub use field::{FieldKey, FieldSpec, ValueKind, FIELD_SPECS};
pub use hospital::{find_hospital, Accent, Hospital, HOSPITALS};
pub use models::form::FormValues;
pub use models::snapshot::SubmissionSnapshot;
pub use weather::WeatherCondition;
