//! edsim-metrics
//!
//! Form validation, derived presentation metrics, and the form state
//! machine. Pure and synchronous; nothing here touches a terminal or a
//! runtime.

pub mod derived;
pub mod form;
pub mod validate;

pub use derived::{bar_width, occupancy_severity, parse_or_zero, DerivedMetrics, Severity, Tone};
pub use form::{FormState, Phase};
pub use validate::{validate_field, validate_form, FieldError, FieldValue, ValidationReport};
