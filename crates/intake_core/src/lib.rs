//! Core domain logic for patient intake.
//! This crate is the single source of truth for registration form rules.

pub mod form;
pub mod logging;
pub mod model;
pub mod validation;

pub use form::{
    build_from_input, parse_birth_date, populate_fields, populate_fields_with_style,
    BirthDateParseError, DateStyle, FieldSink, PatientForm,
};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::patient::{FormField, Patient, PatientId, PatientInput};
pub use validation::{
    first_empty_field, first_invalid_format, has_invalid_format, is_empty, is_valid,
    validate_all, FieldDiagnostic,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
