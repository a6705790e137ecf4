//! Registration form validation.
//!
//! # Responsibility
//! - Detect the first blank required field.
//! - Detect the first field whose text breaks its fixed format.
//! - Combine both checks into one submission verdict.
//!
//! # Invariants
//! - At most one diagnostic per call (first match wins).
//! - Blank check order: name, CPF, email, phone, birth date.
//! - Format report order: name, CPF, birth date, email, phone.
//! - Format checks are skipped when any field is blank.
//! - A field is blank only when its text is empty; whitespace counts as text.

pub mod diagnostic;
pub mod rules;

pub use diagnostic::FieldDiagnostic;

use crate::model::patient::PatientInput;
use log::debug;

/// Returns the diagnostic for the first empty field, in form order.
pub fn first_empty_field(input: &PatientInput) -> Option<FieldDiagnostic> {
    let required = [
        (&input.name, FieldDiagnostic::MissingName),
        (&input.cpf, FieldDiagnostic::MissingCpf),
        (&input.email, FieldDiagnostic::MissingEmail),
        (&input.phone, FieldDiagnostic::MissingPhone),
        (&input.birth_date, FieldDiagnostic::MissingBirthDate),
    ];

    required
        .into_iter()
        .find(|(value, _)| value.is_empty())
        .map(|(_, diagnostic)| diagnostic)
}

/// Returns the diagnostic for the first malformed field.
///
/// All five rules are evaluated; the report follows name, CPF, birth date,
/// email, phone regardless of which other fields also fail.
pub fn first_invalid_format(input: &PatientInput) -> Option<FieldDiagnostic> {
    let checks = [
        (rules::is_valid_name(&input.name), FieldDiagnostic::InvalidName),
        (rules::is_valid_cpf(&input.cpf), FieldDiagnostic::InvalidCpf),
        (
            rules::is_valid_birth_date(&input.birth_date),
            FieldDiagnostic::InvalidBirthDate,
        ),
        (rules::is_valid_email(&input.email), FieldDiagnostic::InvalidEmail),
        (rules::is_valid_phone(&input.phone), FieldDiagnostic::InvalidPhone),
    ];

    checks
        .into_iter()
        .find(|(valid, _)| !valid)
        .map(|(_, diagnostic)| diagnostic)
}

/// Returns `true` when any required field is empty.
pub fn is_empty(input: &PatientInput) -> bool {
    first_empty_field(input).is_some()
}

/// Returns `true` when any field breaks its format rule.
pub fn has_invalid_format(input: &PatientInput) -> bool {
    first_invalid_format(input).is_some()
}

/// Validates a submission: blank check first, then formats.
///
/// # Errors
/// - Returns the first blank-field diagnostic when any field is empty.
/// - Otherwise returns the first format diagnostic by report order.
pub fn validate_all(input: &PatientInput) -> Result<(), FieldDiagnostic> {
    let verdict = match first_empty_field(input) {
        Some(diagnostic) => Err(diagnostic),
        None => first_invalid_format(input).map_or(Ok(()), Err),
    };

    match verdict {
        Ok(()) => debug!("event=form_validate module=validation status=ok"),
        Err(diagnostic) => debug!(
            "event=form_validate module=validation status=rejected {}",
            diagnostic::log_summary(diagnostic)
        ),
    }
    verdict
}

/// Returns `true` when `validate_all` accepts the input.
pub fn is_valid(input: &PatientInput) -> bool {
    validate_all(input).is_ok()
}
