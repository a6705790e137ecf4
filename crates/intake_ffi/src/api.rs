//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose registration-screen use cases to Dart via FRB.
//! - Hand diagnostics back as plain text the UI shows verbatim.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.
//! - Birth dates cross the boundary as ISO `YYYY-MM-DD` inside records and
//!   as `dd/mm/yyyy` inside form fields.

use chrono::NaiveDate;
use intake_core::{
    build_from_input, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, validate_all, DateStyle, Patient, PatientForm, PatientInput,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Patient record as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    /// Storage-assigned identifier; `None` for unsaved records.
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    /// ISO `YYYY-MM-DD`; `None` when the typed date did not parse.
    pub birth_date: Option<String>,
}

impl From<Patient> for PatientRecord {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            cpf: patient.cpf,
            email: patient.email,
            phone: patient.phone,
            birth_date: patient.birth_date.map(|date| date.to_string()),
        }
    }
}

/// Form text for every target on the registration screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormFields {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    /// `dd/mm/yyyy`, ready to resubmit.
    pub birth_date: String,
}

impl From<PatientForm> for EditFormFields {
    fn from(form: PatientForm) -> Self {
        Self {
            id: form.id,
            name: form.name,
            cpf: form.cpf,
            email: form.email,
            phone: form.phone,
            birth_date: form.birth_date,
        }
    }
}

/// Validation verdict envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheckResponse {
    /// Whether all fields passed.
    pub ok: bool,
    /// Failing field key (`name|cpf|email|phone|birth_date`).
    pub field: Option<String>,
    /// Diagnostic to show the user; empty when `ok`.
    pub message: String,
}

/// Record-building envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientResponse {
    /// Whether a record was produced.
    pub ok: bool,
    pub patient: Option<PatientRecord>,
    /// Diagnostic on failure, status text on success.
    pub message: String,
}

/// Edit-preparation envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormResponse {
    /// Whether the record could be rendered.
    pub ok: bool,
    pub fields: Option<EditFormFields>,
    /// Whether the stored record still passes form validation.
    pub valid: bool,
    /// Validation diagnostic when `!valid`, else a status or error message.
    pub message: String,
}

/// Validates the five registration fields.
///
/// # FFI contract
/// - Sync call, pure in-memory work.
/// - Never panics.
/// - At most one diagnostic is returned: blank fields first, then formats.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_patient_fields(
    name: String,
    cpf: String,
    email: String,
    phone: String,
    birth_date: String,
) -> FieldCheckResponse {
    let input = PatientInput::new(name, cpf, email, phone, birth_date);
    match validate_all(&input) {
        Ok(()) => FieldCheckResponse {
            ok: true,
            field: None,
            message: String::new(),
        },
        Err(diagnostic) => FieldCheckResponse {
            ok: false,
            field: Some(diagnostic.field().key().to_string()),
            message: diagnostic.message().to_string(),
        },
    }
}

/// Validates the registration fields and builds an unsaved patient record.
///
/// # FFI contract
/// - Sync call, pure in-memory work.
/// - Never panics.
/// - A shape-valid but calendar-invalid date rolls forward (`31/02/2024`
///   becomes `2024-03-02`), so an accepted submission always carries a
///   birth date.
#[flutter_rust_bridge::frb(sync)]
pub fn build_patient(
    name: String,
    cpf: String,
    email: String,
    phone: String,
    birth_date: String,
) -> PatientResponse {
    let input = PatientInput::new(name, cpf, email, phone, birth_date);
    if let Err(diagnostic) = validate_all(&input) {
        return PatientResponse {
            ok: false,
            patient: None,
            message: diagnostic.message().to_string(),
        };
    }

    PatientResponse {
        ok: true,
        patient: Some(build_from_input(&input).into()),
        message: "Patient ready.".to_string(),
    }
}

/// Renders an existing record into form fields for editing.
///
/// # FFI contract
/// - Sync call, pure in-memory work.
/// - Never panics.
/// - Rejects a `birth_date` that is not ISO `YYYY-MM-DD`.
/// - A record that no longer validates is still rendered, with `valid = false`
///   and the diagnostic in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn prepare_edit(record: PatientRecord) -> EditFormResponse {
    let patient = match to_patient(record) {
        Ok(patient) => patient,
        Err(message) => {
            warn!("event=prepare_edit module=ffi status=error reason=birth_date_not_iso");
            return EditFormResponse {
                ok: false,
                fields: None,
                valid: false,
                message,
            };
        }
    };

    let form = PatientForm::from_patient(&patient, DateStyle::Form);
    let (valid, message) = match patient.validate() {
        Ok(()) => (true, "Form ready.".to_string()),
        Err(diagnostic) => (false, diagnostic.message().to_string()),
    };
    EditFormResponse {
        ok: true,
        fields: Some(form.into()),
        valid,
        message,
    }
}

fn to_patient(record: PatientRecord) -> Result<Patient, String> {
    let birth_date = record
        .birth_date
        .as_deref()
        .map(str::parse::<NaiveDate>)
        .transpose()
        .map_err(|err| format!("prepare_edit failed: birth_date is not an ISO date: {err}"))?;

    Ok(Patient {
        id: record.id,
        name: record.name,
        cpf: record.cpf,
        email: record.email,
        phone: record.phone,
        birth_date,
    })
}
