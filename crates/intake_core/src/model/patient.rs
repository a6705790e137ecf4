//! Patient domain model.
//!
//! # Responsibility
//! - Define the canonical patient record exchanged with UI and storage.
//! - Define the raw five-field form input used at submission time.
//!
//! # Invariants
//! - `id` stays `None` until an external store assigns one.
//! - Text fields are stored verbatim; no trimming or case folding.
//! - A record that passed `Patient::validate()` has a name of letters and
//!   whitespace only, and CPF/phone/birth date in their fixed shapes.

use crate::form::{DateStyle, PatientForm};
use crate::validation::{validate_all, FieldDiagnostic};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned patient identifier.
pub type PatientId = i64;

/// One form target on the registration screen.
///
/// `Id` is display-only; the other five are user-editable and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Id,
    Name,
    Cpf,
    Email,
    Phone,
    BirthDate,
}

impl FormField {
    /// Every form target in screen order.
    pub const ALL: [FormField; 6] = [
        FormField::Id,
        FormField::Name,
        FormField::Cpf,
        FormField::Email,
        FormField::Phone,
        FormField::BirthDate,
    ];

    /// Stable snake_case key used in logs and CLI output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BirthDate => "birth_date",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw text of the five editable form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInput {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    /// Expected shape `dd/mm/yyyy`.
    pub birth_date: String,
}

impl PatientInput {
    /// Creates an input from the five form values.
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            email: email.into(),
            phone: phone.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// Canonical patient record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Assigned by storage; `None` for records not yet saved.
    pub id: Option<PatientId>,
    pub name: String,
    /// Brazilian taxpayer number, `###.###.###-##`.
    pub cpf: String,
    pub email: String,
    /// `(##)#####-####`.
    pub phone: String,
    /// Serialized as ISO `YYYY-MM-DD`. `None` when the typed date did not parse.
    pub birth_date: Option<NaiveDate>,
}

impl Patient {
    /// Returns a copy of this record carrying a storage-assigned identifier.
    pub fn with_id(mut self, id: PatientId) -> Self {
        self.id = Some(id);
        self
    }

    /// Re-runs form validation over this record's own values.
    ///
    /// The birth date is rendered with the form pattern first, so an unset
    /// date reports as a missing field.
    pub fn validate(&self) -> Result<(), FieldDiagnostic> {
        let form = PatientForm::from_patient(self, DateStyle::Form);
        validate_all(&form.to_input())
    }
}
