//! Edit-time form population.

use crate::form::builder::BIRTH_DATE_FORMAT;
use crate::model::patient::{FormField, Patient, PatientInput};
use chrono::NaiveDate;
use std::str::FromStr;

/// How a birth date is rendered into its form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `dd/mm/yyyy`, the same pattern submission parses.
    #[default]
    Form,
    /// `dd/mm/yy HH:mm`, the legacy short locale rendering.
    ///
    /// Output does not parse back through `build_from_input`.
    LocaleShort,
}

impl DateStyle {
    /// Renders a date in this style.
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Form => date.format(BIRTH_DATE_FORMAT).to_string(),
            // Birth dates carry no time of day; the short style shows midnight.
            Self::LocaleShort => format!("{} 00:00", date.format("%d/%m/%y")),
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "form" => Ok(Self::Form),
            "locale-short" | "locale_short" => Ok(Self::LocaleShort),
            other => Err(format!(
                "unsupported date style `{other}`; expected form|locale-short"
            )),
        }
    }
}

/// Write target for one form field.
///
/// Implemented by whatever holds the on-screen values.
pub trait FieldSink {
    fn set_field(&mut self, field: FormField, value: String);
}

/// Plain text values of the six form targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
}

impl PatientForm {
    /// Renders a patient into form text.
    pub fn from_patient(patient: &Patient, style: DateStyle) -> Self {
        let mut form = Self::default();
        populate_fields_with_style(patient, &mut form, style);
        form
    }

    /// Returns the text currently held for `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Cpf => &self.cpf,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::BirthDate => &self.birth_date,
        }
    }

    /// Projects the five editable fields into a submission input.
    pub fn to_input(&self) -> PatientInput {
        PatientInput {
            name: self.name.clone(),
            cpf: self.cpf.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
        }
    }
}

impl FieldSink for PatientForm {
    fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Cpf => &mut self.cpf,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::BirthDate => &mut self.birth_date,
        };
        *slot = value;
    }
}

/// Writes every patient attribute into `sink` using `DateStyle::Form`.
pub fn populate_fields(patient: &Patient, sink: &mut impl FieldSink) {
    populate_fields_with_style(patient, sink, DateStyle::Form);
}

/// Writes every patient attribute into `sink`.
///
/// All six targets are written, so stale values never survive. An unset id
/// or birth date becomes empty text. No validation is performed.
pub fn populate_fields_with_style(patient: &Patient, sink: &mut impl FieldSink, style: DateStyle) {
    let id = patient.id.map(|id| id.to_string()).unwrap_or_default();
    let birth_date = patient
        .birth_date
        .map(|date| style.format(date))
        .unwrap_or_default();

    sink.set_field(FormField::Id, id);
    sink.set_field(FormField::Name, patient.name.clone());
    sink.set_field(FormField::Cpf, patient.cpf.clone());
    sink.set_field(FormField::Email, patient.email.clone());
    sink.set_field(FormField::Phone, patient.phone.clone());
    sink.set_field(FormField::BirthDate, birth_date);
}
