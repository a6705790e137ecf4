//! Mapping between registration form text and patient records.
//!
//! # Responsibility
//! - Build a `Patient` from raw form input at submission time.
//! - Write a `Patient` back into form targets for editing.
//!
//! # Invariants
//! - Text fields are copied verbatim in both directions.
//! - A birth date that fails to parse is logged and left unset; building
//!   never fails as a whole.
//! - With `DateStyle::Form`, populate then build yields the same calendar date.

pub mod builder;
pub mod populate;

pub use builder::{build_from_input, parse_birth_date, BirthDateParseError, BIRTH_DATE_FORMAT};
pub use populate::{populate_fields, populate_fields_with_style, DateStyle, FieldSink, PatientForm};
