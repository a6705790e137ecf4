//! Patient registration domain model.
//!
//! # Responsibility
//! - Define the patient record and the raw form input it is built from.
//! - Name the form fields shared by validation and record mapping.
//!
//! # Invariants
//! - `Patient` holds parsed values; `PatientInput` holds text exactly as typed.
//! - Identifiers are assigned by storage, never by core.

pub mod patient;
