//! Flutter-facing bindings for patient intake.

pub mod api;
