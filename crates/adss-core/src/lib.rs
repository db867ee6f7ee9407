//! adss-core
//!
//! Pure domain types for Alzheimer's diagnostic triage: the patient fact
//! record, the fixed label vocabulary, the classification result and the
//! JSON wire shapes exchanged with the front-end. No rule logic lives here.

pub mod error;
pub mod models;
