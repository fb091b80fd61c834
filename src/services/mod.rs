//! Business logic for the case tutor service.
//!
//! Currently a single concern: the Mistral client and its structured-output
//! contract.

pub mod mistral;

pub use mistral::{exercise_schema, MistralClient, SYSTEM_PROMPT};
