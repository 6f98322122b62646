//! Settings schema for the AI provider layer.
//!
//! Defines the shapes exchanged between the settings dialog, persistence,
//! and the model-discovery core: per-provider credentials and tuning, plus
//! the global proxy toggle. Reading and writing the settings file is the
//! host application's job; this crate never touches disk.

pub mod schema;
pub mod validate;

pub use {
    schema::{AiSettings, ProviderSettings, ProxySettings},
    validate::{Diagnostic, Severity, ValidationResult, validate},
};
