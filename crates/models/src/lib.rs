//! Model discovery for OpenAI-compatible providers.
//!
//! Given a credential and a base URL, this crate answers one question for
//! the settings dialog: which models can the user pick? It asks the
//! endpoint's `/v1/models` listing, remembers the answer for a few minutes,
//! and falls back to a static per-provider catalog when the endpoint cannot
//! be reached. Results always carry their provenance so the UI can tell a
//! live listing apart from a stale default.

pub mod cache;
pub mod catalog;
pub mod error;
pub mod family;
pub mod fetch;
pub mod resolver;

pub use {
    cache::ModelCache,
    catalog::{KnownProvider, default_models, known_providers, recommended_models},
    error::{FetchError, Result},
    family::ServiceFamily,
    fetch::ModelFetcher,
    resolver::{ConnectionTestReport, ModelResolver, ModelSource, Resolution},
};
