// Public fallible APIs in this crate share one concrete error contract (`AutocompleteError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod store;
pub mod term;

pub use config::{BuildOptions, HeaderCheck, ParsePolicy, StoreConfig};
pub use error::{AutocompleteError, Result};
pub use models::{BuildReport, BuildWarning, Suggestion};
pub use store::TermStore;
pub use term::{LineDefect, Term};
