//! `rolodex` - a local customer registry
//!
//! This library holds the core of a small, single-user customer registry:
//! field validation with a national-ID checksum, canonical display
//! formatting for phone and ID numbers, filtered substring search, and a
//! JSON-file-backed store that rewrites the full collection on every
//! mutation. The `rolo` binary is the presentation layer on top.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod customer;
pub mod error;
pub mod format;
pub mod highlight;
pub mod logging;
pub mod registry;
pub mod search;
pub mod store;
pub mod validate;

pub use config::Config;
pub use customer::{Customer, CustomerDraft};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use registry::Registry;
pub use search::SearchScope;
pub use store::JsonStore;
pub use validate::{validate_customer, Field, ValidationReport};
