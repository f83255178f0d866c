//! # errgen Schema
//!
//! D-Bus error specification parser and document model.
//!
//! This crate provides:
//! - Namespace-aware parsing of `tp:errors` specification documents
//! - The document model (namespace groups and error entries)
//! - Derivation of nicks and D-Bus error names from human-readable names
//! - Validation of derived symbol uniqueness

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{NS_TP, parse_spec, parse_spec_with_namespace};
pub use types::{ErrorEntry, ErrorSpec, NamespaceGroup};
pub use validation::validate_spec;
