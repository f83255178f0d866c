//! Specification validation.
//!
//! Generated code binds every entry to a preprocessor symbol and an
//! enumerated code, both built from the uppercase nick. These checks catch
//! collisions and illegal characters before any output is produced.

use crate::error::SchemaError;
use crate::types::ErrorSpec;
use std::collections::HashMap;

/// Validates a parsed specification.
///
/// # Arguments
/// * `spec` - The specification to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if two entries derive the same symbol or an entry
/// derives a symbol that is not a valid identifier.
pub fn validate_spec(spec: &ErrorSpec) -> Result<(), SchemaError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (_, entry) in spec.entries() {
        let symbol = entry.uc_nick();

        if !is_identifier_fragment(&symbol) {
            return Err(SchemaError::InvalidIdentifier {
                name: entry.name.clone(),
                symbol,
            });
        }

        if let Some(first) = seen.get(&symbol) {
            return Err(SchemaError::DuplicateSymbol {
                symbol,
                first: (*first).to_string(),
                second: entry.name.clone(),
            });
        }
        seen.insert(symbol, &entry.name);
    }

    Ok(())
}

/// Checks that a symbol can be appended to an identifier prefix.
///
/// Symbols made only of separators (from names that are all spaces and
/// dots) are rejected.
fn is_identifier_fragment(symbol: &str) -> bool {
    symbol.chars().any(|c| c.is_ascii_alphanumeric())
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
