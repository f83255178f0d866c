//! Generator configuration.

use crate::error::CodegenError;
use errgen_schema::NS_TP;

/// Naming and layout configuration for generated C code.
///
/// Defaults reproduce the telepathy-glib error tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Prefix of the string constants (`TP_ERROR_STR_`).
    pub constant_prefix: String,
    /// Prefix of the enumerated codes (`TP_ERROR_`).
    pub code_prefix: String,
    /// C type of the enumerated code (`TpError`).
    pub code_type: String,
    /// Name of the lookup function.
    pub function_name: String,
    /// Header included at the top of the source file.
    pub include: String,
    /// XML namespace URI of the specification extension elements.
    pub namespace_uri: String,
}

impl GeneratorConfig {
    /// Creates a configuration with the telepathy-glib defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constant_prefix: "TP_ERROR_STR_".to_string(),
            code_prefix: "TP_ERROR_".to_string(),
            code_type: "TpError".to_string(),
            function_name: "tp_error_get_dbus_name".to_string(),
            include: "telepathy-glib/errors.h".to_string(),
            namespace_uri: NS_TP.to_string(),
        }
    }

    /// Sets the string constant prefix.
    #[must_use]
    pub fn constant_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.constant_prefix = prefix.into();
        self
    }

    /// Sets the enumerated code prefix.
    #[must_use]
    pub fn code_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.code_prefix = prefix.into();
        self
    }

    /// Sets the enumerated code type.
    #[must_use]
    pub fn code_type(mut self, code_type: impl Into<String>) -> Self {
        self.code_type = code_type.into();
        self
    }

    /// Sets the lookup function name.
    #[must_use]
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Sets the header included by the source file.
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = include.into();
        self
    }

    /// Sets the extension namespace URI.
    #[must_use]
    pub fn namespace_uri(mut self, uri: impl Into<String>) -> Self {
        self.namespace_uri = uri.into();
        self
    }

    /// Checks that every identifier-bearing setting can produce legal C.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` naming the first offending setting.
    pub fn validate(&self) -> Result<(), CodegenError> {
        for (setting, value) in [
            ("constant prefix", &self.constant_prefix),
            ("code prefix", &self.code_prefix),
            ("code type", &self.code_type),
            ("function name", &self.function_name),
        ] {
            if !is_c_identifier(value) {
                return Err(CodegenError::config(format!(
                    "{} '{}' is not a valid C identifier",
                    setting, value
                )));
            }
        }
        if self.include.is_empty() {
            return Err(CodegenError::config("include must not be empty"));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn is_c_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.constant_prefix, "TP_ERROR_STR_");
        assert_eq!(config.code_prefix, "TP_ERROR_");
        assert_eq!(config.code_type, "TpError");
        assert_eq!(config.function_name, "tp_error_get_dbus_name");
        assert_eq!(config.include, "telepathy-glib/errors.h");
        assert_eq!(config.namespace_uri, NS_TP);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .constant_prefix("EX_ERROR_STR_")
            .code_prefix("EX_ERROR_")
            .code_type("ExError")
            .function_name("ex_error_get_dbus_name")
            .include("example/errors.h")
            .namespace_uri("urn:example");

        assert_eq!(config.constant_prefix, "EX_ERROR_STR_");
        assert_eq!(config.code_prefix, "EX_ERROR_");
        assert_eq!(config.code_type, "ExError");
        assert_eq!(config.function_name, "ex_error_get_dbus_name");
        assert_eq!(config.include, "example/errors.h");
        assert_eq!(config.namespace_uri, "urn:example");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_function_name() {
        let config = GeneratorConfig::new().function_name("get-name");
        assert!(matches!(
            config.validate(),
            Err(CodegenError::Config { .. })
        ));
    }

    #[test]
    fn test_prefix_cannot_start_with_digit() {
        let config = GeneratorConfig::new().constant_prefix("1_");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_include() {
        let config = GeneratorConfig::new().include("");
        assert!(config.validate().is_err());
    }
}
