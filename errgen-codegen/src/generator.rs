//! Constant table generator.
//!
//! Walks every error entry once, in document order, and feeds the header,
//! source and documentation emitters in parallel.

use crate::c::{DocsEmitter, HeaderEmitter, SourceEmitter};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use errgen_schema::{ErrorEntry, ErrorSpec, NamespaceGroup, validate_spec};
use tracing::{debug, trace};

/// An error entry with every generated name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedError {
    /// String constant name, e.g. `TP_ERROR_STR_NOT_AVAILABLE`.
    pub constant_name: String,
    /// Enumerated code name, e.g. `TP_ERROR_NOT_AVAILABLE`.
    pub code_name: String,
    /// Fully qualified D-Bus error name.
    pub dbus_name: String,
    /// Unescaped documentation text.
    pub description: String,
}

impl ResolvedError {
    /// Resolves the generated names of an entry.
    #[must_use]
    pub fn resolve(group: &NamespaceGroup, entry: &ErrorEntry, config: &GeneratorConfig) -> Self {
        let uc_nick = entry.uc_nick();
        Self {
            constant_name: format!("{}{}", config.constant_prefix, uc_nick),
            code_name: format!("{}{}", config.code_prefix, uc_nick),
            dbus_name: group.dbus_name(entry),
            description: entry.description_text().to_string(),
        }
    }
}

/// The three generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// `#define` constants.
    pub header: String,
    /// Lookup function.
    pub source: String,
    /// gtk-doc comment blocks.
    pub docs: String,
}

/// Generator for the error-name constant table.
pub struct ConstantTableGenerator<'a> {
    spec: &'a ErrorSpec,
    config: &'a GeneratorConfig,
}

impl<'a> ConstantTableGenerator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(spec: &'a ErrorSpec, config: &'a GeneratorConfig) -> Self {
        Self { spec, config }
    }

    /// Generates the header, source and documentation text.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration is invalid or two entries
    /// derive the same symbol.
    pub fn generate(&self) -> Result<GeneratedFiles, CodegenError> {
        self.config.validate()?;
        validate_spec(self.spec)?;

        let mut header = HeaderEmitter::new();
        let mut source = SourceEmitter::new(self.config);
        let mut docs = DocsEmitter::new();

        for (group, entry) in self.spec.entries() {
            let error = ResolvedError::resolve(group, entry, self.config);
            trace!(constant = %error.constant_name, dbus_name = %error.dbus_name, "emitting error");

            header.push(&error);
            source.push(&error);
            docs.push(&error);
        }

        debug!(
            groups = self.spec.groups.len(),
            errors = self.spec.entry_count(),
            "generated error tables"
        );

        Ok(GeneratedFiles {
            header: header.finish(),
            source: source.finish(),
            docs: docs.finish(),
        })
    }
}

#[cfg(test)]
impl ResolvedError {
    /// Builds an entry with default telepathy prefixes.
    pub(crate) fn for_test(uc_nick: &str, dbus_name: &str) -> Self {
        Self {
            constant_name: format!("TP_ERROR_STR_{}", uc_nick),
            code_name: format!("TP_ERROR_{}", uc_nick),
            dbus_name: dbus_name.to_string(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errgen_schema::parse_spec;

    fn generate(xml: &str) -> Result<GeneratedFiles, CodegenError> {
        let spec = parse_spec(xml)?;
        let config = GeneratorConfig::default();
        ConstantTableGenerator::new(&spec, &config).generate()
    }

    #[test]
    fn test_resolve_names() {
        let group = NamespaceGroup::new("com.example");
        let entry = ErrorEntry::new("Foo Bar.Baz");
        let error = ResolvedError::resolve(&group, &entry, &GeneratorConfig::default());

        assert_eq!(error.constant_name, "TP_ERROR_STR_FOO_BAR_BAZ");
        assert_eq!(error.code_name, "TP_ERROR_FOO_BAR_BAZ");
        assert_eq!(error.dbus_name, "com.example.FooBar.Baz");
        assert_eq!(error.description, "");
    }

    #[test]
    fn test_end_to_end_single_error() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example">
    <tp:error name="Not Available">
      <tp:docstring>The thing is &lt;missing&gt;.</tp:docstring>
    </tp:error>
  </tp:errors>
</node>"#;

        let files = generate(xml).expect("Failed to generate");

        assert_eq!(
            files.header,
            "#define TP_ERROR_STR_NOT_AVAILABLE \"com.example.NotAvailable\"\n"
        );
        assert_eq!(
            files.source,
            "#include <telepathy-glib/errors.h>

const gchar *
tp_error_get_dbus_name (TpError error)
{
  switch (error)
    {
      case TP_ERROR_NOT_AVAILABLE:
        return TP_ERROR_STR_NOT_AVAILABLE;
      default:
        g_return_val_if_reached (NULL);
    }
}
"
        );
        assert_eq!(
            files.docs,
            "/**
 * TP_ERROR_STR_NOT_AVAILABLE:
 *
 * The D-Bus error name com.example.NotAvailable
 *
 * The thing is &lt;missing&gt;.
 */
"
        );
    }

    #[test]
    fn test_zero_entries() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example"/>
</node>"#;

        let files = generate(xml).expect("Failed to generate");

        assert_eq!(files.header, "");
        assert_eq!(files.docs, "");
        assert!(!files.source.contains("case "));
        assert!(files.source.contains("      default:\n        g_return_val_if_reached (NULL);\n"));
    }

    #[test]
    fn test_order_preserved() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example">
    <tp:error name="Zulu"/>
    <tp:error name="Alpha"/>
    <tp:error name="Mike"/>
  </tp:errors>
</node>"#;

        let files = generate(xml).expect("Failed to generate");

        for text in [&files.header, &files.source, &files.docs] {
            let zulu = text.find("TP_ERROR_STR_ZULU").expect("zulu");
            let alpha = text.find("TP_ERROR_STR_ALPHA").expect("alpha");
            let mike = text.find("TP_ERROR_STR_MIKE").expect("mike");
            assert!(zulu < alpha && alpha < mike);
        }
    }

    #[test]
    fn test_deterministic() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example">
    <tp:error name="Network Error"><tp:docstring>Network &amp; stuff.</tp:docstring></tp:error>
    <tp:error name="Cancelled"/>
  </tp:errors>
</node>"#;

        let first = generate(xml).expect("Failed to generate");
        let second = generate(xml).expect("Failed to generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_undocumented_error_has_empty_description_line() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example"><tp:error name="Cancelled"/></tp:errors>
</node>"#;

        let files = generate(xml).expect("Failed to generate");
        assert!(files.docs.contains(" *\n * \n */\n"));
    }

    #[test]
    fn test_crlf_docstring_has_no_carriage_return() {
        let xml = "<node xmlns:tp=\"http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0\">\r\n\
  <tp:errors namespace=\"com.example\">\r\n\
    <tp:error name=\"Wrapped\"><tp:docstring>line one\r\nline two</tp:docstring></tp:error>\r\n\
  </tp:errors>\r\n\
</node>\r\n";

        let files = generate(xml).expect("Failed to generate");
        assert!(!files.docs.contains('\r'));
        assert!(files.docs.contains(" * line one line two\n"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut group = NamespaceGroup::new("com.example");
        group.errors.push(ErrorEntry::new(" "));
        let spec = ErrorSpec {
            groups: vec![group],
        };
        let config = GeneratorConfig::default();

        let result = ConstantTableGenerator::new(&spec, &config).generate();
        assert!(matches!(
            result,
            Err(CodegenError::Schema(
                errgen_schema::SchemaError::InvalidIdentifier { .. }
            ))
        ));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example">
    <tp:error name="Not Available"/>
    <tp:error name="Not.Available"/>
  </tp:errors>
</node>"#;

        let result = generate(xml);
        assert!(matches!(
            result,
            Err(CodegenError::Schema(
                errgen_schema::SchemaError::DuplicateSymbol { .. }
            ))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let spec = ErrorSpec::new();
        let config = GeneratorConfig::new().code_type("Tp Error");
        let result = ConstantTableGenerator::new(&spec, &config).generate();
        assert!(matches!(result, Err(CodegenError::Config { .. })));
    }

    #[test]
    fn test_custom_prefixes() {
        let xml = r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example"><tp:error name="Busy"/></tp:errors>
</node>"#;
        let spec = parse_spec(xml).expect("Failed to parse");
        let config = GeneratorConfig::new()
            .constant_prefix("EX_ERROR_STR_")
            .code_prefix("EX_ERROR_");

        let files = ConstantTableGenerator::new(&spec, &config)
            .generate()
            .expect("Failed to generate");

        assert_eq!(files.header, "#define EX_ERROR_STR_BUSY \"com.example.Busy\"\n");
        assert!(files.source.contains("      case EX_ERROR_BUSY:\n        return EX_ERROR_STR_BUSY;\n"));
    }
}
