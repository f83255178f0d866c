//! # errgen Codegen
//!
//! Code generation from D-Bus error specifications.
//!
//! This crate provides:
//! - A C header of `#define` error-name string constants
//! - A C source file mapping enumerated error codes to those constants
//! - A gtk-doc comment fragment documenting every constant
//! - Atomic writing of all three artifacts

pub mod c;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{ConstantTableGenerator, GeneratedFiles, ResolvedError};
pub use output::OutputPaths;

use std::path::Path;

/// Generates all three artifacts from a specification string.
///
/// # Arguments
/// * `xml` - Specification document content
/// * `config` - Naming and layout configuration
///
/// # Returns
/// The generated header, source and documentation text.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_xml(xml: &str, config: &GeneratorConfig) -> Result<GeneratedFiles, CodegenError> {
    let spec = errgen_schema::parse_spec_with_namespace(xml, &config.namespace_uri)?;
    ConstantTableGenerator::new(&spec, config).generate()
}

/// Generates all three artifacts from a specification file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<GeneratedFiles, CodegenError> {
    let xml = std::fs::read_to_string(path).map_err(|source| CodegenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    generate_from_xml(&xml, config)
}

/// Generates from a specification file and writes the three artifacts.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
/// Returns `CodegenError` if generation or any write fails.
pub fn generate_to_files(
    spec_path: &Path,
    outputs: &OutputPaths,
    config: &GeneratorConfig,
) -> Result<(), CodegenError> {
    let files = generate_from_file(spec_path, config)?;
    files.write(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_to_files_writes_all_targets() {
        let dir = tempdir().expect("tempdir");
        let spec = dir.path().join("errors.xml");
        std::fs::write(
            &spec,
            r#"<node xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <tp:errors namespace="com.example">
    <tp:error name="Not Available">
      <tp:docstring>The thing is &lt;missing&gt;.</tp:docstring>
    </tp:error>
  </tp:errors>
</node>"#,
        )
        .unwrap();
        let outputs = OutputPaths::from_basename(dir.path().join("errors")).expect("valid base");

        generate_to_files(&spec, &outputs, &GeneratorConfig::default()).expect("generation succeeds");

        let header = std::fs::read_to_string(&outputs.header).unwrap();
        let source = std::fs::read_to_string(&outputs.source).unwrap();
        let docs = std::fs::read_to_string(&outputs.docs).unwrap();

        assert_eq!(
            header,
            "#define TP_ERROR_STR_NOT_AVAILABLE \"com.example.NotAvailable\"\n"
        );
        assert!(source.starts_with("#include <telepathy-glib/errors.h>\n"));
        assert!(source.contains("      case TP_ERROR_NOT_AVAILABLE:\n        return TP_ERROR_STR_NOT_AVAILABLE;\n"));
        assert!(docs.contains(" * TP_ERROR_STR_NOT_AVAILABLE:\n"));
        assert!(docs.contains(" * The thing is &lt;missing&gt;.\n"));
    }

    #[test]
    fn test_generate_to_files_missing_spec() {
        let dir = tempdir().expect("tempdir");
        let outputs = OutputPaths::from_basename(dir.path().join("errors")).expect("valid base");

        let result = generate_to_files(
            &dir.path().join("absent.xml"),
            &outputs,
            &GeneratorConfig::default(),
        );

        assert!(matches!(result, Err(CodegenError::Read { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
