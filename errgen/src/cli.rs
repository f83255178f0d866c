//! Command-line front end.

use anyhow::{Context, Result};
use clap::Parser;
use errgen_codegen::{GeneratorConfig, OutputPaths, generate_to_files};
use std::path::PathBuf;
use tracing::info;

/// Generate C error-name constants, a lookup function and gtk-doc blocks
/// from a D-Bus error specification.
#[derive(Debug, Parser)]
#[command(name = "errgen")]
#[command(version)]
#[command(about = "Generate C error-name tables from a D-Bus error specification")]
pub struct Cli {
    /// Base name of the generated files (<BASENAME>.h, <BASENAME>.c,
    /// <BASENAME>-gtk-doc.h)
    pub basename: PathBuf,

    /// Path to the XML error specification
    pub spec: PathBuf,

    /// Override the header output path
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Override the source output path
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Override the gtk-doc output path
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// Prefix of the generated string constants
    #[arg(long)]
    pub constant_prefix: Option<String>,

    /// Prefix of the enumerated error codes
    #[arg(long)]
    pub code_prefix: Option<String>,

    /// C type of the enumerated error code
    #[arg(long)]
    pub code_type: Option<String>,

    /// Name of the generated lookup function
    #[arg(long)]
    pub function_name: Option<String>,

    /// Header included by the generated source file
    #[arg(long)]
    pub include: Option<String>,

    /// XML namespace URI of the specification extension elements
    #[arg(long)]
    pub namespace_uri: Option<String>,
}

impl Cli {
    /// Builds the generator configuration from defaults and overrides.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(prefix) = &self.constant_prefix {
            config = config.constant_prefix(prefix);
        }
        if let Some(prefix) = &self.code_prefix {
            config = config.code_prefix(prefix);
        }
        if let Some(code_type) = &self.code_type {
            config = config.code_type(code_type);
        }
        if let Some(name) = &self.function_name {
            config = config.function_name(name);
        }
        if let Some(include) = &self.include {
            config = config.include(include);
        }
        if let Some(uri) = &self.namespace_uri {
            config = config.namespace_uri(uri);
        }
        config
    }

    /// Resolves the three output paths.
    ///
    /// # Errors
    /// Returns an error if the base name is empty.
    pub fn outputs(&self) -> Result<OutputPaths> {
        let mut outputs = OutputPaths::from_basename(&self.basename)?;
        if let Some(path) = &self.header {
            outputs = outputs.header(path);
        }
        if let Some(path) = &self.source {
            outputs = outputs.source(path);
        }
        if let Some(path) = &self.docs {
            outputs = outputs.docs(path);
        }
        Ok(outputs)
    }
}

/// Runs a generation described by the parsed command line.
///
/// # Errors
/// Returns an error if the specification cannot be read, parsed or
/// validated, or if an output cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let outputs = cli.outputs()?;

    generate_to_files(&cli.spec, &outputs, &config).with_context(|| {
        format!(
            "failed to generate '{}' from '{}'",
            cli.basename.display(),
            cli.spec.display()
        )
    })?;

    info!(spec = %cli.spec.display(), "generation complete");
    Ok(())
}
