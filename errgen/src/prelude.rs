//! Prelude module for convenient imports.
//!
//! ```ignore
//! use errgen::prelude::*;
//! ```

// Specification types
pub use errgen_schema::{
    ErrorEntry, ErrorSpec, NS_TP, NamespaceGroup, ParseError, SchemaError, parse_spec,
    parse_spec_with_namespace, validate_spec,
};

// Generation types
pub use errgen_codegen::{
    CodegenError, ConstantTableGenerator, GeneratedFiles, GeneratorConfig, OutputPaths,
    ResolvedError, generate_from_file, generate_from_xml, generate_to_files,
};
