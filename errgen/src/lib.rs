//! # errgen
//!
//! Generates C error-name tables from D-Bus error specifications.
//!
//! Given a specification declaring errors under `tp:errors` groups, errgen
//! writes three files sharing a base name:
//!
//! - `<base>.h` - `#define` constants binding symbols to D-Bus error names
//! - `<base>.c` - a lookup function from enumerated code to error name
//! - `<base>-gtk-doc.h` - gtk-doc comment blocks for every constant
//!
//! ## Quick Start
//!
//! ```ignore
//! use errgen::prelude::*;
//!
//! let outputs = OutputPaths::from_basename("_gen/errors")?;
//! generate_to_files(Path::new("spec/errors.xml"), &outputs, &GeneratorConfig::default())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Specification parsing and validation
//! - [`codegen`] - C and gtk-doc generation
//! - [`cli`] - Command-line front end

pub mod cli;
pub mod prelude;

/// Specification parsing and validation.
pub mod schema {
    pub use errgen_schema::*;
}

/// C code generation from specifications.
pub mod codegen {
    pub use errgen_codegen::*;
}
