//! C code generation modules.
//!
//! Each emitter accumulates the lines of one output stream. The generator
//! feeds all three from a single pass over the specification.

pub mod docs;
pub mod header;
pub mod source;

pub use docs::DocsEmitter;
pub use header::HeaderEmitter;
pub use source::SourceEmitter;

/// Joins emitted lines, terminating the text with a newline.
///
/// An empty stream stays empty.
pub(crate) fn finish_lines(mut lines: Vec<String>) -> String {
    lines.push(String::new());
    lines.join("\n")
}
