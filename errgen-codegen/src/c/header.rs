//! Header generation: one `#define` per error name.

use crate::generator::ResolvedError;

/// Emitter for the string constant header.
#[derive(Debug, Default)]
pub struct HeaderEmitter {
    lines: Vec<String>,
}

impl HeaderEmitter {
    /// Creates an empty header emitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the constant definition for an error.
    pub fn push(&mut self, error: &ResolvedError) {
        self.lines.push(format!(
            "#define {} \"{}\"",
            error.constant_name, error.dbus_name
        ));
    }

    /// Returns the finished header text.
    #[must_use]
    pub fn finish(self) -> String {
        super::finish_lines(self.lines)
    }
}
