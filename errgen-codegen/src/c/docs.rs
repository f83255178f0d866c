//! gtk-doc fragment generation.

use crate::generator::ResolvedError;
use quick_xml::escape::escape;

/// Emitter for the documentation fragment.
#[derive(Debug, Default)]
pub struct DocsEmitter {
    lines: Vec<String>,
}

impl DocsEmitter {
    /// Creates an empty documentation emitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the comment block for an error.
    pub fn push(&mut self, error: &ResolvedError) {
        self.lines.push("/**".to_string());
        self.lines.push(format!(" * {}:", error.constant_name));
        self.lines.push(" *".to_string());
        self.lines
            .push(format!(" * The D-Bus error name {}", error.dbus_name));
        self.lines.push(" *".to_string());
        self.lines
            .push(format!(" * {}", escape(error.description.as_str())));
        self.lines.push(" */".to_string());
        self.lines.push(String::new());
    }

    /// Returns the finished documentation text.
    ///
    /// Every block already ends with a blank line, so the text ends with a
    /// newline without further padding.
    #[must_use]
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
