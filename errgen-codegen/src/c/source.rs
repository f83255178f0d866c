//! Source generation: the code-to-name lookup function.

use crate::config::GeneratorConfig;
use crate::generator::ResolvedError;

/// Emitter for the lookup function source file.
#[derive(Debug)]
pub struct SourceEmitter {
    lines: Vec<String>,
}

impl SourceEmitter {
    /// Creates an emitter and writes the function prologue.
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        let lines = vec![
            format!("#include <{}>", config.include),
            String::new(),
            "const gchar *".to_string(),
            format!("{} ({} error)", config.function_name, config.code_type),
            "{".to_string(),
            "  switch (error)".to_string(),
            "    {".to_string(),
        ];
        Self { lines }
    }

    /// Appends the dispatch clause for an error.
    pub fn push(&mut self, error: &ResolvedError) {
        self.lines.push(format!("      case {}:", error.code_name));
        self.lines
            .push(format!("        return {};", error.constant_name));
    }

    /// Closes the switch with the unreachable default branch and returns
    /// the finished source text.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.lines.push("      default:".to_string());
        self.lines
            .push("        g_return_val_if_reached (NULL);".to_string());
        self.lines.push("    }".to_string());
        self.lines.push("}".to_string());
        super::finish_lines(self.lines)
    }
}
