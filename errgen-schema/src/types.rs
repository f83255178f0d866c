//! Specification document model.
//!
//! A specification is an ordered list of namespace groups, each holding an
//! ordered list of error entries. Order is preserved from the source
//! document and drives emission order in generated output.

/// Complete error specification document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSpec {
    /// Namespace groups in document order.
    pub groups: Vec<NamespaceGroup>,
}

impl ErrorSpec {
    /// Creates a new empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over every entry together with its enclosing group, in
    /// document order.
    pub fn entries(&self) -> impl Iterator<Item = (&NamespaceGroup, &ErrorEntry)> {
        self.groups
            .iter()
            .flat_map(|group| group.errors.iter().map(move |entry| (group, entry)))
    }

    /// Returns the total number of error entries across all groups.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.errors.len()).sum()
    }
}

/// A group of errors sharing a D-Bus error namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceGroup {
    /// Namespace prefix, e.g. `org.freedesktop.Telepathy.Error`.
    pub namespace: String,
    /// Error entries in document order.
    pub errors: Vec<ErrorEntry>,
}

impl NamespaceGroup {
    /// Creates a new group with no entries.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            errors: Vec::new(),
        }
    }

    /// Returns the fully qualified D-Bus error name for an entry of this
    /// group.
    #[must_use]
    pub fn dbus_name(&self, entry: &ErrorEntry) -> String {
        entry.dbus_name(&self.namespace)
    }
}

/// A single declared error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// Human-readable name; may contain spaces and dots.
    pub name: String,
    /// Documentation text, if a docstring was present.
    pub description: Option<String>,
}

impl ErrorEntry {
    /// Creates a new entry without documentation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Returns the nick: the name with spaces removed.
    #[must_use]
    pub fn nick(&self) -> String {
        self.name.replace(' ', "")
    }

    /// Returns the uppercase nick: spaces and dots replaced with
    /// underscores, upper-cased.
    #[must_use]
    pub fn uc_nick(&self) -> String {
        self.name.replace([' ', '.'], "_").to_uppercase()
    }

    /// Returns `namespace.nick`.
    #[must_use]
    pub fn dbus_name(&self, namespace: &str) -> String {
        format!("{}.{}", namespace, self.nick())
    }

    /// Returns the description, or an empty string when none was given.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
