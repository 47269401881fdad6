use std::collections::HashMap;

/// Assigns dense, zero-based indices to variable names in the order they are
/// first seen.
///
/// A registry lives for exactly one parse; its final size is the number of
/// inputs the compiled function expects.
///
/// ## Example
/// ```
/// use mathfn::interpreter::parser::registry::VariableRegistry;
///
/// let mut registry = VariableRegistry::new();
/// assert!(registry.is_empty());
/// assert_eq!(registry.index_of("y"), 0);
/// assert_eq!(registry.index_of("x"), 1);
/// assert_eq!(registry.index_of("y"), 0);
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct VariableRegistry {
    indices: HashMap<String, usize>,
}

impl VariableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, assigning the next free one on first use.
    pub fn index_of(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.indices.len();
        self.indices.insert(name.to_string(), index);
        index
    }

    /// Number of distinct variables seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no variable has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
