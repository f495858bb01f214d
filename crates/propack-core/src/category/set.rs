//! Ordered category collection.
//!
//! Unlike a keyed store, the set preserves declaration order: the
//! classifier walks categories front to back and the first match wins.

use super::builtin::{CategoryDef, BUILTIN_CATEGORIES};

/// Insertion-ordered set of category definitions.
#[derive(Debug, Clone)]
pub struct CategorySet {
    categories: Vec<CategoryDef>,
}

impl CategorySet {
    /// Build from an explicit list. Must not be empty; the first category
    /// flagged `is_default` (or the first category overall) is the default.
    pub fn new(categories: Vec<CategoryDef>) -> Self {
        Self { categories }
    }

    /// The builtin table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CATEGORIES.iter().map(CategoryDef::from).collect())
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All categories, in declaration order.
    pub fn all(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// Category names, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// The default category.
    pub fn default_category(&self) -> &CategoryDef {
        self.categories
            .iter()
            .find(|c| c.is_default)
            .unwrap_or_else(|| &self.categories[0])
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set() {
        let set = CategorySet::builtin();
        assert_eq!(set.len(), 4);
        assert!(set.get("project_info").is_some());
        assert!(set.get("backend").is_some());
        assert!(set.get("nonexistent").is_none());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let set = CategorySet::builtin();
        assert_eq!(
            set.names(),
            vec![
                "project_info",
                "backend",
                "frontend_core",
                "frontend_components"
            ]
        );
    }

    #[test]
    fn test_default_category() {
        let set = CategorySet::builtin();
        assert_eq!(set.default_category().name, "project_info");
        assert!(set.default_category().is_default);
    }
}
