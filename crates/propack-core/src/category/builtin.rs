//! Builtin category definitions.
//!
//! The category table is fixed at compile time; declaration order is the
//! classification precedence order. Exactly one category carries the
//! `is_default` flag: it receives unmatched files, root-level files of its
//! extensions, and the rendered directory tree.

/// Builtin category table, in precedence order.
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "project_info",
        description: "Información del proyecto y configuración básica",
        exact_paths: &["package.json", "README.md"],
        include_patterns: &[],
        exclude_patterns: &[],
        extensions: &[".json", ".js", ".ts", ".md"],
        is_default: true,
    },
    BuiltinCategory {
        name: "backend",
        description: "Backend completo: servidor, APIs y base de datos",
        exact_paths: &[],
        include_patterns: &["backend/"],
        exclude_patterns: &[],
        extensions: &[".js", ".ts", ".sql"],
        is_default: false,
    },
    BuiltinCategory {
        name: "frontend_core",
        description: "Núcleo del frontend",
        exact_paths: &[],
        include_patterns: &["frontend/src/"],
        exclude_patterns: &["frontend/src/components/"],
        extensions: &[".ts", ".tsx", ".css"],
        is_default: false,
    },
    BuiltinCategory {
        name: "frontend_components",
        description: "Componentes del frontend",
        exact_paths: &[],
        include_patterns: &["frontend/src/components/"],
        exclude_patterns: &[],
        extensions: &[".tsx", ".ts"],
        is_default: false,
    },
];

/// Static category definition.
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Category name (unique identifier, also the artifact name segment)
    pub name: &'static str,
    /// Human-readable description, written into the artifact header
    pub description: &'static str,
    /// Base names that match unconditionally, before any other rule
    pub exact_paths: &'static [&'static str],
    /// Path substrings, at least one of which must occur
    pub include_patterns: &'static [&'static str],
    /// Path substrings that remove this category from consideration
    pub exclude_patterns: &'static [&'static str],
    /// Allowed extensions, leading dot included
    pub extensions: &'static [&'static str],
    /// Default category: fallback target and sole recipient of the tree
    pub is_default: bool,
}

/// Runtime category definition.
#[derive(Debug, Clone)]
pub struct CategoryDef {
    pub name: String,
    pub description: String,
    pub exact_paths: Vec<String>,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub extensions: Vec<String>,
    pub is_default: bool,
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            exact_paths: builtin.exact_paths.iter().map(|s| s.to_string()).collect(),
            include_patterns: builtin
                .include_patterns
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: builtin
                .exclude_patterns
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extensions: builtin.extensions.iter().map(|s| s.to_string()).collect(),
            is_default: builtin.is_default,
        }
    }
}
