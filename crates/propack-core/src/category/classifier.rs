//! Category classifier.
//!
//! Assigns every relative path to exactly one category. The function is
//! total and deterministic: the same path and the same category set always
//! produce the same answer, and no path is left unassigned.
//!
//! Precedence, evaluated per category in declaration order, first match
//! wins:
//!
//! 1. exact base-name match (bypasses every other rule)
//! 2. exclude-pattern hit skips the category entirely
//! 3. include-pattern plus allowed extension
//! 4. default category only: allowed extension at the root or one level
//!    below
//! 5. nothing matched anywhere: the default category

use std::path::Path;

use crate::paths;

use super::builtin::CategoryDef;
use super::set::CategorySet;

/// Category classifier over an ordered category set.
#[derive(Debug, Clone)]
pub struct Classifier {
    set: CategorySet,
}

impl Classifier {
    pub fn new(set: CategorySet) -> Self {
        Self { set }
    }

    /// Classifier over the builtin table.
    pub fn builtin() -> Self {
        Self::new(CategorySet::builtin())
    }

    /// The underlying category set.
    pub fn set(&self) -> &CategorySet {
        &self.set
    }

    /// Assign a relative path to its category.
    pub fn classify(&self, relative_path: &Path) -> &CategoryDef {
        let normalized = paths::normalize(relative_path);
        let file_name = paths::base_name(&normalized);
        let ext = paths::extension(&normalized);

        for cat in self.set.all() {
            if cat.exact_paths.iter().any(|p| p == file_name) {
                return cat;
            }

            if cat
                .exclude_patterns
                .iter()
                .any(|p| normalized.contains(p.as_str()))
            {
                continue;
            }

            let ext_allowed = ext.is_some_and(|e| cat.extensions.iter().any(|x| x == e));

            if ext_allowed
                && cat
                    .include_patterns
                    .iter()
                    .any(|p| normalized.contains(p.as_str()))
            {
                return cat;
            }

            // Root-level files of the default category's extensions land
            // there without any pattern.
            if cat.is_default && ext_allowed && normalized.matches('/').count() <= 1 {
                return cat;
            }
        }

        self.set.default_category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::builtin::BuiltinCategory;
    use std::path::PathBuf;

    fn classify(path: &str) -> String {
        Classifier::builtin()
            .classify(&PathBuf::from(path))
            .name
            .clone()
    }

    #[test]
    fn test_totality() {
        let classifier = Classifier::builtin();
        let names = classifier.set().names();
        let paths = [
            "package.json",
            "backend/server.js",
            "backend/db/schema.sql",
            "frontend/src/App.tsx",
            "frontend/src/components/Button.tsx",
            "docs/deep/nested/guide.md",
            "weird/unmatched.xyz",
            "no_extension",
        ];
        for path in paths {
            let cat = classifier.classify(&PathBuf::from(path));
            assert!(
                names.contains(&cat.name.as_str()),
                "{} classified into unknown category {}",
                path,
                cat.name
            );
        }
    }

    #[test]
    fn test_exact_path_beats_pattern() {
        // package.json under backend/ still lands in project_info
        assert_eq!(classify("package.json"), "project_info");
        assert_eq!(classify("backend/package.json"), "project_info");
        assert_eq!(classify("frontend/src/README.md"), "project_info");
    }

    #[test]
    fn test_backend_pattern() {
        assert_eq!(classify("backend/db/schema.sql"), "backend");
        assert_eq!(classify("backend/api/routes.ts"), "backend");
        assert_eq!(classify("backend/src/server.js"), "backend");
    }

    #[test]
    fn test_shallow_files_captured_by_default() {
        // The default category is declared first and its root-level rule
        // fires before later pattern categories are consulted, so shallow
        // files of its extensions never reach them. Declaration order is
        // the contract; later categories only see deeper paths.
        assert_eq!(classify("backend/server.js"), "project_info");
        assert_eq!(classify("backend/index.ts"), "project_info");
        // .sql is not a default-category extension, so depth one still
        // reaches the backend rules
        assert_eq!(classify("backend/schema.sql"), "backend");
    }

    #[test]
    fn test_exclude_pattern_carves_out_components() {
        // frontend/src/ is a substring of the components path, but the
        // core category excludes the components subtree.
        assert_eq!(classify("frontend/src/App.tsx"), "frontend_core");
        assert_eq!(classify("frontend/src/styles/main.css"), "frontend_core");
        assert_eq!(
            classify("frontend/src/components/Button.tsx"),
            "frontend_components"
        );
        assert_eq!(
            classify("frontend/src/components/form/Input.ts"),
            "frontend_components"
        );
    }

    #[test]
    fn test_root_level_fallback() {
        assert_eq!(classify("index.ts"), "project_info");
        assert_eq!(classify("docs/intro.md"), "project_info");
        // Two levels down the root fallback no longer applies
        assert_eq!(classify("docs/deep/guide.md"), "project_info"); // via final fallback
    }

    #[test]
    fn test_extension_gate_on_patterns() {
        // Pattern match alone is not enough without an allowed extension
        assert_eq!(classify("frontend/src/logo.svg"), "project_info");
        assert_eq!(classify("backend/notes.md"), "project_info");
    }

    #[test]
    fn test_unmatched_falls_back_to_default() {
        assert_eq!(classify("a/b/c/d.xyz"), "project_info");
        assert_eq!(classify("no_extension"), "project_info");
    }

    #[test]
    fn test_declaration_order_resolves_overlap() {
        // Two categories whose rules both match; the one declared first
        // must win.
        let first = BuiltinCategory {
            name: "first",
            description: "first",
            exact_paths: &[],
            include_patterns: &["shared/"],
            exclude_patterns: &[],
            extensions: &[".ts"],
            is_default: true,
        };
        let second = BuiltinCategory {
            name: "second",
            description: "second",
            exact_paths: &[],
            include_patterns: &["shared/"],
            exclude_patterns: &[],
            extensions: &[".ts"],
            is_default: false,
        };
        let set = CategorySet::new(vec![(&first).into(), (&second).into()]);
        let classifier = Classifier::new(set);
        assert_eq!(
            classifier.classify(&PathBuf::from("shared/mod.ts")).name,
            "first"
        );

        let set = CategorySet::new(vec![(&second).into(), (&first).into()]);
        let classifier = Classifier::new(set);
        assert_eq!(
            classifier.classify(&PathBuf::from("shared/mod.ts")).name,
            "second"
        );
    }

    #[test]
    fn test_backslash_input_normalized() {
        assert_eq!(
            classify(r"frontend\src\components\Button.tsx"),
            "frontend_components"
        );
    }
}
