//! Exclusion filter.
//!
//! Decides which files and directories stay out of scope entirely: build
//! noise, lockfiles and dependency directories are never classified, never
//! shown in the tree and never aggregated.

use crate::paths;

/// Extensions that are never packed (logs, scripts, plain text, markers).
pub const EXCLUDED_EXTENSIONS: &[&str] = &[".txt", ".sh", ".py", ".log", ".git", ".env"];

/// Name fragments that are never packed.
pub const EXCLUDED_NAMES: &[&str] = &["package-lock.json", "node_modules"];

/// Dependency directory pruned from descent during traversal.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Check whether a file name or relative path is out of scope.
///
/// Accepts bare names as well as full relative paths; separators are
/// normalized before the dependency-directory segment check.
pub fn is_excluded(name: &str) -> bool {
    let normalized = name.replace('\\', "/");

    EXCLUDED_EXTENSIONS
        .iter()
        .any(|ext| normalized.ends_with(ext))
        || EXCLUDED_NAMES.iter().any(|n| normalized.contains(n))
        || normalized.contains("/node_modules/")
}

/// Check whether a directory name prunes the walk (no recursive descent).
pub fn is_dependency_dir(name: &str) -> bool {
    paths::base_name(&name.replace('\\', "/")) == DEPENDENCY_DIR
}
