//! Path helpers shared by the classifier and the packer.
//!
//! All classification and output happens on forward-slash relative paths,
//! regardless of the host separator.

use std::path::Path;

/// Normalize a path to forward slashes.
pub fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Base name of a normalized path (the part after the last `/`).
pub fn base_name(normalized: &str) -> &str {
    normalized.rsplit('/').next().unwrap_or(normalized)
}

/// Extension of a normalized path, including the leading dot.
///
/// Dotfiles like `.env` have no extension.
pub fn extension(normalized: &str) -> Option<&str> {
    let name = base_name(normalized);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_backslashes() {
        let path = PathBuf::from(r"frontend\src\App.tsx");
        assert_eq!(normalize(&path), "frontend/src/App.tsx");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("backend/server.js"), "server.js");
        assert_eq!(base_name("package.json"), "package.json");
    }

    #[test]
    fn test_extension_with_dot() {
        assert_eq!(extension("frontend/src/App.tsx"), Some(".tsx"));
        assert_eq!(extension("schema.sql"), Some(".sql"));
        assert_eq!(extension("archive.tar.gz"), Some(".gz"));
    }

    #[test]
    fn test_extension_dotfile_and_bare() {
        assert_eq!(extension(".env"), None);
        assert_eq!(extension("backend/.env"), None);
        assert_eq!(extension("Makefile"), None);
    }
}
