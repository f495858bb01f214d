pub mod category;
pub mod error;
pub mod exclude;
pub mod pack;
pub mod paths;
pub mod tree;

pub use category::{BuiltinCategory, CategoryDef, CategorySet, Classifier, BUILTIN_CATEGORIES};
pub use error::{PackError, Result};
pub use exclude::{is_dependency_dir, is_excluded, DEPENDENCY_DIR};
pub use pack::{Manifest, PackCallback, PackReport, Packer, ARTIFACT_PREFIX};
pub use tree::write_tree;
