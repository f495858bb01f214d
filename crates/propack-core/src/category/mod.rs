//! # Category module
//!
//! Partitions a project's files into named categories, one output artifact
//! per category:
//!
//! - **project_info**: manifests, readmes and root-level configuration
//! - **backend**: server, API and database sources
//! - **frontend_core**: frontend sources outside the component tree
//! - **frontend_components**: the component tree itself
//!
//! Declaration order in the table is the precedence order; exact file
//! names beat patterns, and exclude patterns let a narrow category carve
//! itself out of a broader sibling.
//!
//! ## Module layout
//!
//! - `builtin`: the fixed category table
//! - `set`: ordered runtime collection
//! - `classifier`: the assignment function
//!
//! ## Example
//!
//! ```rust
//! use propack_core::category::Classifier;
//! use std::path::Path;
//!
//! let classifier = Classifier::builtin();
//! let cat = classifier.classify(Path::new("backend/db/schema.sql"));
//! assert_eq!(cat.name, "backend");
//! ```

mod builtin;
mod classifier;
mod set;

pub use builtin::{BuiltinCategory, CategoryDef, BUILTIN_CATEGORIES};
pub use classifier::Classifier;
pub use set::CategorySet;
