//! Directory tree renderer.
//!
//! Streams an indented box-drawing listing of the scan root into a writer.
//! Excluded entries are filtered out before sibling positions are
//! computed, so the last visible child always gets the closing connector.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::exclude;

/// Render the directory hierarchy under `root` into `out`.
pub fn write_tree<W: Write>(out: &mut W, root: &Path) -> Result<()> {
    write_level(out, root, "")
}

fn write_level<W: Write>(out: &mut W, dir: &Path, prefix: &str) -> Result<()> {
    let mut entries: Vec<(String, PathBuf, bool)> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if exclude::is_excluded(&name) {
            continue;
        }
        let path = entry.path();
        let is_dir = path.is_dir();
        entries.push((name, path, is_dir));
    }

    // Directories first, then case-insensitive by name
    entries.sort_by(|a, b| {
        b.2.cmp(&a.2)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });

    let last = entries.len().saturating_sub(1);
    for (index, (name, path, is_dir)) in entries.iter().enumerate() {
        let is_last = index == last;
        let connector = if is_last { "└── " } else { "├── " };
        writeln!(out, "{}{}{}", prefix, connector, name)?;

        if *is_dir && !exclude::is_dependency_dir(name) {
            let next_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            write_level(out, path, &next_prefix)?;
        }
    }

    Ok(())
}
