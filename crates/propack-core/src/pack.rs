//! Two-pass aggregation pipeline.
//!
//! Pass one walks the tree and builds the manifest (file → category), so
//! each artifact's index can be written before its contents. Pass two
//! walks again and appends every file's content to its category's
//! artifact. All artifact handles stay open across pass two because
//! content is written interleaved; the set is bounded by the category
//! count and released on every exit path.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use walkdir::WalkDir;

use crate::category::{CategoryDef, CategorySet, Classifier};
use crate::error::Result;
use crate::exclude;
use crate::paths;
use crate::tree;

/// Callback type for progress reporting.
///
/// Tags: `CREATE` (artifact file name), `PACK` (relative path written),
/// `SKIP` (relative path and read error). The core never prints; console
/// output belongs to the caller.
pub type PackCallback<'a> = Option<&'a dyn Fn(&str, &str)>;

/// Prefix of every generated artifact file name.
pub const ARTIFACT_PREFIX: &str = "proyecto";

const RULE_WIDTH: usize = 80;

/// Fixed instruction preamble written at the top of every artifact.
const PREAMBLE: &str = "Este es mi proyecto. Memoriza el código y toda la información. \
Mas adelante te pediré modificaciones. Contesta siempre en español, \
con el código completo, y añadiendo en la primera linea del código la ruta del fichero. \
Dame los ficheros de código de uno en uno.\n\
No cambies nada sin que yo te lo pida o preguntando antes.\n\n";

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// File → category assignment computed in pass one.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: HashMap<String, Vec<String>>,
}

impl Manifest {
    /// Record a discovered file under its category.
    pub fn record(&mut self, category: &str, relative_path: String) {
        self.entries
            .entry(category.to_string())
            .or_default()
            .push(relative_path);
    }

    /// Paths for a category, in discovery order.
    pub fn files_for(&self, category: &str) -> &[String] {
        self.entries
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Paths for a category, lexicographically sorted for the index.
    pub fn sorted_files_for(&self, category: &str) -> Vec<&String> {
        let mut files: Vec<&String> = self.files_for(category).iter().collect();
        files.sort();
        files
    }

    /// Every recorded path across all categories.
    pub fn all_files(&self) -> Vec<&String> {
        self.entries.values().flatten().collect()
    }

    pub fn total_files(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Summary of one pack run.
#[derive(Debug, Default)]
pub struct PackReport {
    /// Artifact files created, in category declaration order
    pub artifacts: Vec<PathBuf>,
    /// Files whose content was aggregated
    pub packed: usize,
    /// Files skipped because their content could not be read as text
    pub skipped: usize,
}

/// Aggregation driver for one scan root.
pub struct Packer {
    root: PathBuf,
    classifier: Classifier,
}

impl Packer {
    pub fn new(root: impl Into<PathBuf>, categories: CategorySet) -> Self {
        Self {
            root: root.into(),
            classifier: Classifier::new(categories),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    fn walk(&self) -> impl Iterator<Item = std::result::Result<walkdir::DirEntry, walkdir::Error>> {
        WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && exclude::is_dependency_dir(&entry.file_name().to_string_lossy()))
        })
    }

    fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        paths::normalize(rel)
    }

    /// Pass one: discover and classify every non-excluded file.
    ///
    /// Traversal errors abort; classification itself cannot fail.
    pub fn collect_manifest(&self) -> Result<Manifest> {
        let mut manifest = Manifest::default();

        for entry in self.walk() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = self.relative(entry.path());
            if exclude::is_excluded(&rel) {
                continue;
            }
            let category = self.classifier.classify(Path::new(&rel));
            manifest.record(&category.name, rel);
        }

        Ok(manifest)
    }

    /// Run the full pipeline: manifest, artifact headers, tree, contents.
    pub fn run(&self, on_file: PackCallback<'_>) -> Result<PackReport> {
        let started = Local::now();
        let stamp = started.format("%Y%m%d%H%M%S").to_string();

        let manifest = self.collect_manifest()?;

        let mut report = PackReport::default();
        let mut artifacts: HashMap<String, BufWriter<File>> = HashMap::new();

        for cat in self.classifier.set().all() {
            let file_name = format!("{}_{}_{}.txt", ARTIFACT_PREFIX, cat.name, stamp);
            let path = self.root.join(&file_name);
            let mut out = BufWriter::new(File::create(&path)?);
            write_header(&mut out, cat, &manifest, &started)?;
            if let Some(f) = on_file {
                f("CREATE", &file_name);
            }
            artifacts.insert(cat.name.clone(), out);
            report.artifacts.push(path);
        }

        // The rendered tree goes into the default category's artifact only
        let default_name = self.classifier.set().default_category().name.clone();
        if let Some(out) = artifacts.get_mut(&default_name) {
            writeln!(out, "Directory Structure:")?;
            writeln!(out, "{}", rule('-'))?;
            tree::write_tree(out, &self.root)?;
            write!(out, "\n\nFile Contents:\n")?;
            writeln!(out, "{}", rule('='))?;
        }

        // Pass two: same walk, content aggregation. A single unreadable
        // file is reported and skipped; the run continues.
        for entry in self.walk() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = self.relative(entry.path());
            if exclude::is_excluded(&rel) {
                continue;
            }

            let content = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(err) => {
                    if let Some(f) = on_file {
                        f("SKIP", &format!("{}: {}", rel, err));
                    }
                    report.skipped += 1;
                    continue;
                }
            };

            let category = self.classifier.classify(Path::new(&rel));
            if let Some(out) = artifacts.get_mut(&category.name) {
                write!(out, "\n{}\n", rule('='))?;
                writeln!(out, "File: {}", rel)?;
                writeln!(out, "{}", rule('-'))?;
                out.write_all(content.as_bytes())?;
                writeln!(out)?;
                if let Some(f) = on_file {
                    f("PACK", &rel);
                }
                report.packed += 1;
            }
        }

        for out in artifacts.values_mut() {
            out.flush()?;
        }

        Ok(report)
    }
}

fn write_header<W: Write>(
    out: &mut W,
    cat: &CategoryDef,
    manifest: &Manifest,
    started: &DateTime<Local>,
) -> Result<()> {
    write!(out, "{}", PREAMBLE)?;

    writeln!(out, "Category: {}", cat.name)?;
    writeln!(out, "Description: {}", cat.description)?;
    writeln!(out, "Generated: {}", started.format("%Y-%m-%d %H:%M:%S"))?;
    write!(out, "{}\n\n", rule('='))?;

    writeln!(out, "Contents:")?;
    writeln!(out, "{}", rule('-'))?;
    for path in manifest.sorted_files_for(&cat.name) {
        writeln!(out, "- {}", path)?;
    }
    write!(out, "\n{}\n\n", rule('='))?;

    Ok(())
}
