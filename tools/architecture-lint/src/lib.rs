//! Repo-local architectural lint for the screening backend's layering.
//!
//! The backend separates a framework-free `domain` (the screening capability
//! port and its orchestration use-case) from the adapters around it. This
//! crate parses the layer sources with `syn` and rejects imports that cross
//! the dependency-inversion seam:
//!
//! - `domain` must not reach `inbound`, `outbound`, or the `composition`
//!   root, nor web or documentation frameworks
//! - `inbound` adapters must not import `outbound` adapters
//! - `outbound` adapters must not import `inbound` adapters, the
//!   `composition` root, or web frameworks
//!
//! Run it with `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use syn::visit::Visit;
use thiserror::Error;

/// Library crate name used when backend sources refer to themselves by path.
const BACKEND_CRATE: &str = "screening_backend";

/// Web and documentation crates that only adapters and the binary may use.
const FRAMEWORK_CRATES: [&str; 6] = [
    "actix",
    "actix_service",
    "actix_web",
    "actix_web_prom",
    "utoipa",
    "utoipa_swagger_ui",
];

/// A single boundary violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: Utf8PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug, Error)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    #[error("I/O error while linting architecture: {0}")]
    Io(#[from] io::Error),
    /// A file name under `backend/src` is not valid UTF-8.
    #[error("non UTF-8 path under {parent}")]
    NonUtf8Path {
        /// Directory containing the offending entry.
        parent: Utf8PathBuf,
    },
    /// Rust source parsing failed.
    #[error("failed to parse Rust source while linting architecture ({file}): {message}")]
    Parse {
        /// File that failed to parse.
        file: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// One or more boundary violations were found.
    #[error("{}", render_violations(.0))]
    Violations(Vec<Violation>),
}

fn render_violations(violations: &[Violation]) -> String {
    violations.iter().fold(
        String::from("Architecture boundary violations:\n"),
        |mut out, violation| {
            out.push_str("- ");
            out.push_str(&violation.to_string());
            out.push('\n');
            out
        },
    )
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`.
    pub file: Utf8PathBuf,
    /// File contents.
    pub contents: String,
}

impl LintSource {
    /// Build a source from a relative path and its contents.
    pub fn new(file: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: contents.into(),
        }
    }
}

/// Lint the backend crate sources on disk.
///
/// `backend_dir` must be the `backend/` directory at the repository root.
pub fn lint_backend_sources(backend_dir: &Utf8Path) -> Result<(), ArchitectureLintError> {
    let src = Dir::open_ambient_dir(backend_dir.join("src"), ambient_authority())?;
    let mut sources = Vec::new();
    for layer in Layer::ALL {
        let root = Utf8PathBuf::from(layer.dir_name());
        match src.open_dir(root.as_std_path()) {
            Ok(dir) => collect_sources(&dir, &root, &mut sources)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    lint_sources(&sources)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let layer = Layer::infer_from_path(&source.file).ok_or_else(|| {
            ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: "unable to infer module layer from file path".to_owned(),
            }
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(layer.check(&source.file, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// Architectural layer inferred from a file path under `backend/src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

impl Layer {
    const ALL: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    const fn dir_name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn infer_from_path(relative_path: &Utf8Path) -> Option<Self> {
        let first = relative_path.components().next()?.as_str();
        Self::ALL
            .into_iter()
            .find(|layer| layer.dir_name() == first)
    }

    const fn forbidden_modules(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &["inbound", "outbound", "composition"],
            Self::Inbound => &["outbound"],
            Self::Outbound => &["inbound", "composition"],
        }
    }

    const fn forbidden_crates(self) -> &'static [&'static str] {
        match self {
            Self::Domain | Self::Outbound => &FRAMEWORK_CRATES,
            Self::Inbound => &[],
        }
    }

    fn check(self, file: &Utf8Path, parsed: &syn::File) -> Vec<Violation> {
        let mut collector = PathCollector::default();
        collector.visit_file(parsed);

        let layer = self.dir_name();
        let mut messages = BTreeSet::new();
        for segments in &collector.paths {
            if let Some(root) = internal_module_root(segments)
                && self.forbidden_modules().contains(&root)
            {
                messages.insert(format!("{layer} module must not depend on crate::{root}"));
            }
            if let Some(root) = external_crate_root(segments)
                && self.forbidden_crates().contains(&root)
            {
                messages.insert(format!(
                    "{layer} module must not depend on external crate `{root}`"
                ));
            }
        }

        messages
            .into_iter()
            .map(|message| Violation {
                file: file.to_owned(),
                message,
            })
            .collect()
    }
}

fn is_relative_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// Return the first module segment of an in-crate path.
///
/// Bare `domain::..`/`inbound::..`/`outbound::..`/`composition::..` paths
/// count as in-crate so glob re-exports cannot dodge the check.
fn internal_module_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if matches!(first, "domain" | "inbound" | "outbound" | "composition") {
        return Some(first);
    }
    let start = if is_relative_segment(first) {
        segments
            .iter()
            .position(|segment| !is_relative_segment(segment))?
    } else if first == BACKEND_CRATE {
        1
    } else {
        return None;
    };
    segments.get(start).map(String::as_str)
}

fn external_crate_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    (!is_relative_segment(root) && root != BACKEND_CRATE).then_some(root)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.paths.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }
}

fn collect_sources(
    dir: &Dir,
    relative: &Utf8Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in dir.entries()? {
        let entry = entry?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| ArchitectureLintError::NonUtf8Path {
                parent: relative.to_owned(),
            })?;
        let path = relative.join(&name);
        if entry.file_type()?.is_dir() {
            collect_sources(&entry.open_dir()?, &path, sources)?;
        } else if path.extension() == Some("rs") {
            let contents = dir.read_to_string(&name)?;
            sources.push(LintSource::new(path, contents));
        }
    }
    Ok(())
}
