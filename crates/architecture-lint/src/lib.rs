//! Repo-local architecture lint for the demo services.
//!
//! Each service crate is organised in layers that map onto top-level modules. This crate parses
//! the crate sources with `syn` and checks them against a [`Rules`] set:
//!
//! - layer dependency rules: a layer must not reference the sibling layers or external crates
//!   its rule forbids (for example `domain` must not reach `api`)
//! - naming rules: controllers are named `*Controller`, handlers live in `application`
//! - pass-through rules: methods of controllers and handlers contain no branching
//!
//! Code inside `#[cfg(test)]` modules is ignored, whether the module is inline or lives in its
//! own file.

mod rules;
mod visitors;

pub use rules::{LayerRule, NamingRule, Rules};

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rules::resides_in;
use visitors::SourceFacts;

/// A single rule violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to the crate's `src/`.
    pub file: PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug, thiserror::Error)]
pub enum ArchitectureLintError {
    #[error("I/O error while linting architecture: {0}")]
    Io(#[from] io::Error),
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(
        "failed to parse Rust source while linting architecture ({path}): {message}",
        path = .file.display()
    )]
    Parse { file: PathBuf, message: String },
    #[error("{}", render_violations(.0))]
    Violations(Vec<Violation>),
}

fn render_violations(violations: &[Violation]) -> String {
    let mut out = String::from("Architecture rule violations:\n");
    for violation in violations {
        out.push_str(&format!("- {violation}\n"));
    }
    out
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to the crate's `src/`.
    pub file: PathBuf,
    pub contents: String,
}

/// Lint every `*.rs` file under `src_dir`.
pub fn lint_crate_sources(src_dir: &Path, rules: &Rules) -> Result<(), ArchitectureLintError> {
    let sources = collect_lint_sources(src_dir)?;
    lint_sources(&sources, rules)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
///
/// Files that back an out-of-line `#[cfg(test)] mod name;` declaration are skipped along with
/// everything nested below them.
pub fn lint_sources(sources: &[LintSource], rules: &Rules) -> Result<(), ArchitectureLintError> {
    let mut collected = Vec::with_capacity(sources.len());
    for source in sources {
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        let facts = SourceFacts::collect(&parsed, &rules.pass_through_suffixes);
        collected.push((source, facts));
    }

    let test_roots = collected
        .iter()
        .flat_map(|(source, facts)| {
            let dir = module_dir(&source.file);
            facts
                .test_modules
                .iter()
                .map(move |module| dir.join(module))
        })
        .collect::<Vec<_>>();

    let mut violations = Vec::new();
    for (source, facts) in &collected {
        if is_test_module_file(&source.file, &test_roots) {
            continue;
        }
        violations.extend(lint_facts(&source.file, rules, facts));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

fn lint_facts(file: &Path, rules: &Rules, facts: &SourceFacts<'_>) -> Vec<Violation> {
    let mut messages = BTreeSet::new();

    if let Some(layer) = rules.layer_for(file) {
        for segments in &facts.paths {
            if let Some(root) = internal_module_root(segments, rules) {
                if layer.forbidden_modules.contains(&root) {
                    messages.insert(format!(
                        "{} module must not depend on crate::{root}",
                        layer.name
                    ));
                }
            }

            if let Some(root) = external_crate_root(segments, rules) {
                if layer.forbidden_crates.contains(&root) {
                    messages.insert(format!(
                        "{} module must not depend on external crate `{root}`",
                        layer.name
                    ));
                }
            }
        }
    }

    for type_name in &facts.types {
        for rule in &rules.naming {
            match *rule {
                NamingRule::DeclaredUnder { dir, suffix } => {
                    if resides_in(file, dir) && !type_name.ends_with(suffix) {
                        messages.insert(format!(
                            "type `{type_name}` declared under {dir} must be named `*{suffix}`"
                        ));
                    }
                }
                NamingRule::SuffixResidesIn { suffix, dir } => {
                    if type_name.ends_with(suffix) && !resides_in(file, dir) {
                        messages.insert(format!("type `{type_name}` must reside in {dir}"));
                    }
                }
            }
        }
    }

    for branch in &facts.branches {
        messages.insert(format!(
            "`{}::{}` must be a pass-through but contains `{}`",
            branch.owner, branch.method, branch.construct
        ));
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

/// Directory holding the files of the modules that `file` declares.
fn module_dir(file: &Path) -> PathBuf {
    let owns_dir = file
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| matches!(name, "mod.rs" | "lib.rs" | "main.rs"));
    if owns_dir {
        file.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        file.with_extension("")
    }
}

fn is_test_module_file(file: &Path, test_roots: &[PathBuf]) -> bool {
    test_roots
        .iter()
        .any(|root| file == root.with_extension("rs") || file.starts_with(root))
}

fn is_relative_module_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

fn internal_module_root<'s>(segments: &'s [String], rules: &Rules) -> Option<&'s str> {
    let first = segments.first()?.as_str();
    // A lone identifier is a local binding, not a module path.
    if segments.len() > 1 && rules.is_layer(first) {
        return Some(first);
    }
    let start_index = match first {
        "crate" | "self" | "super" => segments
            .iter()
            .position(|segment| !is_relative_module_segment(segment.as_str()))?,
        name if name == rules.crate_name => 1,
        _ => return None,
    };
    segments.get(start_index).map(|segment| segment.as_str())
}

fn external_crate_root<'s>(segments: &'s [String], rules: &Rules) -> Option<&'s str> {
    let root = segments.first()?.as_str();
    if is_relative_module_segment(root) || root == rules.crate_name {
        return None;
    }
    Some(root)
}

fn collect_lint_sources(src_dir: &Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let mut sources = Vec::new();
    for entry in walkdir::WalkDir::new(src_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("rs")
        {
            continue;
        }

        let relative = path
            .strip_prefix(src_dir)
            .map_err(|err| ArchitectureLintError::Parse {
                file: path.to_path_buf(),
                message: err.to_string(),
            })?
            .to_path_buf();
        let contents = fs::read_to_string(path)?;
        sources.push(LintSource {
            file: relative,
            contents,
        });
    }
    Ok(sources)
}

#[cfg(test)]
mod tests;
