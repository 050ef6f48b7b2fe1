//! CLI entry point for the repo-local architecture lint.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use architecture_lint::{lint_crate_sources, Rules};

const LINT_TARGETS: [&str; 2] = ["crates/patient-service/src", "crates/products/src"];

fn main() -> ExitCode {
    let root = match repo_root() {
        Ok(root) => root,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let targets = LINT_TARGETS.into_iter().zip([Rules::patient_service(), Rules::products()]);

    let mut status = ExitCode::SUCCESS;
    for (src, rules) in targets {
        if let Err(err) = lint_crate_sources(&root.join(src), &rules) {
            eprintln!("{src}: {err}");
            status = ExitCode::FAILURE;
        }
    }
    status
}

#[derive(Debug, thiserror::Error)]
#[error("unable to locate the demo workspace root (a Cargo.toml declaring [workspace])")]
struct RepoRootError;

/// Tries `CARGO_WORKSPACE_DIR`, then the working directory, then this crate's manifest dir.
fn repo_root() -> Result<PathBuf, RepoRootError> {
    [
        std::env::var_os("CARGO_WORKSPACE_DIR").map(PathBuf::from),
        std::env::current_dir().ok(),
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ]
    .into_iter()
    .flatten()
    .find_map(|start| find_workspace_root(&start))
    .ok_or(RepoRootError)
}

fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(&dir.join("Cargo.toml")))
        .map(Path::to_path_buf)
}

fn declares_workspace(manifest: &Path) -> bool {
    fs::read_to_string(manifest).is_ok_and(|contents| {
        contents
            .lines()
            .any(|line| line.trim() == "[workspace]")
    })
}
