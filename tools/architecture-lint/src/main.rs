//! Command-line entry point that lints `backend/src` layer boundaries.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;

const REPORTED_FAILURE: u8 = 1;
/// Exit status when the lint fails and the reason cannot be written to stderr.
const UNREPORTED_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let outcome = workspace_root()
        .map_err(|err| err.to_string())
        .and_then(|root| {
            architecture_lint::lint_backend_sources(&root.join("backend"))
                .map_err(|err| err.to_string())
        });
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => ExitCode::from(report_failure(&mut io::stderr().lock(), &message)),
    }
}

fn report_failure(out: &mut impl Write, message: &str) -> u8 {
    match writeln!(out, "{message}") {
        Ok(()) => REPORTED_FAILURE,
        Err(_) => UNREPORTED_FAILURE,
    }
}

#[derive(Debug, Error)]
#[error("unable to locate the workspace root (a directory whose Cargo.toml declares [workspace])")]
struct WorkspaceRootError;

/// Resolve the workspace root from the environment, the working directory,
/// or this crate's manifest directory, in that order.
fn workspace_root() -> Result<Utf8PathBuf, WorkspaceRootError> {
    let candidates = [
        std::env::var("CARGO_WORKSPACE_DIR").ok().map(Utf8PathBuf::from),
        std::env::current_dir()
            .ok()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok()),
        Some(Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];
    candidates
        .iter()
        .flatten()
        .find_map(|start| find_workspace_root(start))
        .ok_or(WorkspaceRootError)
}

fn find_workspace_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(dir))
        .map(Utf8Path::to_path_buf)
}

fn declares_workspace(dir: &Utf8Path) -> bool {
    Dir::open_ambient_dir(dir, ambient_authority())
        .and_then(|handle| handle.read_to_string("Cargo.toml"))
        .is_ok_and(|contents| contents.lines().any(|line| line.trim() == "[workspace]"))
}
