//! Git operations module
//!
//! Everything that talks to git goes through the [`VersionControl`] trait:
//! - Listing staged paths
//! - Creating the commit
//!
//! The production implementation runs the `git` binary in the work tree
//! of a discovered repository.

mod cli;
mod commit;
mod staged;

use std::path::PathBuf;

use thiserror::Error;

pub use cli::GitCli;
pub use commit::commit;
pub use staged::list_staged_files;

/// Failure of the external git tool
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside a git repository
    #[error("not a git repository: {path}")]
    NotARepo {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// The repository has no work tree to commit from
    #[error("bare repository not supported: {path}")]
    BareRepo { path: PathBuf },

    /// git could not be started at all
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran and exited non-zero
    ///
    /// `output` is git's stderr, or its stdout when stderr was empty.
    #[error("`{command}` failed ({status}){}", output_suffix(.output))]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

fn output_suffix(output: &str) -> String {
    let output = output.trim();
    if output.is_empty() {
        String::new()
    } else {
        format!(": {}", output)
    }
}

/// The two operations needed from the version-control system
pub trait VersionControl {
    /// Raw newline-separated list of staged paths
    fn staged_names(&self) -> Result<String, GitError>;

    /// Create a commit from the index with `message` as its message
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn staged_names(&self) -> Result<String, GitError> {
        (**self).staged_names()
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        (**self).commit(message)
    }
}
