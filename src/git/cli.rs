//! git command-line backend
//!
//! Discovers the repository with libgit2, then shells out to the `git`
//! binary so that hooks, signing and user config apply to the commit.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use git2::Repository;
use tracing::{debug, warn};

use super::{GitError, VersionControl};

/// Runs git commands in a repository work tree
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Find the repository containing `path`
    ///
    /// Fails if `path` is outside any repository or the repository is bare.
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(|source| GitError::NotARepo {
            path: path.to_path_buf(),
            source,
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| GitError::BareRepo {
                path: repo.path().to_path_buf(),
            })?
            .to_path_buf();

        debug!(workdir = %workdir.display(), "discovered repository");
        Ok(Self { workdir })
    }

    /// Work tree root
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        let command = format!("git {}", args.first().copied().unwrap_or_default());
        debug!(%command, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            warn!(%command, status = %output.status, "git failed");
            return Err(GitError::Failed {
                command,
                status: output.status.to_string(),
                output: failure_output(&output),
            });
        }

        Ok(output)
    }
}

/// git commit reports refusals like "nothing to commit" on stdout
fn failure_output(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        stderr.into_owned()
    }
}

impl VersionControl for GitCli {
    fn staged_names(&self) -> Result<String, GitError> {
        let output = self.run(&["diff", "--name-only", "--cached"])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }
}
