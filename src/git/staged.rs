//! Staged file listing

use tracing::info;

use super::{GitError, VersionControl};

/// List the paths currently staged for commit
///
/// An empty index yields an empty vector, never `[""]`.
pub fn list_staged_files(vcs: &impl VersionControl) -> Result<Vec<String>, GitError> {
    let files = parse_name_list(&vcs.staged_names()?);
    info!(count = files.len(), "listed staged files");
    Ok(files)
}

/// Split `git diff --name-only` output into paths
pub fn parse_name_list(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(|line| line.to_string()).collect()
}
