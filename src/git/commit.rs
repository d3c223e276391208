//! Commit creation

use tracing::info;

use super::{GitError, VersionControl};

/// Build the final message, `"{label}: {subject}"`
pub fn format_commit_message(label: &str, subject: &str) -> String {
    format!("{}: {}", label, subject)
}

/// Commit the index with a message built from `label` and `subject`
pub fn commit(vcs: &impl VersionControl, label: &str, subject: &str) -> Result<(), GitError> {
    let message = format_commit_message(label, subject);
    info!(%message, "creating commit");
    vcs.commit(&message)
}
