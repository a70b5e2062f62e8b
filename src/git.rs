use std::process::{Command as GitCommand, Output};

use crate::error::GitError;

const NO_UPSTREAM_MARKER: &str = "has no upstream branch";

fn run_git(args: &[&str]) -> Result<Output, GitError> {
    log::debug!("Running git {}", args.join(" "));
    GitCommand::new("git")
        .args(args)
        .output()
        .map_err(|source| GitError::Spawn {
            args: args.join(" "),
            source,
        })
}

/// Stdout and stderr together, the way a user would have seen them.
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text.trim_end().to_string()
}

/// Get the full staged diff.
pub fn staged_diff() -> Result<String, GitError> {
    let output = run_git(&["diff", "--staged"])?;
    if !output.status.success() {
        return Err(GitError::DiffUnavailable(combined_output(&output)));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the current branch name.
pub fn current_branch() -> Result<String, GitError> {
    let output = run_git(&["branch", "--show-current"])?;
    if !output.status.success() {
        return Err(GitError::BranchUnavailable(combined_output(&output)));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Stage all new, modified, and deleted files
pub fn stage_all() -> Result<(), GitError> {
    let output = run_git(&["add", "-A"])?;
    if !output.status.success() {
        return Err(GitError::StageFailed {
            output: combined_output(&output),
        });
    }
    Ok(())
}

/// Commit with the title as subject and the description as body.
pub fn create_commit(title: &str, description: &str) -> Result<(), GitError> {
    let output = run_git(&["commit", "-m", title, "-m", description])?;
    if !output.status.success() {
        return Err(GitError::CommitFailed {
            output: combined_output(&output),
        });
    }
    Ok(())
}

/// Push the current branch, setting the upstream on first push.
pub fn push() -> Result<(), GitError> {
    let output = run_git(&["push"])?;
    if output.status.success() {
        return Ok(());
    }

    let branch = upstream_retry_branch(combined_output(&output), current_branch)?;
    log::info!("No upstream for {branch}, retrying with --set-upstream");

    let output = run_git(&["push", "--set-upstream", "origin", &branch])?;
    if !output.status.success() {
        return Err(GitError::PushFailed {
            command: "git push --set-upstream".to_string(),
            output: combined_output(&output),
        });
    }
    Ok(())
}

fn needs_upstream(push_output: &str) -> bool {
    push_output.contains(NO_UPSTREAM_MARKER)
}

/// Branch to retry the push on, or the original failure when no retry applies.
///
/// A detached HEAD has no branch name, so there is nothing to set upstream for.
fn upstream_retry_branch(
    push_output: String,
    branch: impl FnOnce() -> Result<String, GitError>,
) -> Result<String, GitError> {
    let failed = |output| GitError::PushFailed {
        command: "git push".to_string(),
        output,
    };

    if !needs_upstream(&push_output) {
        return Err(failed(push_output));
    }
    let branch = branch()?;
    if branch.is_empty() {
        return Err(failed(push_output));
    }
    Ok(branch)
}
