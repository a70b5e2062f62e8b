//! Error types for the git collaborator and the generation backend.

use std::time::Duration;
use thiserror::Error;

/// Failures of the git commands we shell out to. These end the run.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to get staged diff: {0}")]
    DiffUnavailable(String),

    #[error("failed to get current branch: {0}")]
    BranchUnavailable(String),

    #[error("git add -A failed\nOutput: {output}")]
    StageFailed { output: String },

    #[error("git commit failed\nOutput: {output}")]
    CommitFailed { output: String },

    #[error("{command} failed\nOutput: {output}")]
    PushFailed { command: String, output: String },
}

/// Failures talking to the language-model server. The pipeline recovers
/// from all of these by falling back to the heuristic message.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to connect to {backend} at {url}: {reason}")]
    Unavailable {
        backend: &'static str,
        url: String,
        reason: String,
    },

    #[error("{backend} request to {url} failed with status: {status}, response: {body}")]
    Status {
        backend: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{backend} request to {url} timed out after {}s", .timeout.as_secs())]
    Timeout {
        backend: &'static str,
        url: String,
        timeout: Duration,
    },

    #[error("failed to make request to {backend} at {url}: {reason}")]
    Transport {
        backend: &'static str,
        url: String,
        reason: String,
    },

    #[error("failed to encode {backend} request: {reason}")]
    Encode {
        backend: &'static str,
        reason: String,
    },

    #[error("failed to decode {backend} response: {reason}")]
    Decode {
        backend: &'static str,
        reason: String,
    },
}
