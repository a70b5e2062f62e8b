//! snippety: commit messages from staged git diffs, via a local Ollama model
//! with an offline heuristic fallback.

pub mod cli_args;
pub mod config;
pub mod error;
pub mod git;
pub mod heuristic;
pub mod llm;
pub mod logging;
pub mod pipeline;
pub mod setup;
pub mod ticket;

pub use cli_args::Cli;
pub use error::{BackendError, GitError};
pub use llm::{CommitMessage, LlmClient, Tone};
pub use pipeline::{MessagePipeline, PipelineOutcome, generate_message};
