//! Decides which commit message wins: the model's, or the heuristic one.
//!
//! The flow is linear with a single attempt against the backend:
//! health check, then generate; any failure degrades to [`heuristic::analyze`].
//! The ticket prefix is applied once, after a message has been chosen.

use log::{debug, warn};
use std::fmt;

use crate::error::BackendError;
use crate::heuristic::{self, HEURISTIC_DESCRIPTION};
use crate::llm::{CommitMessage, LlmClient, Tone};
use crate::ticket::extract_ticket_prefix;

/// Why the heuristic message was used instead of the model's.
#[derive(Debug)]
pub enum FallbackReason {
    /// Model calls were switched off by the user.
    Disabled,
    /// The health check failed.
    Unavailable(BackendError),
    /// The backend was reachable but generation failed.
    Failed(BackendError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Disabled => write!(f, "model calls disabled"),
            FallbackReason::Unavailable(e) => write!(f, "health check failed: {e}"),
            FallbackReason::Failed(e) => write!(f, "error generating commit message: {e}"),
        }
    }
}

#[derive(Debug)]
pub enum MessageSource {
    Backend,
    Heuristic(FallbackReason),
}

#[derive(Debug)]
pub struct GeneratedMessage {
    pub message: CommitMessage,
    pub source: MessageSource,
}

#[derive(Debug)]
pub enum PipelineOutcome {
    /// Nothing staged; the caller should stop quietly.
    NoChanges,
    Generated(GeneratedMessage),
}

pub struct MessagePipeline {
    client: Option<Box<dyn LlmClient>>,
    tone: Tone,
}

impl MessagePipeline {
    /// `client: None` skips the backend entirely.
    pub fn new(client: Option<Box<dyn LlmClient>>, tone: Tone) -> Self {
        Self { client, tone }
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }

    pub fn generate(&self, diff: &str, branch: &str) -> PipelineOutcome {
        if diff.trim().is_empty() {
            return PipelineOutcome::NoChanges;
        }

        let ticket_prefix = extract_ticket_prefix(branch);
        debug!("Ticket prefix for branch {branch:?}: {ticket_prefix:?}");

        let (message, source) = match self.client.as_deref() {
            Some(client) => attempt_backend(client, diff, &self.tone),
            None => (heuristic_message(diff), MessageSource::Heuristic(FallbackReason::Disabled)),
        };

        PipelineOutcome::Generated(GeneratedMessage {
            message: message.with_prefix(&ticket_prefix),
            source,
        })
    }
}

fn attempt_backend(client: &dyn LlmClient, diff: &str, tone: &Tone) -> (CommitMessage, MessageSource) {
    if let Err(e) = client.health_check() {
        warn!("{} health check failed: {e}", client.name());
        return (
            heuristic_message(diff),
            MessageSource::Heuristic(FallbackReason::Unavailable(e)),
        );
    }

    debug!("Generating commit message with {} (tone: {tone})", client.name());

    match client.generate_commit_message(diff, tone) {
        Ok(message) => (message, MessageSource::Backend),
        Err(e) => {
            warn!("Error generating commit message with {}: {e}", client.name());
            (
                heuristic_message(diff),
                MessageSource::Heuristic(FallbackReason::Failed(e)),
            )
        }
    }
}

fn heuristic_message(diff: &str) -> CommitMessage {
    CommitMessage {
        title: heuristic::analyze(diff),
        description: HEURISTIC_DESCRIPTION.to_string(),
    }
}

/// One-shot helper for callers that only want the final message.
///
/// An empty diff yields the generic heuristic message.
pub fn generate_message(
    diff: &str,
    branch: &str,
    tone: Tone,
    client: Option<Box<dyn LlmClient>>,
) -> CommitMessage {
    match MessagePipeline::new(client, tone).generate(diff, branch) {
        PipelineOutcome::Generated(generated) => generated.message,
        PipelineOutcome::NoChanges => heuristic_message(diff).with_prefix(&extract_ticket_prefix(branch)),
    }
}
