pub mod ollama;
mod prompt_builder;
mod prompts;
pub mod response;
pub mod tone;

use crate::error::BackendError;
pub use prompt_builder::commit_message_prompt;
pub use response::parse_commit_message;
pub use tone::Tone;

/// A commit title plus body, as handed to `git commit`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitMessage {
    pub title: String,
    pub description: String,
}

impl CommitMessage {
    /// Prepend a ticket prefix such as `"BP-42: "` to the title.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.title = format!("{prefix}{}", self.title);
        }
        self
    }
}

/// Trait for talking to a language-model backend.
pub trait LlmClient: Send + Sync {
    /// Human-readable backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Cheap reachability check, done once before generating.
    fn health_check(&self) -> Result<(), BackendError>;

    /// Ask the model for a commit message describing `diff` in the given tone.
    fn generate_commit_message(&self, diff: &str, tone: &Tone) -> Result<CommitMessage, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_prepended_to_title_only() {
        let msg = CommitMessage {
            title: "Add utils.go".into(),
            description: "body".into(),
        }
        .with_prefix("BP-42: ");
        assert_eq!(msg.title, "BP-42: Add utils.go");
        assert_eq!(msg.description, "body");
    }

    #[test]
    fn empty_prefix_leaves_title_alone() {
        let msg = CommitMessage {
            title: "Update main.go".into(),
            description: String::new(),
        }
        .with_prefix("");
        assert_eq!(msg.title, "Update main.go");
    }
}
