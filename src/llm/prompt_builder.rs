use crate::llm::prompts;
use crate::llm::tone::Tone;

/// Single-shot prompt for `/api/generate`: format rules, tone, then the diff.
pub fn commit_message_prompt(diff: &str, tone: &Tone) -> String {
    format!(
        "{intro}\n\n{tone}\n\n{format}\n\nGit diff:\n{diff}",
        intro = prompts::COMMIT_MESSAGE_INTRO,
        tone = tone.instruction(),
        format = prompts::COMMIT_MESSAGE_FORMAT,
        diff = diff
    )
}
