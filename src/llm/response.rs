use log::debug;

use super::CommitMessage;

/// Used when the model gave us no description at all.
pub const DEFAULT_DESCRIPTION: &str = "Code changes as shown in the git diff.";

const TITLE_LABEL: &str = "TITLE:";
const DESCRIPTION_LABEL: &str = "DESCRIPTION:";

/// Turn the raw model text into a title and description.
///
/// `TITLE:` / `DESCRIPTION:` labels are matched case-sensitively at the start
/// of a trimmed line; a later label overwrites an earlier one. When neither
/// label is found the first line becomes the title and the rest, joined with
/// spaces, the description.
pub fn parse_commit_message(raw: &str) -> CommitMessage {
    log::trace!("Raw LLM response: {raw:?}");

    let lines: Vec<&str> = raw.trim().split('\n').collect();

    let mut title = String::new();
    let mut description = String::new();

    for line in &lines {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(TITLE_LABEL) {
            title = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(DESCRIPTION_LABEL) {
            description = rest.trim().to_string();
        }
    }

    if title.is_empty() && description.is_empty() {
        if let Some(first) = lines.first() {
            title = first.trim().to_string();
        }
        if lines.len() > 1 {
            description = lines[1..].join(" ").trim().to_string();
        }
    }

    if description.is_empty() {
        description = DEFAULT_DESCRIPTION.to_string();
    }

    debug!("Parsed title: {title:?}");
    debug!("Parsed description: {description:?}");

    CommitMessage { title, description }
}
