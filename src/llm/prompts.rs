pub const COMMIT_MESSAGE_INTRO: &str =
    "Based on the git diff below, generate a commit message with both a title and description.";

pub const COMMIT_MESSAGE_FORMAT: &str = r#"Respond with exactly this format:
TITLE: [short commit title]
DESCRIPTION: [detailed description]

Title requirements:
- Present tense (Add, Fix, Update, Remove)
- Under 50 characters
- Conventional commit format

Description requirements:
- 2-3 sentences explaining what was changed and why
- Include technical details about the implementation
- Mention any test cases or validation added
- No prefix needed just the description itself"#;
