use std::fmt;

/// Writing style requested for the generated message.
///
/// Known tones are matched exactly (case-sensitive); anything else,
/// including the empty string, is carried through as [`Tone::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Fun,
    Pirate,
    Haiku,
    Serious,
    Custom(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Professional => "professional",
            Tone::Fun => "fun",
            Tone::Pirate => "pirate",
            Tone::Haiku => "haiku",
            Tone::Serious => "serious",
            Tone::Custom(name) => name.as_str(),
        }
    }

    /// Instruction fragment injected into the generation prompt.
    pub fn instruction(&self) -> String {
        match self {
            Tone::Professional => {
                "TONE INSTRUCTION: Write BOTH the title and description using a professional, clear tone."
                    .to_string()
            }
            Tone::Fun => {
                "TONE INSTRUCTION: Write BOTH the title and description using a fun, playful tone with emojis and creative language while keeping it professional."
                    .to_string()
            }
            Tone::Pirate => {
                "TONE INSTRUCTION: Write BOTH the title and description in pirate speak with nautical terminology (e.g., 'Hoist', 'Plunder', 'Navigate', 'Arrr', 'matey')."
                    .to_string()
            }
            Tone::Haiku => {
                "TONE INSTRUCTION: Write the TITLE as a single-line haiku with 5-7-5 syllable structure, separating each line with ' / '. Write the description in a poetic, zen-like tone."
                    .to_string()
            }
            Tone::Serious => {
                "TONE INSTRUCTION: Write BOTH the title and description using a very serious, formal tone with technical precision and no casual language."
                    .to_string()
            }
            Tone::Custom(tone) => custom_instruction(tone),
        }
    }
}

fn custom_instruction(tone: &str) -> String {
    format!(
        r#"TONE INSTRUCTION: Write BOTH the title and description using a {tone} tone.

Examples of how to apply this tone:
- If the tone is "like a joke" or "funny": Use humor, puns, wordplay, or amusing language while keeping it understandable
- If the tone is "dramatic": Use intense, theatrical language with strong emotions and vivid descriptions
- If the tone is "casual": Use relaxed, informal language like you're talking to a friend
- If the tone is "poetic": Use metaphors, rhythm, and beautiful imagery
- If the tone is "sarcastic": Use irony and subtle mockery while still being informative
- If the tone is a specific style (e.g., "like Shakespeare"): Mimic the vocabulary, sentence structure, and mannerisms of that style

Be creative and fully commit to this {tone} tone in BOTH the title and description. Don't just mention the tone - actually write in that style."#
    )
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        match value {
            "professional" => Tone::Professional,
            "fun" => Tone::Fun,
            "pirate" => Tone::Pirate,
            "haiku" => Tone::Haiku,
            "serious" => Tone::Serious,
            other => Tone::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
