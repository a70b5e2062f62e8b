use clap::{ArgAction, ArgGroup, Parser};

use crate::llm::Tone;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "snippety",
    version,
    about = "Generate commit messages from your staged git diff using Ollama",
    long_about = "Analyzes your staged git changes and generates a commit title and description \
                  with a local Ollama model. Falls back to a simple diff analysis when the model \
                  is unreachable."
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Ollama server URL (default http://localhost:11434)
    #[arg(long, env = "SNIPPETY_OLLAMA_URL")]
    pub ollama_url: Option<String>,

    /// Ollama model to use for generation (default llama3.2). If 'none', acts like --no-model.
    #[arg(long, env = "SNIPPETY_MODEL")]
    pub model: Option<String>,

    /// Skip the model entirely and use the built-in diff analysis
    #[arg(long)]
    pub no_model: bool,

    /// Tone for commit messages: professional, fun, pirate, haiku, serious, or any custom style
    #[arg(long, env = "SNIPPETY_TONE")]
    pub tone: Option<Tone>,

    /// Seconds to wait for the model before falling back
    #[arg(long, env = "SNIPPETY_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Show the staged diff before generating
    #[arg(long)]
    pub show_diff: bool,

    /// Ask for confirmation, then commit and push
    #[arg(short, long)]
    pub interactive: bool,

    /// Stage all changes with 'git add -A' before generating
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub auto_stage: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Debug mode: log prompts and raw responses
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        if self.debug { 3 } else { self.verbose }
    }
}
