use crate::Cli;
use crate::llm::Tone;
use crate::llm::ollama::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;

/// Final resolved configuration for snippety.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    /// `None` when model calls are disabled.
    pub model: Option<String>,
    pub tone: Tone,
    pub timeout: Duration,
    pub health_timeout: Duration,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--ollama-url`, `--model`, `--tone`, `--timeout`)
    ///   2. Env vars `SNIPPETY_OLLAMA_URL`, `SNIPPETY_MODEL`, `SNIPPETY_TONE`,
    ///      `SNIPPETY_TIMEOUT` (read by clap into the same fields)
    ///   3. TOML `~/.config/snippety.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();
        Self::resolve(cli, file_cfg)
    }

    fn resolve(cli: &Cli, file_cfg: FileConfig) -> Self {
        let ollama_url = cli
            .ollama_url
            .clone()
            .or(file_cfg.ollama_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = cli
            .model
            .clone()
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let model = if cli.no_model || model.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(model)
        };

        let tone = cli
            .tone
            .clone()
            .or_else(|| file_cfg.tone.as_deref().map(Tone::from))
            .unwrap_or_default();

        let timeout_secs = cli
            .timeout
            .or(file_cfg.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let health_timeout_secs = file_cfg
            .health_timeout_secs
            .unwrap_or(DEFAULT_HEALTH_TIMEOUT_SECS);

        Config {
            ollama_url,
            model,
            tone,
            timeout: Duration::from_secs(timeout_secs),
            health_timeout: Duration::from_secs(health_timeout_secs),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub ollama_url: Option<String>,
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub tone: Option<String>,
    pub timeout_secs: Option<u64>,
    pub health_timeout_secs: Option<u64>,
}

/// Return `~/.config/snippety.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("snippety.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    match toml::from_str::<FileConfig>(&data) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("Ignoring unreadable config {}: {e}", path.display());
            None
        }
    }
}
