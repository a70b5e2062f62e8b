use anyhow::Result;
use log::debug;

use crate::config::Config;
use crate::llm::LlmClient;
use crate::llm::ollama::OllamaClient;
use crate::pipeline::MessagePipeline;

/// Build the LLM client based on CLI + config. `None` means model calls are off.
pub fn build_llm_client(cfg: &Config) -> Result<Option<Box<dyn LlmClient>>> {
    let Some(model) = cfg.model.as_deref() else {
        debug!("Model calls disabled, using diff analysis only");
        return Ok(None);
    };

    debug!("Using OllamaClient at {} with model: {model}", cfg.ollama_url);

    let client = OllamaClient::new(&cfg.ollama_url, model, cfg.timeout, cfg.health_timeout)?;
    Ok(Some(Box::new(client)))
}

pub fn build_pipeline(cfg: &Config) -> Result<MessagePipeline> {
    Ok(MessagePipeline::new(build_llm_client(cfg)?, cfg.tone.clone()))
}
