use anyhow::{Context, Result};
use async_openai::types::CreateCompletionRequestArgs;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::generation::options::GenerationOptions;
use tracing::debug;

use crate::{LLMClient, LLMParams, TARGET_LLM_REQUEST};

/// Upper bound on completion length; a six-key JSON object fits comfortably.
pub const MAX_COMPLETION_TOKENS: u32 = 512;

/// Something that turns a rendered prompt into model text.
///
/// Provider failures are errors; whatever text comes back, however malformed, is `Ok`.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

impl CompletionBackend for LLMParams {
    async fn complete(&self, prompt: &str) -> Result<String> {
        generate_text(prompt, self).await
    }
}

/// Send a single prompt to the configured provider and return the raw completion text.
pub async fn generate_text(prompt: &str, params: &LLMParams) -> Result<String> {
    debug!(target: TARGET_LLM_REQUEST, "[{}]: sending LLM request with prompt: {}", params.model, prompt);

    let response_text = match &params.llm_client {
        LLMClient::OpenAI(client) => {
            let request = CreateCompletionRequestArgs::default()
                .model(params.model.as_str())
                .prompt(prompt)
                .temperature(params.temperature)
                .max_tokens(MAX_COMPLETION_TOKENS)
                .build()
                .context("Failed to build OpenAI completion request")?;

            let response = client
                .completions()
                .create(request)
                .await
                .context("OpenAI completion request failed")?;

            response
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.text)
                .unwrap_or_default()
        }
        LLMClient::Ollama(ollama) => {
            let request = GenerationRequest::new(params.model.clone(), prompt.to_string())
                .options(GenerationOptions::default().temperature(params.temperature));

            ollama
                .generate(request)
                .await
                .context("Ollama generation request failed")?
                .response
        }
    };

    debug!(target: TARGET_LLM_REQUEST, "[{}]: LLM response received: {}", params.model, response_text);
    Ok(response_text)
}
