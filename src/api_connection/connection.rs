use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use super::endpoints::{GenerationRequest, RecipeResponse};
use crate::config::GeneratorConfig;
use crate::prompt_builder::GenerationPrompt;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The endpoint could not be reached, refused or aborted the connection, or timed out.
    #[error("network error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// The endpoint answered, but not with a usable recipe.
    #[error("invalid response from recipe endpoint: {message}")]
    Protocol {
        status: Option<StatusCode>,
        message: String,
    },
    /// The client itself is misconfigured, e.g. the endpoint is not an http(s) URL.
    #[error("invalid client configuration: {message}")]
    Configuration { message: String },
}

impl GenerationError {
    pub fn transport(message: impl Into<String>) -> Self {
        GenerationError::Transport {
            message: message.into(),
            source: None,
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        GenerationError::Protocol {
            status: None,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        GenerationError::Configuration {
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Transport { .. })
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            GenerationError::configuration(err.to_string())
        } else if err.is_decode() {
            GenerationError::Protocol {
                status: err.status(),
                message: err.to_string(),
            }
        } else {
            // connect, timeout, request and body failures all mean the call never completed
            GenerationError::Transport {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

/// Anything that can turn a built prompt into recipe text.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn execute(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError>;
}

/// Calls the hosted recipe endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecipeClient {
    client: Client,
    endpoint: Url,
}

impl HttpRecipeClient {
    pub fn new(endpoint: impl AsRef<str>, timeout: Duration) -> Result<Self, GenerationError> {
        let raw = endpoint.as_ref().trim();
        let endpoint = Url::parse(raw).map_err(|e| {
            GenerationError::configuration(format!("invalid endpoint URL '{raw}': {e}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(GenerationError::configuration(format!(
                "endpoint must use http or https, got '{raw}'"
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        Self::new(&config.endpoint, config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl RecipeGenerator for HttpRecipeClient {
    async fn execute(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError> {
        match &prompt.request_payload {
            GenerationRequest::Recipe(request) => debug!(
                diet = ?request.diet,
                prep_time = ?request.prep_time,
                ingredients = ?request.ingredients,
                meal_type = ?request.meal_type,
                cuisine = ?request.cuisine,
                output_language = %request.output_language,
                "sending recipe generation request"
            ),
            GenerationRequest::Translation(request) => debug!(
                language = %request.language,
                "sending translation request"
            ),
        }
        debug!("generation prompt:\n{}", prompt.prompt_text);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&prompt.request_payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(%status, body = %body, "recipe endpoint returned an error status");
            return Err(GenerationError::Protocol {
                status: Some(status),
                message: body,
            });
        }

        let parsed: RecipeResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %body, "failed to decode recipe endpoint response");
            GenerationError::Protocol {
                status: Some(status),
                message: format!("undecodable body: {e}"),
            }
        })?;

        match parsed.recipe {
            Some(recipe) if !recipe.trim().is_empty() => Ok(recipe),
            _ => {
                error!(body = %body, "recipe endpoint response has no recipe text");
                Err(GenerationError::Protocol {
                    status: Some(status),
                    message: "response is missing the `recipe` field".to_string(),
                })
            }
        }
    }
}
