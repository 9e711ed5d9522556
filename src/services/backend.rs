// src/services/backend.rs
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    config::Config,
    error::{ChatError, Result},
    message::{ChatRequest, ChatResponse},
};

/// Something that answers a chat message with the raw reply text.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, message: &str) -> Result<String>;
}

/// The remote `/chat` endpoint.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.chat_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn ask(&self, message: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, "posting chat message");

        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        // Any non-2xx is a failure, whatever the body says.
        if !response.status().is_success() {
            return Err(ChatError::Status(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.into_reply()
    }
}
