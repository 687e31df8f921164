use crate::domain::model::FALLBACK_FUN_FACT;
use crate::domain::ports::{ConfigProvider, FactSource};
use crate::utils::error::{ClassifierError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";

/// Fetches trivia from a Numbers API compatible service (`GET <base>/<n>`, plain text).
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.fact_api_base(), config.fact_timeout())
    }

    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}", self.base_url, number)
    }

    /// 單次請求，任何非預期結果都回傳錯誤
    pub async fn try_fetch(&self, number: i64) -> Result<String> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting fun fact from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Fact API response status: {}", status);

        if !status.is_success() {
            return Err(ClassifierError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ClassifierError::MalformedFact);
        }

        Ok(body)
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fun_fact(&self, number: i64) -> String {
        match self.try_fetch(number).await {
            Ok(fact) => fact,
            Err(e) => {
                tracing::warn!("⚠️ No fun fact for {}: {}", number, e);
                FALLBACK_FUN_FACT.to_string()
            }
        }
    }
}
