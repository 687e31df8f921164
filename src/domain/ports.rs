use async_trait::async_trait;
use std::time::Duration;

/// Source of trivia text for a number.
///
/// Implementations never fail: any upstream problem is folded into a
/// fallback string before returning.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fun_fact(&self, number: i64) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn fact_api_base(&self) -> &str;
    fn fact_timeout(&self) -> Duration;
}
