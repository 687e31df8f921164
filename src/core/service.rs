use crate::core::classifier::{self, NumberProfile};
use crate::domain::model::{ClassificationRequest, ClassificationResult};
use crate::domain::ports::FactSource;
use crate::utils::error::Result;
use std::sync::Arc;

/// Validates, classifies, then enriches with a fun fact.
pub struct ClassifyService {
    facts: Arc<dyn FactSource>,
}

impl ClassifyService {
    pub fn new(facts: Arc<dyn FactSource>) -> Self {
        Self { facts }
    }

    pub async fn classify(&self, request: ClassificationRequest) -> Result<ClassificationResult> {
        // Validating
        let number = request.parse().inspect_err(|_| {
            tracing::debug!("Rejected classification input: {:?}", request.raw());
        })?;

        // Classifying：大數的完全數檢查是 O(n)，放到 blocking pool 避免卡住其他請求。
        // 用戶端斷線也不會中止這個 task；極大的輸入會一直佔住 blocking 執行緒（預設上限 512）
        let profile = tokio::task::spawn_blocking(move || classifier::classify(number)).await?;
        tracing::debug!("Classified {}: {:?}", number, profile);

        // Fetching
        let fun_fact = self.facts.fun_fact(number).await;

        Ok(assemble(profile, fun_fact))
    }
}

fn assemble(profile: NumberProfile, fun_fact: String) -> ClassificationResult {
    ClassificationResult {
        number: profile.number,
        is_prime: profile.is_prime,
        is_perfect: profile.is_perfect,
        properties: profile.properties(),
        digit_sum: profile.digit_sum,
        fun_fact,
    }
}
