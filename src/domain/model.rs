use serde::{Deserialize, Serialize};

/// 查詢參數缺席時回傳的佔位值
pub const UNKNOWN_NUMBER: &str = "unknown";

/// 取不到趣味知識時的固定字串
pub const FALLBACK_FUN_FACT: &str = "No fun fact available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Odd,
    Even,
    Prime,
    Perfect,
    Armstrong,
}

/// Raw `number` query parameter exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassificationRequest {
    pub number: Option<String>,
}

impl ClassificationRequest {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
        }
    }

    pub fn missing() -> Self {
        Self { number: None }
    }

    /// Builds a request from decoded query pairs. When `number` repeats,
    /// the last occurrence wins.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let number = pairs
            .into_iter()
            .filter(|(key, _)| key == "number")
            .map(|(_, value)| value)
            .last();

        Self { number }
    }

    /// The value echoed back on rejection.
    pub fn raw(&self) -> &str {
        self.number.as_deref().unwrap_or(UNKNOWN_NUMBER)
    }

    /// Parses the raw value as a base-10 `i64`.
    ///
    /// Accepts surrounding whitespace, an optional sign and ASCII digits.
    /// Anything else (digit separators like `1_000`, non-ASCII digits,
    /// values outside the `i64` range) is rejected with the raw input
    /// untouched.
    pub fn parse(&self) -> Result<i64, InvalidNumber> {
        let raw = self
            .number
            .as_deref()
            .ok_or_else(|| InvalidNumber::new(UNKNOWN_NUMBER))?;

        raw.trim()
            .parse::<i64>()
            .map_err(|_| InvalidNumber::new(raw))
    }
}

/// 400 回應主體
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidNumber {
    pub number: String,
    pub error: bool,
}

impl InvalidNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}
