pub mod classifier;
pub mod service;

pub use crate::domain::model::{ClassificationRequest, ClassificationResult, Property};
pub use crate::domain::ports::{ConfigProvider, FactSource};
pub use crate::utils::error::Result;
