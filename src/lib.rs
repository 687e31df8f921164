pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::NumbersApiClient;
pub use config::{ServerConfig, TomlConfig};
pub use crate::core::{classifier, service::ClassifyService};
pub use domain::model::{ClassificationRequest, ClassificationResult, InvalidNumber, Property};
pub use server::{create_router, AppState};
pub use utils::error::{ClassifierError, Result};
