pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::OnnxModel;
pub use app::Server;
pub use config::ServiceConfig;
pub use crate::core::inference::InferenceService;
pub use crate::core::{FeatureVector, PredictionRequest, PredictionResponse, RegressionModel};
pub use utils::error::{PredictorError, Result};
