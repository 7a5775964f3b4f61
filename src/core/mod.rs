pub mod encoder;
pub mod inference;

pub use crate::domain::model::{FeatureVector, PredictionRequest, PredictionResponse};
pub use crate::domain::ports::RegressionModel;
pub use crate::utils::error::Result;
