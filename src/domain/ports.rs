use crate::domain::model::FeatureVector;
use crate::utils::error::Result;

/// A pre-fit regression model that maps a feature vector to a depreciation ratio.
///
/// Implementations are loaded once and shared read-only across requests.
pub trait RegressionModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    fn name(&self) -> &str;
}
