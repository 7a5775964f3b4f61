use crate::core::encoder::{FUEL_TYPE, OWNER, SELLER_TYPE, SERVICE_HISTORY, TRANSMISSION, YES_NO};
use crate::core::{FeatureVector, PredictionRequest, PredictionResponse, RegressionModel};
use crate::utils::error::Result;

/// Builds the model input in the fixed column order.
pub fn build_features(request: &PredictionRequest) -> FeatureVector {
    FeatureVector([
        request.year,
        request.km_driven,
        request.present_price,
        f64::from(FUEL_TYPE.encode(&request.fuel_type)),
        f64::from(SELLER_TYPE.encode(&request.seller_type)),
        f64::from(TRANSMISSION.encode(&request.transmission)),
        f64::from(OWNER.encode(&request.owner)),
        request.service_cost,
        f64::from(YES_NO.encode(&request.modifications)),
        f64::from(YES_NO.encode(&request.accidents)),
        f64::from(YES_NO.encode(&request.insurance_valid)),
        f64::from(SERVICE_HISTORY.encode(&request.service_history)),
    ])
}

/// Rounds to `decimals` places on the exact decimal expansion, ties to even.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

pub struct InferenceService<M: RegressionModel> {
    model: M,
}

impl<M: RegressionModel> InferenceService<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let features = build_features(request);
        tracing::debug!("✅ Input features {:?}: {:?}", FeatureVector::COLUMNS, features.values());

        let ratio = self.model.predict(&features)?;
        // 價格用未四捨五入的比率計算
        let price = request.present_price * ratio;

        Ok(PredictionResponse {
            predicted_price_lakhs: round_to(price, 2),
            depreciation_ratio: round_to(ratio, 3),
        })
    }
}
