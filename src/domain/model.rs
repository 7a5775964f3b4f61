use crate::utils::error::{PredictorError, Result};
use serde::{Deserialize, Serialize};

/// One prediction call as sent by the client. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub year: f64,
    pub km_driven: f64,
    pub present_price: f64,
    pub fuel_type: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
    pub service_cost: f64,
    pub modifications: String,
    pub accidents: String,
    pub insurance_valid: String,
    pub service_history: String,
}

impl PredictionRequest {
    /// 必填欄位, 依檢查順序排列
    pub const REQUIRED_KEYS: [&'static str; 12] = [
        "year",
        "km_driven",
        "present_price",
        "fuel_type",
        "seller_type",
        "transmission",
        "owner",
        "service_cost",
        "modifications",
        "accidents",
        "insurance_valid",
        "service_history",
    ];

    /// Parses a raw request body.
    ///
    /// Key presence is checked first, in [`Self::REQUIRED_KEYS`] order, so the
    /// error always names the first missing key. Type checks come after.
    pub fn from_json_bytes(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let object = match value {
            serde_json::Value::Object(object) => object,
            other => {
                return Err(PredictorError::InvalidValue {
                    key: "body".to_string(),
                    reason: format!("expected a JSON object, got {}", json_kind(&other)),
                })
            }
        };

        if let Some(missing) = Self::REQUIRED_KEYS
            .iter()
            .find(|key| !object.contains_key(**key))
        {
            return Err(PredictorError::MissingKey {
                key: missing.to_string(),
            });
        }

        Ok(Self {
            year: number_field(&object, "year")?,
            km_driven: number_field(&object, "km_driven")?,
            present_price: number_field(&object, "present_price")?,
            fuel_type: string_field(&object, "fuel_type")?,
            seller_type: string_field(&object, "seller_type")?,
            transmission: string_field(&object, "transmission")?,
            owner: string_field(&object, "owner")?,
            service_cost: number_field(&object, "service_cost")?,
            modifications: string_field(&object, "modifications")?,
            accidents: string_field(&object, "accidents")?,
            insurance_valid: string_field(&object, "insurance_valid")?,
            service_history: string_field(&object, "service_history")?,
        })
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn number_field(object: &serde_json::Map<String, serde_json::Value>, key: &str) -> Result<f64> {
    let value = object.get(key).ok_or_else(|| PredictorError::MissingKey {
        key: key.to_string(),
    })?;

    value.as_f64().ok_or_else(|| PredictorError::InvalidValue {
        key: key.to_string(),
        reason: format!("expected a number, got {}", json_kind(value)),
    })
}

fn string_field(object: &serde_json::Map<String, serde_json::Value>, key: &str) -> Result<String> {
    let value = object.get(key).ok_or_else(|| PredictorError::MissingKey {
        key: key.to_string(),
    })?;

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| PredictorError::InvalidValue {
            key: key.to_string(),
            reason: format!("expected a string, got {}", json_kind(value)),
        })
}

/// Model input, one value per column of [`FeatureVector::COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; 12]);

impl FeatureVector {
    pub const COLUMNS: [&'static str; 12] = PredictionRequest::REQUIRED_KEYS;

    pub fn values(&self) -> &[f64; 12] {
        &self.0
    }

    pub fn to_f32(&self) -> [f32; 12] {
        self.0.map(|v| v as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price_lakhs: f64,
    pub depreciation_ratio: f64,
}
