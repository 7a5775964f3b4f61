use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Missing key: {key}")]
    MissingKey { key: String },

    #[error("Invalid value for key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Failed to load model from '{path}': {message}")]
    ModelLoad { path: String, message: String },

    #[error("Model inference failed: {message}")]
    Inference { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PredictorError {
    /// 給操作人員的修復建議 (啟動失敗時使用)
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PredictorError::ModelLoad { .. } => {
                "Check that the model file exists and is an ONNX graph taking a [1, 12] float input"
            }
            PredictorError::IoError(_) => "Check the bind address and file permissions",
            PredictorError::ConfigError { .. }
            | PredictorError::ConfigValidationError { .. }
            | PredictorError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags"
            }
            PredictorError::MissingKey { .. }
            | PredictorError::InvalidValue { .. }
            | PredictorError::InvalidPayload(_)
            | PredictorError::Inference { .. } => "Check the request payload and the server logs",
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
