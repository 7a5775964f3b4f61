use crate::core::{FeatureVector, RegressionModel};
use crate::utils::error::{PredictorError, Result};
use std::path::Path;
use tract_onnx::prelude::*;

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// An ONNX regression graph run with tract.
///
/// The graph must take a single `f32 [1, 12]` input and yield the
/// depreciation ratio as the first element of its first output.
pub struct OnnxModel {
    plan: OnnxPlan,
    name: String,
}

impl OnnxModel {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if !path.is_file() {
            return Err(PredictorError::ModelLoad {
                path: shown,
                message: "file not found".to_string(),
            });
        }

        let plan = Self::build_plan(path).map_err(|e| PredictorError::ModelLoad {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("onnx")
            .to_string();

        tracing::info!("✅ ONNX model '{}' loaded from {}", name, shown);
        Ok(Self { plan, name })
    }

    fn build_plan(path: &Path) -> TractResult<OnnxPlan> {
        tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FeatureVector::COLUMNS.len())),
            )?
            .into_optimized()?
            .into_runnable()
    }

    fn run(&self, features: &FeatureVector) -> TractResult<f64> {
        let input = Tensor::from_shape(&[1, FeatureVector::COLUMNS.len()], &features.to_f32()[..])?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        first_ratio(&outputs)
    }
}

/// Reads the ratio from the first element of the first output.
fn first_ratio(outputs: &[TValue]) -> TractResult<f64> {
    let first = outputs
        .first()
        .ok_or_else(|| anyhow::anyhow!("model produced no outputs"))?;
    // 有些匯出器輸出 f64, 統一轉成 f32
    let values = first.cast_to::<f32>()?;
    let ratio = values
        .as_slice::<f32>()?
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("model output tensor is empty"))?;

    Ok(f64::from(ratio))
}

impl RegressionModel for OnnxModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        self.run(features).map_err(|e| PredictorError::Inference {
            message: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
