use std::path::Path;

use candle_core::{D, DType, Device, Module, Tensor};
use candle_nn::{Linear, VarBuilder};
use serde::{Deserialize, Serialize};

use mindcheck_core::models::features::{FEATURE_COUNT, FeatureVector};

use crate::Classifier;
use crate::error::InferenceError;
use crate::labels::LabelEncoder;

/// Layer widths of the network.
pub const CONFIG_FILE: &str = "model.json";
/// `dense_{i}.weight` / `dense_{i}.bias` tensors.
pub const WEIGHTS_FILE: &str = "model.safetensors";
/// Label decoder.
pub const LABELS_FILE: &str = "labels.json";

/// Shape of the exported network: `[28, hidden..., n_classes]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub layers: Vec<usize>,
}

impl ModelConfig {
    fn check(&self, classes: usize) -> Result<(), InferenceError> {
        match self.layers.as_slice() {
            [] | [_] => Err(InferenceError::Load(
                "model needs at least an input and an output layer".to_string(),
            )),
            [input, ..] if *input != FEATURE_COUNT => Err(InferenceError::Load(format!(
                "model expects {input} inputs, questionnaire has {FEATURE_COUNT}"
            ))),
            [.., output] if *output != classes => Err(InferenceError::Load(format!(
                "model has {output} outputs but label set has {classes} classes"
            ))),
            _ => Ok(()),
        }
    }
}

/// Feed-forward classifier evaluated on the CPU.
///
/// ReLU between layers, no activation on the output; the label is the argmax
/// of the final logits.
pub struct DenseClassifier {
    layers: Vec<Linear>,
    labels: LabelEncoder,
    device: Device,
}

impl DenseClassifier {
    /// Load `model.json`, `model.safetensors` and `labels.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, InferenceError> {
        let config: ModelConfig = serde_json::from_slice(&std::fs::read(dir.join(CONFIG_FILE))?)?;
        let labels = LabelEncoder::load(&dir.join(LABELS_FILE))?;
        config.check(labels.len())?;

        let device = Device::Cpu;
        let tensors = candle_core::safetensors::load(dir.join(WEIGHTS_FILE), &device)?;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &device);

        let layers = config
            .layers
            .windows(2)
            .enumerate()
            .map(|(i, dims)| candle_nn::linear(dims[0], dims[1], vb.pp(format!("dense_{i}"))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            layers,
            labels,
            device,
        })
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    fn logits(&self, features: &FeatureVector) -> candle_core::Result<Tensor> {
        let mut xs = Tensor::from_vec(features.to_f32(), (1, FEATURE_COUNT), &self.device)?;
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            xs = layer.forward(&xs)?;
            if i < last {
                xs = xs.relu()?;
            }
        }
        Ok(xs)
    }

    fn best_class(&self, features: &FeatureVector) -> candle_core::Result<usize> {
        let index = self
            .logits(features)?
            .argmax(D::Minus1)?
            .squeeze(0)?
            .to_scalar::<u32>()?;
        Ok(index as usize)
    }
}

impl Classifier for DenseClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError> {
        let index = self
            .best_class(features)
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;
        Ok(self.labels.decode(index)?.to_string())
    }
}
