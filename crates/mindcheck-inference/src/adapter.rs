use std::path::Path;
use std::sync::Arc;

use mindcheck_core::models::features::FeatureVector;

use crate::Classifier;
use crate::dense::DenseClassifier;
use crate::error::InferenceError;

/// The process-wide handle on the classifier.
///
/// Built once during bootstrap and shared read-only. If the artifacts could
/// not be loaded the adapter is still constructed, and every prediction
/// reports [`InferenceError::ModelUnavailable`].
#[derive(Clone)]
pub struct InferenceAdapter {
    classifier: Option<Arc<dyn Classifier>>,
}

impl InferenceAdapter {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    pub fn unavailable() -> Self {
        Self { classifier: None }
    }

    /// Load a [`DenseClassifier`] from `dir`, logging instead of failing.
    pub fn load(dir: &Path) -> Self {
        match DenseClassifier::load(dir) {
            Ok(classifier) => {
                tracing::info!(
                    dir = %dir.display(),
                    layers = classifier.num_layers(),
                    classes = classifier.num_classes(),
                    "model loaded"
                );
                Self::new(Arc::new(classifier))
            }
            Err(e) => {
                tracing::error!(dir = %dir.display(), error = %e, "failed to load model");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(InferenceError::ModelUnavailable)?;
        classifier.predict(features)
    }
}
