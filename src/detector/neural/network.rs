//! Two-layer feed-forward classifier.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{Linear, VarBuilder, linear};

use crate::error::{GlossaError, Result};

/// Width of the hidden layer.
pub const HIDDEN_SIZE: usize = 256;

/// `logits = layer_2(relu(layer_1(x)))`.
///
/// Weights use the PyTorch state-dict names `layer_1.weight`, `layer_1.bias`,
/// `layer_2.weight` and `layer_2.bias`. There is no dropout, so a forward
/// pass is already inference-mode.
#[derive(Debug, Clone)]
pub struct LanguageNetwork {
    layer_1: Linear,
    layer_2: Linear,
    device: Device,
    input_size: usize,
    classes: usize,
}

impl LanguageNetwork {
    /// Build the network from a variable builder, checking tensor shapes.
    pub fn new(vb: VarBuilder, input_size: usize, classes: usize) -> Result<Self> {
        if input_size == 0 || classes == 0 {
            return Err(GlossaError::model(format!(
                "network needs at least one input and one class (got {input_size} inputs, {classes} classes)"
            )));
        }
        let device = vb.device().clone();
        let layer_1 = linear(input_size, HIDDEN_SIZE, vb.pp("layer_1"))?;
        let layer_2 = linear(HIDDEN_SIZE, classes, vb.pp("layer_2"))?;

        Ok(Self {
            layer_1,
            layer_2,
            device,
            input_size,
            classes,
        })
    }

    /// Load weights from a `.safetensors` file or a PyTorch `.pth` state dict.
    pub fn load<P: AsRef<Path>>(path: P, input_size: usize, classes: usize) -> Result<Self> {
        let path = path.as_ref();
        let device = Device::Cpu;

        let is_safetensors = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("safetensors"));

        let vb = if is_safetensors {
            let data = fs::read(path)?;
            VarBuilder::from_buffered_safetensors(data, DType::F32, &device)?
        } else {
            // Surface a missing file as an I/O error rather than a pickle error.
            fs::metadata(path)?;
            VarBuilder::from_pth(path, DType::F32, &device)?
        };

        Self::new(vb, input_size, classes)
    }

    /// Build the network from named in-memory tensors.
    pub fn from_tensors(
        tensors: HashMap<String, Tensor>,
        input_size: usize,
        classes: usize,
    ) -> Result<Self> {
        let device = Device::Cpu;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &device);
        Self::new(vb, input_size, classes)
    }

    /// Raw class scores for one feature vector.
    pub fn logits(&self, features: &[f32]) -> Result<Vec<f32>> {
        if features.len() != self.input_size {
            return Err(GlossaError::invalid_argument(format!(
                "expected {} features, got {}",
                self.input_size,
                features.len()
            )));
        }

        let input = Tensor::from_slice(features, (1, self.input_size), &self.device)?;
        let hidden = self.layer_1.forward(&input)?.relu()?;
        let logits = self.layer_2.forward(&hidden)?;
        Ok(logits.squeeze(0)?.to_vec1::<f32>()?)
    }

    /// Index of the highest logit; the lowest index wins ties.
    pub fn predict(&self, features: &[f32]) -> Result<usize> {
        let logits = self.logits(features)?;

        let mut best = 0;
        for (idx, value) in logits.iter().enumerate() {
            if *value > logits[best] {
                best = idx;
            }
        }
        Ok(best)
    }

    /// Input width.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Number of output classes.
    pub fn classes(&self) -> usize {
        self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2 inputs, 2 classes; class = the larger input.
    fn identity_tensors() -> HashMap<String, Tensor> {
        let device = Device::Cpu;
        let mut w1 = vec![0f32; HIDDEN_SIZE * 2];
        w1[0] = 1.0; // hidden 0 <- input 0
        w1[2 + 1] = 1.0; // hidden 1 <- input 1
        let mut w2 = vec![0f32; 2 * HIDDEN_SIZE];
        w2[0] = 1.0; // class 0 <- hidden 0
        w2[HIDDEN_SIZE + 1] = 1.0; // class 1 <- hidden 1

        let mut tensors = HashMap::new();
        tensors.insert(
            "layer_1.weight".to_string(),
            Tensor::from_vec(w1, (HIDDEN_SIZE, 2), &device).unwrap(),
        );
        tensors.insert(
            "layer_1.bias".to_string(),
            Tensor::zeros(HIDDEN_SIZE, DType::F32, &device).unwrap(),
        );
        tensors.insert(
            "layer_2.weight".to_string(),
            Tensor::from_vec(w2, (2, HIDDEN_SIZE), &device).unwrap(),
        );
        tensors.insert(
            "layer_2.bias".to_string(),
            Tensor::zeros(2, DType::F32, &device).unwrap(),
        );
        tensors
    }

    #[test]
    fn test_forward_pass() {
        let network = LanguageNetwork::from_tensors(identity_tensors(), 2, 2).unwrap();

        assert_eq!(network.logits(&[0.25, 0.75]).unwrap(), vec![0.25, 0.75]);
        assert_eq!(network.predict(&[0.9, 0.1]).unwrap(), 0);
        assert_eq!(network.predict(&[0.1, 0.9]).unwrap(), 1);
    }

    #[test]
    fn test_relu_clamps_negative_activations() {
        let network = LanguageNetwork::from_tensors(identity_tensors(), 2, 2).unwrap();
        assert_eq!(network.logits(&[-1.0, -2.0]).unwrap(), vec![0.0, 0.0]);
        // all-equal logits resolve to the first class
        assert_eq!(network.predict(&[-1.0, -2.0]).unwrap(), 0);
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(LanguageNetwork::from_tensors(identity_tensors(), 3, 2).is_err());
        assert!(LanguageNetwork::from_tensors(identity_tensors(), 2, 4).is_err());

        let network = LanguageNetwork::from_tensors(identity_tensors(), 2, 2).unwrap();
        assert!(network.logits(&[1.0]).is_err());
    }

    #[test]
    fn test_missing_tensor() {
        let mut tensors = identity_tensors();
        tensors.remove("layer_2.bias");
        assert!(LanguageNetwork::from_tensors(tensors, 2, 2).is_err());
    }

    #[test]
    fn test_load_safetensors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("model.safetensors");
        candle_core::safetensors::save(&identity_tensors(), &path).unwrap();

        let network = LanguageNetwork::load(&path, 2, 2).unwrap();
        assert_eq!(network.predict(&[0.2, 0.8]).unwrap(), 1);
    }

    #[test]
    fn test_load_pth_state_dict() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/identity_3x3.pth");

        let network = LanguageNetwork::load(path, 3, 3).unwrap();
        assert_eq!(network.predict(&[0.1, 0.9, 0.0]).unwrap(), 1);
        assert_eq!(network.logits(&[0.0, 0.0, 0.5]).unwrap(), vec![0.0, 0.0, 0.5]);

        assert!(LanguageNetwork::load(path, 4, 3).is_err());
        assert!(LanguageNetwork::load(path, 3, 2).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = LanguageNetwork::load(dir.path().join("model.pth"), 2, 2).unwrap_err();
        assert!(matches!(err, GlossaError::Io(_)));

        let err = LanguageNetwork::load(dir.path().join("model.safetensors"), 2, 2).unwrap_err();
        assert!(matches!(err, GlossaError::Io(_)));
    }
}
