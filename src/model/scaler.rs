use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fitted z-score scaler: `(x - mean) / scale` per feature, with the
/// statistics learned at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if self.mean.len() != features.len() || self.scale.len() != features.len() {
            return Err(Error::prediction(format!(
                "scaler fitted for {} features, got {}",
                self.mean.len(),
                features.len()
            )));
        }
        features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                if *scale == 0.0 {
                    return Err(Error::prediction("scaler has a zero scale factor"));
                }
                Ok((x - mean) / scale)
            })
            .collect()
    }
}
