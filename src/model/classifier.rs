use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fitted segmentation classifier, deserialized from a binary artifact.
///
/// The variant is fixed by the artifact itself: some models only yield a hard
/// label, others can additionally estimate per-class probabilities. Callers
/// branch on the capability once instead of probing per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SegmentModel {
    /// Nearest-centroid classifier; hard labels only.
    ClassifierOnly { centroids: Vec<Vec<f64>> },
    /// Nearest-centroid classifier with a softmax temperature for turning
    /// distances into per-class confidence scores.
    ClassifierWithConfidence {
        centroids: Vec<Vec<f64>>,
        temperature: f64,
    },
}

impl SegmentModel {
    fn centroids(&self) -> &[Vec<f64>] {
        match self {
            Self::ClassifierOnly { centroids } => centroids,
            Self::ClassifierWithConfidence { centroids, .. } => centroids,
        }
    }

    fn squared_distances(&self, features: &[f64]) -> Result<Vec<f64>> {
        let centroids = self.centroids();
        if centroids.is_empty() {
            return Err(Error::prediction("model has no centroids"));
        }
        centroids
            .iter()
            .map(|c| {
                if c.len() != features.len() {
                    return Err(Error::prediction(format!(
                        "feature vector has {} dimensions, model expects {}",
                        features.len(),
                        c.len()
                    )));
                }
                Ok(c.iter()
                    .zip(features)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum())
            })
            .collect()
    }

    /// Predicts the segment label for a single feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<i64> {
        let distances = self.squared_distances(features)?;
        let (label, _) = distances
            .iter()
            .copied()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| Error::prediction("model has no centroids"))?;
        Ok(label as i64)
    }

    /// Per-class probability estimates, or `None` when the model lacks the
    /// capability. Never an empty vector.
    pub fn predict_probability(&self, features: &[f64]) -> Result<Option<Vec<f64>>> {
        let temperature = match self {
            Self::ClassifierOnly { .. } => return Ok(None),
            Self::ClassifierWithConfidence { temperature, .. } => *temperature,
        };
        if !(temperature.is_finite() && temperature > 0.0) {
            return Err(Error::prediction(format!(
                "invalid softmax temperature {temperature}"
            )));
        }

        let distances = self.squared_distances(features)?;
        // Softmax over negative distances, shifted by the max for stability.
        let scores: Vec<f64> = distances.iter().map(|d| -d / temperature).collect();
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        Ok(Some(exps.iter().map(|e| e / total).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_corner_model() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 20.0, 20.0, 20.0],
            vec![0.0, 25.0, 50.0, 80.0],
            vec![1.0, 40.0, 90.0, 10.0],
            vec![1.0, 60.0, 30.0, 50.0],
        ]
    }

    #[test]
    fn predict_picks_nearest_centroid() {
        let model = SegmentModel::ClassifierOnly {
            centroids: four_corner_model(),
        };
        assert_eq!(model.predict(&[0.0, 25.0, 50.0, 80.0]).unwrap(), 1);
        assert_eq!(model.predict(&[1.0, 41.0, 88.0, 12.0]).unwrap(), 2);
    }

    #[test]
    fn classifier_only_has_no_probabilities() {
        let model = SegmentModel::ClassifierOnly {
            centroids: four_corner_model(),
        };
        let proba = model.predict_probability(&[0.0, 25.0, 50.0, 80.0]).unwrap();
        assert!(proba.is_none());
    }

    #[test]
    fn probabilities_sum_to_one_and_favor_nearest() {
        let model = SegmentModel::ClassifierWithConfidence {
            centroids: four_corner_model(),
            temperature: 100.0,
        };
        let proba = model
            .predict_probability(&[0.0, 25.0, 50.0, 80.0])
            .unwrap()
            .unwrap();
        assert_eq!(proba.len(), 4);
        let total: f64 = proba.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        let argmax = proba
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap()
            .0;
        assert_eq!(argmax, 1);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let model = SegmentModel::ClassifierOnly {
            centroids: four_corner_model(),
        };
        assert!(model.predict(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn empty_model_is_an_error() {
        let model = SegmentModel::ClassifierOnly { centroids: vec![] };
        assert!(model.predict(&[0.0, 25.0, 50.0, 80.0]).is_err());
    }
}
