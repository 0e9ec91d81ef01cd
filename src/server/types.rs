use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub model_status: String,
    pub scaler_status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Prediction {
    pub segment: i64,
    pub segment_name: String,
    /// Per-class probabilities; `null` when the model cannot estimate them.
    pub confidence: Option<Vec<f64>>,
}

/// The original request fields, echoed back exactly as received.
#[derive(Debug, Serialize)]
pub struct InputData {
    pub gender: Value,
    pub age: Value,
    pub annual_income: Value,
    pub spending_score: Value,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub customer_id: Value,
    pub prediction: Prediction,
    pub input_data: InputData,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
