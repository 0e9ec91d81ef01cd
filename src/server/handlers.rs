use super::types::{ErrorResponse, HealthResponse, InputData, Prediction, PredictResponse};
use crate::{features, features::CustomerRecord, model::Artifacts, segments, Error};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<Artifacts>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        model_status: state.artifacts.model_status().to_string(),
        scaler_status: state.artifacts.scaler_status().to_string(),
        message: "Customer Segmentation API is running".to_string(),
    })
}

pub async fn predict(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<PredictResponse>, ApiError> {
    let Some(model) = state.artifacts.model.as_ref() else {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Model not loaded",
            "Please ensure the model file is available",
        ));
    };

    let data = parse_body(&body)?;
    let record: CustomerRecord = serde_json::from_value(data).map_err(|e| {
        warn!("Rejected malformed predict request: {}", e);
        api_error(StatusCode::BAD_REQUEST, "Invalid input", &e.to_string())
    })?;

    let features = features::encode(&record, state.artifacts.scaler.as_ref())
        .map_err(encoding_or_inference_error)?;
    let segment = model
        .predict(&features)
        .map_err(encoding_or_inference_error)?;
    let confidence = model
        .predict_probability(&features)
        .map_err(encoding_or_inference_error)?;

    info!(
        "Predicted segment {} for customer {}",
        segment, record.customer_id
    );

    Ok(Json(PredictResponse {
        customer_id: record.customer_id,
        prediction: Prediction {
            segment,
            segment_name: segments::segment_name(segment),
            confidence,
        },
        input_data: InputData {
            gender: record.gender.into(),
            age: record.age,
            annual_income: record.annual_income,
            spending_score: record.spending_score,
        },
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub async fn not_found() -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "Endpoint not found",
        "The requested endpoint does not exist",
    )
}

pub async fn method_not_allowed() -> ApiError {
    api_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        "The HTTP method is not allowed for this endpoint",
    )
}

/// An absent, unparseable, or empty body all count as "no data".
fn parse_body(body: &str) -> Result<serde_json::Value, ApiError> {
    let no_data = || {
        api_error(
            StatusCode::BAD_REQUEST,
            "No data provided",
            "Please provide JSON data in the request body",
        )
    };
    if body.trim().is_empty() {
        return Err(no_data());
    }
    let data: serde_json::Value = serde_json::from_str(body).map_err(|_| no_data())?;
    match data.as_object() {
        Some(map) if !map.is_empty() => Ok(data),
        _ => Err(no_data()),
    }
}

/// Bad field values are the caller's fault; anything else that goes wrong
/// inside the artifacts is reported as a prediction failure.
fn encoding_or_inference_error(e: Error) -> ApiError {
    match e {
        Error::InvalidInput(msg) => {
            warn!("Rejected predict request: {}", msg);
            api_error(StatusCode::BAD_REQUEST, "Invalid input", &msg)
        }
        other => {
            error!("Prediction failed: {}", other);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Prediction failed",
                &other.to_string(),
            )
        }
    }
}

fn api_error(status: StatusCode, error: &str, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        }),
    )
}
