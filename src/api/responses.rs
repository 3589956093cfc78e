//! API response structures

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, TimerError},
    state::{DurationPreset, TimerState},
};

/// API response structure for timer control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    /// False when the request left the timer as it was
    pub changed: bool,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(message: String, changed: bool, timer: TimerState) -> Self {
        let status = if timer.is_running { "running" } else { "paused" };
        Self {
            status: status.to_string(),
            message,
            changed,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Timer view with the presets a client may offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    #[serde(flatten)]
    pub timer: TimerState,
    pub presets: Vec<u32>,
}

impl TimerResponse {
    pub fn new(timer: TimerState) -> Self {
        Self {
            timer,
            presets: DurationPreset::all_minutes(),
        }
    }
}

/// Request body for PUT /timer/duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    pub minutes: u32,
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error body returned with any non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// Handler error carrying the status code to reply with
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        let status = match &e {
            AppError::Timer(TimerError::UnsupportedDuration { .. }) => StatusCode::BAD_REQUEST,
            AppError::StatePoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
            timestamp: Utc::now(),
        };
        (self.status, Json(body)).into_response()
    }
}
