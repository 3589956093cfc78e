//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{error, info};

use crate::{
    content::{self, Article, Guru, Tab},
    state::{AppState, DurationPreset},
};
use super::responses::{
    ApiError, ApiResponse, DurationRequest, HealthResponse, StatusResponse, TimerResponse,
};

/// Handle GET /timer - Current countdown and available presets
pub async fn timer_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state.get_timer_state()?;
    Ok(Json(TimerResponse::new(timer)))
}

/// Handle POST /timer/start - Start the countdown from the selected duration
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, ApiError> {
    match state.start_timer() {
        Ok((true, timer)) => {
            info!("Start endpoint called - meditation started");
            Ok(Json(ApiResponse::new(
                format!("Meditation started for {}", timer.selected_duration_minutes),
                true,
                timer,
            )))
        }
        Ok((false, timer)) => Ok(Json(ApiResponse::new(
            "Meditation already running".to_string(),
            false,
            timer,
        ))),
        Err(e) => {
            error!("Failed to start meditation: {}", e);
            Err(e.into())
        }
    }
}

/// Handle POST /timer/pause - Stop the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, ApiError> {
    match state.pause_timer() {
        Ok((true, timer)) => {
            info!("Pause endpoint called - meditation paused");
            Ok(Json(ApiResponse::new(
                format!("Meditation paused at {}", timer.formatted_remaining),
                true,
                timer,
            )))
        }
        Ok((false, timer)) => Ok(Json(ApiResponse::new(
            "Meditation already paused".to_string(),
            false,
            timer,
        ))),
        Err(e) => {
            error!("Failed to pause meditation: {}", e);
            Err(e.into())
        }
    }
}

/// Handle PUT /timer/duration - Pick a preset and reset the remaining time
pub async fn duration_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(request) = payload?;
    let timer = state.select_duration(request.minutes)?;
    info!("Duration endpoint called - {} selected", timer.selected_duration_minutes);
    Ok(Json(ApiResponse::new(
        format!("Duration set to {}", timer.selected_duration_minutes),
        true,
        timer,
    )))
}

/// Handle GET /timer/events - Stream every timer change as server-sent events
pub async fn timer_events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let updates = state.subscribe_timer();

    // Emit the current value first, then one event per change.
    let events = stream::unfold((updates, true), |(mut updates, first)| async move {
        if !first && updates.changed().await.is_err() {
            return None;
        }
        let timer = updates.borrow_and_update().clone();
        let event = match Event::default().event("timer").json_data(&timer) {
            Ok(event) => event,
            Err(e) => {
                error!("Failed to encode timer event: {}", e);
                Event::default().event("error").data(e.to_string())
            }
        };
        Some((Ok(event), (updates, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /presets - Allowed durations in minutes
pub async fn presets_handler() -> Json<Vec<u32>> {
    Json(DurationPreset::all_minutes())
}

/// Handle GET /articles
pub async fn articles_handler() -> Json<&'static [Article]> {
    Json(content::articles())
}

/// Handle GET /articles/:slug
pub async fn article_handler(
    Path(slug): Path<String>,
) -> Result<Json<&'static Article>, ApiError> {
    content::article(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Article not found: {}", slug)))
}

/// Handle GET /gurus
pub async fn gurus_handler() -> Json<&'static [Guru]> {
    Json(content::gurus())
}

/// Handle GET /tabs
pub async fn tabs_handler() -> Json<&'static [Tab]> {
    Json(content::tabs())
}

/// Handle GET /status - Return timer and server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(e.into());
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
