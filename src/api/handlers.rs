// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP endpoint handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::http_server::AppState;
use super::types::{
    CategoryQuery, CommandRequest, CommandResponse, HealthResponse, QuestionListResponse,
    RandomQuestionResponse, RefreshResponse,
};
use crate::commands::random_status;
use crate::questions::{CacheInfo, Category};
use crate::version;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION.to_string(),
        activity: random_status().to_string(),
    })
}

/// GET /v1/questions/random?category=
///
/// # Errors
/// - 400 Bad Request: unknown category
/// - 404 Not Found: no question available
pub async fn random_question_handler(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<RandomQuestionResponse> {
    let category = query.parse().map_err(|e| {
        warn!("Rejected random question request: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let picked = state
        .service
        .get_random_question(category)
        .await
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                "Sorry, I couldn't get a question right now. Try again later!".to_string(),
            )
        })?;

    Ok(Json(RandomQuestionResponse {
        question: picked.question,
        category: picked.category,
    }))
}

/// GET /v1/questions/{category}
pub async fn question_list_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<QuestionListResponse> {
    let category = category
        .parse::<Category>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let questions = state.service.get_all_questions(category).await;
    debug!("Serving {} {} questions", questions.len(), category);

    Ok(Json(QuestionListResponse {
        category,
        count: questions.len(),
        questions: questions.to_vec(),
    }))
}

/// POST /v1/cache/refresh?category=
pub async fn refresh_handler(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<RefreshResponse> {
    let category = query
        .parse()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    state.service.refresh_cache(category);

    let refreshed = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    Ok(Json(RefreshResponse { refreshed }))
}

/// GET /v1/cache
pub async fn cache_info_handler(State(state): State<AppState>) -> Json<BTreeMap<Category, CacheInfo>> {
    Json(state.service.get_cache_info())
}

/// POST /v1/commands
pub async fn command_handler(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Json<CommandResponse> {
    let reply = state
        .commands
        .handle_message(&request.content, &request.author)
        .await;
    Json(CommandResponse { reply })
}
