use super::types::{
    ErrorResponse, StatusResponse, UploadRequest, UploadResponse, VivaAnswerRequest,
};
use crate::{
    Error,
    assessment::AssessmentService,
    scoring::VivaAnalysis,
    submission::{Evaluation, SubmissionReport, VivaQuestions},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub assessment: Arc<AssessmentService>,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn error_response(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = e.status_code();
    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        info!("Request rejected: {}", e);
    }
    (
        status,
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Backend running".to_string(),
    })
}

pub async fn upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> ApiResult<UploadResponse> {
    let submission = state
        .assessment
        .upload(request.text)
        .await
        .map_err(error_response)?;

    Ok(Json(UploadResponse {
        submission_id: submission.id,
        status: "uploaded".to_string(),
    }))
}

pub async fn evaluate(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> ApiResult<Evaluation> {
    state
        .assessment
        .evaluate(&submission_id)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn generate_viva(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> ApiResult<VivaQuestions> {
    state
        .assessment
        .generate_viva(&submission_id)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn analyze_viva(
    State(state): State<AppState>,
    Json(request): Json<VivaAnswerRequest>,
) -> Json<VivaAnalysis> {
    Json(state.assessment.analyze_answer(
        request.submission_id.as_deref(),
        &request.answer,
        request.attention_score,
        request.risk_score,
    ))
}

pub async fn report(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> ApiResult<SubmissionReport> {
    state
        .assessment
        .report(&submission_id)
        .await
        .map(Json)
        .map_err(error_response)
}
