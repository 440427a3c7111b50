use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::models::report::ReportPayload;
use crate::report::pdf::render_report;
use crate::state::AppState;

const ATTACHMENT_FILENAME: &str = "Interview_Feedback_Report.pdf";

/// POST /api/generate-pdf
///
/// Renders the posted interview data into a downloadable PDF. Rendering is
/// CPU-bound, so it runs on the blocking pool.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(payload): Json<ReportPayload>,
) -> Result<Response, AppError> {
    let page_config = state.page_config.clone();
    let question_count = payload.all_question_data.len();

    let bytes = tokio::task::spawn_blocking(move || render_report(&payload, &page_config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))?
        .map_err(|e| AppError::Render(e.to_string()))?;

    tracing::info!(
        question_count,
        size_bytes = bytes.len(),
        "rendered feedback report"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={ATTACHMENT_FILENAME}"),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}
