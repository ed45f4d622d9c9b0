use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde_json::Value;

use crate::{
    middleware::RequestId,
    models::IntelBriefRequest,
    routes::AppState,
    services::curator,
};

/// Handler for `POST /api/intel-brief`
///
/// Always answers 200; failures produce the placeholder brief.
pub async fn intel_brief(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<IntelBriefRequest>, JsonRejection>,
) -> Json<Value> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(
                request_id = %request_id,
                error = %rejection.body_text(),
                "Rejected intel brief body"
            );
            return Json(curator::unavailable_brief());
        }
    };

    let brief = curator::intel_brief(state.completion.as_ref(), &state.settings, &request).await;

    Json(brief)
}
