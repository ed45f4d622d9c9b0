use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde_json::Value;

use crate::{
    middleware::RequestId,
    models::RecommendationRequest,
    routes::AppState,
    services::{curator, Shape},
};

/// Handler for `POST /api/smart-search`
///
/// Always answers 200 with a JSON array. An undecodable body is treated like
/// any other failure and gets `[]`.
pub async fn smart_search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Json<Value> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(
                request_id = %request_id,
                error = %rejection.body_text(),
                "Rejected smart search body"
            );
            return Json(Shape::Array.default_value());
        }
    };

    let recommendations =
        curator::recommend(state.completion.as_ref(), &state.settings, &request).await;

    Json(recommendations)
}
