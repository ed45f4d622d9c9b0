//! Request pipelines behind the two API endpoints
//!
//! Each pipeline builds a prompt, calls the completion backend and recovers
//! JSON from the reply. Upstream failures and unrecoverable replies are
//! logged and answered with the endpoint's default payload, so callers always
//! receive a parseable body. An empty recommendation list therefore means
//! either "nothing found" or "something failed".

use serde_json::Value;

use crate::{
    config::Config,
    error::AppError,
    models::{IntelBrief, IntelBriefRequest, RecommendationRequest},
    services::{
        completion::CompletionClient,
        prompts,
        recovery::{recover, Shape},
    },
};

/// Per-process knobs for prompt construction
#[derive(Debug, Clone, PartialEq)]
pub struct CuratorSettings {
    pub recommendation_count: usize,
    pub max_tokens: u32,
}

impl Default for CuratorSettings {
    fn default() -> Self {
        Self {
            recommendation_count: 6,
            max_tokens: 1000,
        }
    }
}

impl From<&Config> for CuratorSettings {
    fn from(config: &Config) -> Self {
        Self {
            recommendation_count: config.recommendation_count,
            max_tokens: config.max_tokens,
        }
    }
}

/// Recommendations for a search request, `[]` on any failure
pub async fn recommend(
    client: &dyn CompletionClient,
    settings: &CuratorSettings,
    request: &RecommendationRequest,
) -> Value {
    tracing::info!(
        subject = %request.subject(),
        media_type = %request.media_type,
        excluded = request.excluded_titles().len(),
        genre_filter = request.genre_filter().unwrap_or(""),
        "Searching for matches"
    );

    let prompt =
        prompts::recommendation_prompt(request, settings.recommendation_count, settings.max_tokens);

    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            log_upstream_failure("smart_search", &e);
            return Shape::Array.default_value();
        }
    };

    let recommendations = match recover(&raw, Shape::Array).into_value() {
        Some(value) => drop_excluded(value, request),
        None => {
            tracing::warn!(raw = %raw, "JSON recovery failed for recommendations");
            return Shape::Array.default_value();
        }
    };

    match recommendations.as_array().map(Vec::len) {
        Some(0) => tracing::warn!(subject = %request.subject(), "No results for request"),
        Some(count) => tracing::info!(
            subject = %request.subject(),
            count,
            "Sending recommendations"
        ),
        None => tracing::warn!("Recovered recommendations are not an array"),
    }

    recommendations
}

/// Intel brief for one title, placeholder brief on any failure
pub async fn intel_brief(
    client: &dyn CompletionClient,
    settings: &CuratorSettings,
    request: &IntelBriefRequest,
) -> Value {
    tracing::info!(
        title = %request.title,
        media_type = %request.media_type,
        "Retrieving intel brief"
    );

    let prompt = prompts::intel_brief_prompt(request, settings.max_tokens);

    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            log_upstream_failure("intel_brief", &e);
            return unavailable_brief();
        }
    };

    let recovered = recover(&raw, Shape::Object).into_value();
    match recovered.as_ref().and_then(IntelBrief::from_reply) {
        Some(brief) => {
            tracing::info!(title = %request.title, "Intel brief retrieved");
            brief_value(&brief)
        }
        None => {
            tracing::warn!(raw = %raw, "JSON recovery failed for intel brief");
            unavailable_brief()
        }
    }
}

/// Placeholder brief sent when nothing could be recovered
pub fn unavailable_brief() -> Value {
    brief_value(&IntelBrief::unavailable())
}

fn brief_value(brief: &IntelBrief) -> Value {
    serde_json::to_value(brief).unwrap_or_else(|_| Shape::Object.default_value())
}

fn log_upstream_failure(endpoint: &str, error: &AppError) {
    tracing::error!(
        endpoint,
        timeout = error.is_timeout(),
        error = %error,
        "Completion call failed"
    );
}

/// Removes items whose `title` is on the exclusion list
///
/// Non-array values and items without a string title pass through.
fn drop_excluded(value: Value, request: &RecommendationRequest) -> Value {
    let Value::Array(items) = value else {
        return value;
    };

    let before = items.len();
    let kept: Vec<Value> = items
        .into_iter()
        .filter(|item| {
            !item
                .get("title")
                .and_then(Value::as_str)
                .is_some_and(|title| request.is_excluded(title))
        })
        .collect();

    if kept.len() < before {
        tracing::debug!(dropped = before - kept.len(), "Dropped excluded titles");
    }

    Value::Array(kept)
}
