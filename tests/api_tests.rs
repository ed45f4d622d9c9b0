use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use mockall::mock;
use serde_json::{json, Value};

use reel_curator::{
    error::{AppError, AppResult},
    routes::{create_router, AppState},
    services::{prompts::Prompt, CompletionClient, CuratorSettings},
};

mock! {
    pub Completion {}

    #[async_trait]
    impl CompletionClient for Completion {
        async fn complete(&self, prompt: &Prompt) -> AppResult<String>;
    }
}

const SIX_PICKS: &str = r#"Here are your picks:
```json
[
  {"title": "Interstellar", "reason": "Nolan's layered sci-fi", "score": 95},
  {"title": "The Matrix", "reason": "Reality bending action", "score": 93},
  {"title": "Shutter Island", "reason": "Twisting psychological thriller", "score": 90},
  {"title": "Memento", "reason": "Non-linear memory puzzle", "score": 89},
  {"title": "Primer", "reason": "Dense time travel logic", "score": 85},
  {"title": "Paprika", "reason": "Dreams invading reality", "score": 84}
]
```"#;

fn create_test_server(mock: MockCompletion) -> TestServer {
    let state = AppState::new(Arc::new(mock), CuratorSettings::default());
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn unused_upstream() -> MockCompletion {
    let mut mock = MockCompletion::new();
    mock.expect_complete().never();
    mock
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(unused_upstream());
    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_smart_search_well_formed_reply() {
    let mut mock = MockCompletion::new();
    mock.expect_complete()
        .withf(|prompt| {
            prompt.system.contains("Reference Title: \"Inception\".")
                && prompt.system.contains("Recommend exactly 6 Movies.")
                && !prompt.system.contains("Do NOT recommend")
        })
        .times(1)
        .returning(|_| Ok(SIX_PICKS.to_string()));

    let server = create_test_server(mock);
    let response = server
        .post("/api/smart-search")
        .json(&json!({ "refTitle": "Inception", "type": "movie", "exclude": [] }))
        .await;

    response.assert_status_ok();
    let items: Vec<Value> = response.json();
    assert_eq!(items.len(), 6);
    for item in &items {
        assert!(!item["title"].as_str().unwrap().is_empty());
        assert!(item["score"].is_number());
    }
    assert_eq!(items[0]["title"], "Interstellar");
}

#[tokio::test]
async fn test_smart_search_upstream_failure_returns_empty_array() {
    let mut mock = MockCompletion::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Err(AppError::ExternalApi("status 503".to_string())));

    let server = create_test_server(mock);
    let response = server
        .post("/api/smart-search")
        .json(&json!({ "refTitle": "Inception", "type": "movie", "exclude": [] }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_smart_search_forwards_exclusions_and_genres() {
    let mut mock = MockCompletion::new();
    mock.expect_complete()
        .withf(|prompt| {
            prompt.system.contains("Do NOT recommend: The Matrix, Memento.")
                && prompt.system.contains("[Sci-Fi, Mystery]")
                && prompt.system.contains("Series")
        })
        .times(1)
        .returning(|_| Ok(SIX_PICKS.to_string()));

    let server = create_test_server(mock);
    let response = server
        .post("/api/smart-search")
        .json(&json!({
            "userPrompt": "something eerie",
            "type": "tv",
            "exclude": ["The Matrix", "Memento"],
            "genreFilter": "Sci-Fi, Mystery"
        }))
        .await;

    response.assert_status_ok();
    let titles: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .filter_map(|item| item["title"].as_str().map(str::to_string))
        .collect();
    assert_eq!(titles.len(), 4);
    assert!(!titles.contains(&"The Matrix".to_string()));
    assert!(!titles.contains(&"Memento".to_string()));
}

#[tokio::test]
async fn test_smart_search_unparseable_reply() {
    let mut mock = MockCompletion::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Ok("Sorry, I can't find anything like that.".to_string()));

    let server = create_test_server(mock);
    let response = server
        .post("/api/smart-search")
        .json(&json!({ "userPrompt": "???" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_smart_search_invalid_body_returns_empty_array() {
    let server = create_test_server(unused_upstream());

    let response = server.post("/api/smart-search").text("not json").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));

    let response = server
        .post("/api/smart-search")
        .json(&json!({ "exclude": "not-a-list" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_intel_brief_prose_wrapped_object() {
    let mut mock = MockCompletion::new();
    mock.expect_complete()
        .withf(|prompt| prompt.user == "Analyze: \"Inception\" (movie)")
        .times(1)
        .returning(|_| {
            Ok(r#"Certainly. Here is the dossier:
{"tagline_ai": "Your mind is the scene of the crime", "plot_twist": "The top keeps spinning", "cultural_impact": "Popularised the BRAAAM", "budget_est": "$160M", "revenue_est": "$837M", "status_verdict": "Blockbuster"}
Let me know if you need more."#
                .to_string())
        });

    let server = create_test_server(mock);
    let response = server
        .post("/api/intel-brief")
        .json(&json!({ "title": "Inception", "type": "movie" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "tagline_ai": "Your mind is the scene of the crime",
            "plot_twist": "The top keeps spinning",
            "cultural_impact": "Popularised the BRAAAM",
            "budget_est": "$160M",
            "revenue_est": "$837M",
            "status_verdict": "Blockbuster"
        })
    );
}

#[tokio::test]
async fn test_intel_brief_failure_returns_placeholder() {
    let mut mock = MockCompletion::new();
    mock.expect_complete()
        .times(1)
        .returning(|_| Err(AppError::ExternalApi("status 401".to_string())));

    let server = create_test_server(mock);
    let response = server
        .post("/api/intel-brief")
        .json(&json!({ "title": "Heat", "type": "movie" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "tagline_ai": "Data Unavailable" })
    );
}

#[tokio::test]
async fn test_intel_brief_invalid_body_returns_placeholder() {
    let server = create_test_server(unused_upstream());
    let response = server.post("/api/intel-brief").text("{broken").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "tagline_ai": "Data Unavailable" })
    );
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let server = create_test_server(unused_upstream());

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("frontend-42"),
        )
        .await;
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "frontend-42"
    );

    let response = server.get("/health").await;
    let generated = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = create_test_server(unused_upstream());
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://reels.example.com"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
