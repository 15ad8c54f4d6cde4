//! Suggestion endpoint.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use suggestion::{SuggestionError, SuggestionResult};

use crate::app::AppState;

#[derive(Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Suggest knots for a free-text query.
///
/// A blank query is a caller error. Pipeline failures map to service
/// errors: a provider rejection points at the integration (bad gateway),
/// an unreachable provider is retryable (service unavailable).
pub async fn suggest_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestionResult>, (StatusCode, Json<ErrorResponse>)> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing query".to_string(),
        ));
    }

    match state.suggester.suggest(query).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            tracing::error!(error = %err, "suggestion failed");
            Err(map_pipeline_error(err))
        }
    }
}

fn map_pipeline_error(err: SuggestionError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        SuggestionError::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        SuggestionError::ProviderRejected { .. }
        | SuggestionError::EmptyCompletion
        | SuggestionError::MalformedPayload(_) => StatusCode::BAD_GATEWAY,
        SuggestionError::Cancelled | SuggestionError::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, err.to_string())
}

fn error_response(
    status: StatusCode,
    message: String,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: message }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use suggestion::testing::{small_catalog, MockProvider};
    use suggestion::{CompletionProvider, Suggester};
    use tower::ServiceExt;

    use crate::app::{build_app, AppState};

    fn app_with(provider: MockProvider) -> axum::Router {
        let provider: Box<dyn CompletionProvider> = Box::new(provider);
        let suggester = Suggester::new(Arc::new(small_catalog()), provider);
        build_app(AppState::new(suggester))
    }

    fn suggest_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/suggest")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn suggest_returns_resolved_knots() {
        let provider = MockProvider::new()
            .with_reply(r#"{"explanation":"Use a bowline.","knots":["bowline","made-up"]}"#);
        let app = app_with(provider);

        let response = app
            .oneshot(suggest_request(r#"{"query": "tie a boat to a dock"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["explanation"], "Use a bowline.");
        assert_eq!(json["knots"].as_array().unwrap().len(), 1);
        assert_eq!(json["knots"][0]["id"], "bowline");
    }

    #[tokio::test]
    async fn blank_query_is_a_bad_request() {
        let app = app_with(MockProvider::new());

        let response = app
            .oneshot(suggest_request(r#"{"query": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing query");
    }

    #[tokio::test]
    async fn provider_rejection_is_a_bad_gateway() {
        let provider = MockProvider::new().failing_rejected("API key not valid");
        let app = app_with(provider);

        let response = app
            .oneshot(suggest_request(r#"{"query": "anything"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn unreachable_provider_is_service_unavailable() {
        let provider = MockProvider::new().failing_unavailable("connection refused");
        let app = app_with(provider);

        let response = app
            .oneshot(suggest_request(r#"{"query": "anything"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn prose_reply_still_succeeds_with_empty_knots() {
        let provider = MockProvider::new().with_reply("I don't have a good suggestion.");
        let app = app_with(provider);

        let response = app
            .oneshot(suggest_request(r#"{"query": "anything"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["explanation"], "I don't have a good suggestion.");
        assert!(json["knots"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let app = app_with(MockProvider::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["knots"], 3);
    }

    #[tokio::test]
    async fn knots_endpoint_serves_the_catalog() {
        let app = app_with(MockProvider::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/knots")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["knots"].as_array().unwrap().len(), 3);
        assert_eq!(json["categories"].as_array().unwrap().len(), 2);
        // camelCase wire format, matching the original schema
        assert!(json["knots"][0].get("categoryId").is_some());
    }
}
