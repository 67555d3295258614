//! HTTP surface for the locator.

mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::location::Locator;

pub fn build_router(locator: Locator) -> Router {
    let state = Arc::new(AppState { locator });

    Router::new()
        .route("/", get(handlers::root))
        .route("/locator/foodbanks", get(handlers::foodbanks))
        .route("/locator/catalog", get(handlers::catalog))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(locator: Locator, addr: &str) -> std::io::Result<()> {
    let app = build_router(locator);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("HungerHelp server listening on http://{} (Ctrl+C to stop)", addr);

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Catalog;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        build_router(Locator::new(Arc::new(Catalog::builtin())))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let resp = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_start_reports_bind_failure() {
        let locator = Locator::new(Arc::new(Catalog::builtin()));
        assert!(start(locator, "256.0.0.1:0").await.is_err());
    }

    #[tokio::test]
    async fn test_root_welcome() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to HungerHelp Bot API");
    }

    #[tokio::test]
    async fn test_geo_lookup() {
        let (status, body) =
            get_json("/locator/foodbanks?latitude=40.753182&longitude=-73.982253&radius_km=20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "low");
        assert_eq!(body["results"][0]["name"], "Hope Food Center");
        assert_eq!(body["results"][0]["distance_km"], 0.0);
        assert_eq!(body["results"].as_array().unwrap().len(), 5);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_text_lookup_has_no_distance() {
        let (status, body) = get_json("/locator/foodbanks?query=harlem").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "low");
        assert_eq!(body["suggestions"][0], "Unity Food Relief");
        assert!(body["results"][0].get("distance_km").is_none());
    }

    #[tokio::test]
    async fn test_no_match_is_ok_with_medium_level() {
        let (status, body) =
            get_json("/locator/foodbanks?query=nonexistent%20place%20xyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "medium");
        assert!(body["results"].as_array().unwrap().is_empty());
        assert!(body["message"].as_str().unwrap().contains("nonexistent place xyz"));
    }

    #[tokio::test]
    async fn test_missing_input_prompts() {
        let (status, body) = get_json("/locator/foodbanks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "medium");
        assert!(body["message"].as_str().unwrap().contains("latitude & longitude"));
    }

    #[tokio::test]
    async fn test_invalid_coordinates_are_bad_request() {
        let (status, body) = get_json("/locator/foodbanks?latitude=123&longitude=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid coordinates"));
    }

    #[tokio::test]
    async fn test_catalog_listing() {
        let (status, body) = get_json("/locator/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 15);
        assert_eq!(body["entries"][0]["name"], "Hope Food Center");
    }
}
