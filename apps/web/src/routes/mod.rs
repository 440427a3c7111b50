pub mod health;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::pages::handlers as page_handlers;
use crate::report::handlers as report_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let csp = state.config.csp_header();

    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Marketing pages
        .route("/", get(page_handlers::home))
        .route("/about-us", get(page_handlers::about))
        .route("/contact-us", get(page_handlers::contact))
        .route("/privacy-policy", get(page_handlers::privacy_policy))
        .route("/terms-and-conditions", get(page_handlers::terms))
        .route("/cancellation-and-refund", get(page_handlers::refund_policy))
        // Dashboard
        .route("/checkout", get(page_handlers::checkout))
        .route("/profile", get(page_handlers::profile))
        .route("/interview-master", get(page_handlers::interview_master))
        // Report API
        .route("/api/generate-pdf", post(report_handlers::handle_generate_pdf))
        .with_state(state);

    match HeaderValue::from_str(&csp) {
        Ok(value) => router.layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            value,
        )),
        Err(_) => {
            tracing::warn!("image hosts produced an invalid CSP value; header disabled");
            router
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::report::default_page_config;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                buy_now_url: "https://shop.example.com/interview-master".to_string(),
                image_hosts: vec![
                    "images.unsplash.com".to_string(),
                    "res.cloudinary.com".to_string(),
                ],
            },
            page_config: default_page_config(),
        })
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn pdf_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-pdf")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_router().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_pdf_returns_pdf_attachment() {
        let payload = serde_json::json!({
            "reportDate": "12 Aug 2026",
            "reportId": "rpt-42",
            "allQuestionData": [
                {"question": "Tell me about yourself", "answer": "...", "score": 7.0}
            ],
            "feedback": "Solid session.",
            "resumeAnalysis": {"score": 8.0, "strengths": ["clarity"], "improvements": []}
        });
        let response = test_router()
            .oneshot(pdf_request(&payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(
            disposition,
            "attachment; filename=Interview_Feedback_Report.pdf"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!body.is_empty());
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_generate_pdf_rejects_malformed_json() {
        let response = test_router()
            .oneshot(pdf_request("{not valid json"))
            .await
            .unwrap();
        assert!(
            response.status().is_client_error(),
            "malformed JSON should be rejected, got {}",
            response.status()
        );
    }

    #[tokio::test]
    async fn test_generate_pdf_rejects_empty_body() {
        let response = test_router().oneshot(pdf_request("")).await.unwrap();
        assert!(
            response.status().is_client_error(),
            "empty body should be rejected, got {}",
            response.status()
        );
    }

    #[tokio::test]
    async fn test_page_routes_render_html_in_order() {
        for uri in [
            "/",
            "/about-us",
            "/contact-us",
            "/privacy-policy",
            "/terms-and-conditions",
            "/cancellation-and-refund",
            "/checkout",
            "/profile",
            "/interview-master",
        ] {
            let response = test_router().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "route {uri}");
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .to_string();
            assert!(content_type.starts_with("text/html"), "route {uri}");

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let html = std::str::from_utf8(&body).unwrap();
            let navbar = html.find("data-section=\"navbar\"").expect(uri);
            let footer = html.find("data-section=\"footer\"").expect(uri);
            assert!(navbar < footer, "{uri}: navbar must precede footer");
        }
    }

    #[tokio::test]
    async fn test_listing_page_carries_configured_buy_link() {
        let response = test_router()
            .oneshot(get_request("/interview-master"))
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("https://shop.example.com/interview-master"));
    }

    #[tokio::test]
    async fn test_responses_carry_csp_image_hosts() {
        let response = test_router().oneshot(get_request("/")).await.unwrap();
        let csp = response
            .headers()
            .get(header::CONTENT_SECURITY_POLICY)
            .expect("CSP header must be set")
            .to_str()
            .unwrap();
        assert!(csp.contains("https://images.unsplash.com"));
        assert!(csp.contains("https://res.cloudinary.com"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router()
            .oneshot(get_request("/no-such-page"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
