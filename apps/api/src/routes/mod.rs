pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/resumes/score", post(scoring::handle_score))
        .route(
            "/api/v1/resumes/score/summary",
            post(scoring::handle_score_summary),
        )
        // Template API
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        .route(
            "/api/v1/resumes/template",
            post(templates::handle_resolve_template),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(app(), request).await
    }

    async fn send_to(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_score_empty_object() {
        let (status, body) = send(post_json("/api/v1/resumes/score", &json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["percentage"], 0);
        assert_eq!(body["maxScore"], 100);
        assert_eq!(body["status"], "needs-improvement");

        let labels: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["label"].as_str().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Personal Information",
                "Work Experience",
                "Education",
                "Skills",
                "Projects"
            ]
        );
    }

    #[tokio::test]
    async fn test_score_browser_snapshot() {
        let resume = json!({
            "personalInfo": {
                "fullName": "Grace Hopper",
                "email": "grace@example.com",
                "phone": "555-0100",
                "location": "Arlington, VA",
                "website": "",
                "linkedin": "",
                "github": "",
                "summary": ""
            },
            "workExperience": [],
            "education": [{
                "id": "1",
                "institution": "Yale",
                "degree": "PhD",
                "field": "Mathematics",
                "location": "New Haven",
                "startDate": "1930",
                "endDate": "1934"
            }],
            "skills": [
                { "id": "1", "name": "COBOL", "level": 5, "category": "technical" },
                { "id": "2", "name": "Teaching", "level": 4, "category": "soft" },
                { "id": "3", "name": "Compilers", "level": 5, "category": "technical" }
            ],
            "projects": [],
            "template": "classic"
        });

        let (status, body) = send(post_json("/api/v1/resumes/score", &resume)).await;
        assert_eq!(status, StatusCode::OK);
        // personal 10 + work 0 + education 15 + skills 15 + projects 0
        assert_eq!(body["totalScore"], 40);
        assert_eq!(body["percentage"], 40);
        assert_eq!(body["items"][0]["score"], 10);
        assert_eq!(body["items"][2]["status"], "excellent");
        assert_eq!(body["items"][3]["score"], 15);
        assert_eq!(body["items"][3]["status"], "good");
    }

    #[tokio::test]
    async fn test_score_summary() {
        let (status, body) =
            send(post_json("/api/v1/resumes/score/summary", &json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["percentage"], 0);
        assert_eq!(body["suggestionCount"], 11);
        assert_eq!(
            body["summary"],
            "Your resume is approximately 0% complete with 11 suggestions"
        );
    }

    #[tokio::test]
    async fn test_score_rejects_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/score")
            .header("content-type", "application/json")
            .body(Body::from("{\"skills\": 7}"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_score_rejects_out_of_range_skill_level() {
        let resume = json!({ "skills": [{ "name": "Rust", "level": 9 }] });
        let (status, body) = send(post_json("/api/v1/resumes/score", &resume)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_score_rejects_body_over_limit() {
        let router = build_router(AppState::new(Config {
            max_body_bytes: 64,
            ..Config::default()
        }));
        let resume = json!({ "personalInfo": { "summary": "x".repeat(500) } });

        let (status, body) =
            send_to(router, post_json("/api/v1/resumes/score", &resume)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_ne!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_body_under_limit_is_scored() {
        let router = build_router(AppState::new(Config {
            max_body_bytes: 64,
            ..Config::default()
        }));
        let (status, _) = send_to(router, post_json("/api/v1/resumes/score", &json!({}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_score_requires_json_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/score")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_score_rejects_invalid_json_syntax() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/score")
            .header("content-type", "application/json")
            .body(Body::from("{\"skills\": ["))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_partial_education_is_good() {
        let resume = json!({ "education": [{ "institution": "MIT" }] });
        let (status, body) = send(post_json("/api/v1/resumes/score", &resume)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][2]["label"], "Education");
        assert_eq!(body["items"][2]["score"], 8);
        assert_eq!(body["items"][2]["status"], "good");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let (status, body) = send(get_req("/api/v1/templates")).await;
        assert_eq!(status, StatusCode::OK);
        let templates = body.as_array().unwrap();
        assert_eq!(templates.len(), 11);
        assert_eq!(templates[0]["id"], "modern");
    }

    #[tokio::test]
    async fn test_get_template() {
        let (status, body) = send(get_req("/api/v1/templates/bold")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Bold");
        assert_eq!(body["category"], "creative");

        let (status, body) = send(get_req("/api/v1/templates/neon")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_resolve_template_for_resume() {
        let (status, body) = send(post_json(
            "/api/v1/resumes/template",
            &json!({ "template": "executive" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "executive");

        let (status, body) = send(post_json("/api/v1/resumes/template", &json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "modern");
    }

    #[tokio::test]
    async fn test_unknown_template_renders_modern() {
        let (status, body) = send(post_json(
            "/api/v1/resumes/template",
            &json!({ "template": "neon" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "modern");

        let (status, _) = send(post_json(
            "/api/v1/resumes/score",
            &json!({ "template": "neon" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}
