use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{spawn_app, spawn_app_with_timeout, ACTIONS_TOKEN};

async fn json_body(response: reqwest::Response) -> Value {
    response.json().await.expect("The body should be JSON.")
}

#[tokio::test]
async fn existing_template_is_returned_with_200() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/templates/abc123"))
        .and(header("Authorization", format!("Bearer {}", ACTIONS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "template": {"id": "abc123", "name": "Welcome Email"}
        })))
        .expect(1)
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("abc123").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        Some("no-store"),
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok())
    );
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "template": {"id": "abc123", "name": "Welcome Email"}})
    );
}

#[tokio::test]
async fn missing_template_is_a_404_with_the_default_message() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/templates/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .expect(1)
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("missing").await;

    assert_eq!(404, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"error": "Template not found"}));
}

#[tokio::test]
async fn reported_error_is_forwarded_even_on_success() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/templates/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "error": "X",
            "template": {"id": "abc123"}
        })))
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("abc123").await;

    assert_eq!(404, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"error": "X"}));
}

#[tokio::test]
async fn success_without_a_template_is_a_404() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/templates/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("abc123").await;

    assert_eq!(404, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"error": "Template not found"}));
}

#[tokio::test]
async fn unexpected_failures_return_a_generic_500() {
    let app = spawn_app().await;
    let failures = [
        (
            ResponseTemplate::new(503).set_body_string("upstream database is down"),
            "server error",
        ),
        (
            ResponseTemplate::new(200).set_body_string("not json"),
            "garbled body",
        ),
    ];

    for (failure, description) in failures {
        let _guard = Mock::given(method("GET"))
            .respond_with(failure)
            .mount_as_scoped(&app.actions_server)
            .await;

        let response = app.get_template("abc123").await;

        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not return a 500 when the actions service had a {}.",
            description
        );
        assert_eq!(
            json_body(response).await,
            json!({"error": "Failed to fetch template"})
        );
    }
}

#[tokio::test]
async fn unreachable_actions_service_returns_a_500() {
    let app = spawn_app_with_timeout(200).await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("abc123").await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        json_body(response).await,
        json!({"error": "Failed to fetch template"})
    );
}

#[tokio::test]
async fn identifiers_are_decoded_then_forwarded_as_one_segment() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/templates/spring%20sale"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "template": {"id": "spring sale"}
        })))
        .expect(1)
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("spring%20sale").await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn dot_segment_identifiers_are_not_found_without_a_lookup() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&app.actions_server)
        .await;

    for id in ["%2E", "%2E%2E"] {
        let (status, body) = app.raw_get(&format!("/api/templates/{}", id)).await;

        assert_eq!(404, status, "unexpected status for {}", id);
        assert!(body.contains(r#"{"error":"Template not found"}"#));
    }
}

#[tokio::test]
async fn undecodable_identifiers_are_not_found_and_not_cached() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&app.actions_server)
        .await;

    let response = app.get_template("%FF").await;

    assert_eq!(404, response.status().as_u16());
    assert_eq!(
        Some("no-store"),
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok())
    );
    assert_eq!(json_body(response).await, json!({"error": "Template not found"}));
}
