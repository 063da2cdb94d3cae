//! Integration tests for the Solidarity Tech client.
//!
//! These tests use wiremock to stand in for the API and verify the requests
//! each operation sends and how responses come back.

use std::time::Duration;

use fetch_core::{ApiError, AuthError, ClientError, ConfigError, FetchRequest, ValidationError};
use serde_json::{Value, json};
use solidarity_tech::{
    ConfigOptions, ListParams, Params, Profile, SolidarityTech, UserActionInput, UserInput,
    catalog,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authed_client(mock_server: &MockServer) -> SolidarityTech {
    let mut sdk = SolidarityTech::with_base_url(mock_server.uri()).unwrap();
    sdk.auth(&["token123"]).unwrap();
    sdk
}

/// Test that the id path parameter is substituted verbatim.
#[tokio::test]
async fn test_put_users_id_substitutes_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/42"))
        .and(body_json(json!({"first_name": "Ada", "email": "ada@example.org"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 42}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let body = UserInput::new().first_name("Ada").email("ada@example.org");
    let response = sdk.put_users_id(&body, 42u64).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.success().unwrap()["data"]["id"], 42);
}

/// Test that string ids are placed in the path unchanged.
#[tokio::test]
async fn test_string_id_is_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/spring-rally"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let response = sdk.get_events_id("spring-rally").await.unwrap();
    assert!(response.is_success());
}

/// Test that reserved characters in ids cannot leave the id segment.
#[tokio::test]
async fn test_ids_are_encoded_as_one_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    sdk.get_events_id("7?admin=true").await.unwrap();
    sdk.get_pages_id("a#frag").await.unwrap();
    sdk.put_users_id(&UserInput::new().first_name("Ada"), "1/../../texts")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let seen: Vec<(&str, &str, Option<&str>)> = requests
        .iter()
        .map(|request| {
            (
                request.method.as_str(),
                request.url.path(),
                request.url.query(),
            )
        })
        .collect();
    assert_eq!(
        seen,
        vec![
            ("GET", "/events/7%3Fadmin%3Dtrue", None),
            ("GET", "/pages/a%23frag", None),
            ("PUT", "/users/1%2F..%2F..%2Ftexts", None),
        ]
    );
}

/// Test that a body on a query-only operation is rejected before sending.
#[tokio::test]
async fn test_call_rejects_body_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);

    let err = sdk
        .call::<Value>(&catalog::POST_USERS, FetchRequest::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingBody { ref endpoint }) if endpoint == "postUsers"
    ));

    let request = FetchRequest::new()
        .param("user_id", 7)
        .with_body(json!({"body": "Doors open at 6"}));
    let err = sdk
        .call::<Value>(&catalog::POST_TEXTS, request)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::UnexpectedBody { ref endpoint }) if endpoint == "postTexts"
    ));
}

/// Test that the bearer credential is attached exactly once per request.
#[tokio::test]
async fn test_auth_header_sent_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer token123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    sdk.get_users(ListParams::new()).await.unwrap();
    sdk.get_chapters(Params::new()).await.unwrap();
    sdk.get_event_rsvps_id(9u64).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert_eq!(request.headers.get_all("authorization").iter().count(), 1);
    }
}

/// Test that the default headers identify the client.
#[tokio::test]
async fn test_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    sdk.get_team_members(Params::new()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(agent.starts_with("solidarity-tech/v1 (fetch-core/"), "{agent}");
}

/// Test that server variables are resolved before any request.
#[tokio::test]
async fn test_server_variables_route_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let port = mock_server.address().port().to_string();
    let mut sdk = authed_client(&mock_server);
    sdk.server(
        "http://{host}:{port}/{basePath}",
        &[("host", "127.0.0.1"), ("port", port.as_str()), ("basePath", "v1")],
    )
    .unwrap();
    assert_eq!(sdk.base_url(), format!("http://127.0.0.1:{port}/v1"));

    let calls = sdk.get_calls(Params::new()).await.unwrap();
    assert_eq!(calls.success().unwrap().data[0].id, Some(1));
}

/// Test that the documented server example resolves.
#[test]
fn test_server_region_example() {
    let mut sdk = SolidarityTech::new().unwrap();
    sdk.server("https://{region}.example.com", &[("region", "eu")])
        .unwrap();
    assert_eq!(sdk.base_url(), "https://eu.example.com");
}

/// Test that a 404 resolves with the status and the server's error body.
#[tokio::test]
async fn test_not_found_resolves() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Page not found"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let response = sdk.get_pages_id(999u64).await.unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    assert_eq!(response.error_body(), Some(&json!({"error": "Page not found"})));

    let err = response.into_result().unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

/// Test that a typed operation still resolves on an error status.
#[tokio::test]
async fn test_unauthorized_typed_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .mount(&mock_server)
        .await;

    let sdk = SolidarityTech::with_base_url(mock_server.uri()).unwrap();
    let response = sdk.get_users(ListParams::new()).await.unwrap();
    assert_eq!(response.status, 401);

    let err = response.into_result().unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::AuthenticationFailed { .. })));
}

/// Test that a timeout rejects after a single attempt.
#[tokio::test]
async fn test_timeout_rejects_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textbanks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut sdk = authed_client(&mock_server);
    sdk.config(ConfigOptions::timeout(Duration::from_millis(100)));

    let err = sdk.get_textbanks(Params::new()).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Client(ClientError::Timeout { duration_ms: 100 })
    ));
}

/// Test that listing texts without params sends no query string.
#[tokio::test]
async fn test_get_texts_without_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/texts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 3, "user_id": 7, "body": "See you Saturday"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let texts = sdk.get_texts(Params::new()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(
        texts.success().unwrap().data[0].body.as_deref(),
        Some("See you Saturday")
    );
}

/// Test that list params become query parameters.
#[tokio::test]
async fn test_list_params_become_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_limit", "25"))
        .and(query_param("_offset", "50"))
        .and(query_param("chapter_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "first_name": "Ada", "shirt_size": "M"}],
            "meta": {"total_count": 51, "limit": 25, "offset": 50}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let params = ListParams::new().limit(25).offset(50).filter("chapter_id", 3);
    let users = sdk.get_users(params).await.unwrap().into_result().unwrap();

    assert_eq!(users.data[0].first_name.as_deref(), Some("Ada"));
    assert_eq!(users.data[0].extra["shirt_size"], "M");
    assert_eq!(users.meta.unwrap().total_count, Some(51));
}

/// Test that query-only posts send parameters and no body.
#[tokio::test]
async fn test_post_texts_is_query_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/texts"))
        .and(query_param("user_id", "7"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 11}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let params = Params::new().with("user_id", 7).with("body", "Doors open at 6");
    let response = sdk.post_texts(params).await.unwrap();
    assert_eq!(response.status, 201);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

/// Test that body operations send JSON.
#[tokio::test]
async fn test_post_user_actions_sends_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user_actions"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"user_id": 7, "page_id": 12})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 1}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let response = sdk
        .post_user_actions(&UserActionInput::new(7, 12))
        .await
        .unwrap();
    assert_eq!(response.status, 201);
}

/// Test that generic bodies and delete operations use the right verbs.
#[tokio::test]
async fn test_create_and_delete_task_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/task_agents"))
        .and(body_json(json!({"user_id": 7, "scheduled_task_id": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 30}})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/task_agents/30"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let created = sdk
        .post_task_agents(&json!({"user_id": 7, "scheduled_task_id": 2}))
        .await
        .unwrap();
    let id = created.success().unwrap()["data"]["id"].as_u64().unwrap();

    let deleted = sdk.delete_task_agents_id(id).await.unwrap();
    assert_eq!(deleted.status, 204);
    assert_eq!(deleted.success(), Some(&Value::Null));
}

/// Test that the lite profile rejects other operations before any request.
#[tokio::test]
async fn test_lite_profile_rejects_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = SolidarityTech::builder()
        .base_url(mock_server.uri())
        .api_key("token123")
        .profile(Profile::Lite)
        .build()
        .unwrap();

    let err = sdk.get_events(Params::new()).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Config(ConfigError::EndpointNotEnabled { ref id, .. }) if id == "getEvents"
    ));

    sdk.get_activities(Params::new()).await.unwrap();
}

/// Test that every catalog operation reaches its method and path.
#[tokio::test]
async fn test_every_operation_hits_its_route() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    for endpoint in catalog::ENDPOINTS {
        let mut request = FetchRequest::new().param("id", 17);
        if endpoint.body == fetch_core::BodyKind::Json {
            request = request.with_body(json!({}));
        }
        let response = sdk.call::<Value>(endpoint, request).await.unwrap();
        assert!(response.is_success(), "{} failed", endpoint.id);
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), catalog::ENDPOINTS.len());
    for (endpoint, request) in catalog::ENDPOINTS.iter().zip(&requests) {
        assert_eq!(request.method.as_str(), endpoint.method.to_string());
        assert_eq!(request.url.path(), endpoint.path.replace("{id}", "17"));
    }
}

/// Test that each typed method sends its own method and path.
#[tokio::test]
async fn test_every_typed_method_hits_its_route() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let sdk = authed_client(&mock_server);
    let body = json!({"name": "Spring rally"});
    let mut statuses = Vec::new();

    statuses.push(sdk.get_activities(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_agent_assignments(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_agent_assignments(&body).await.unwrap().status);
    statuses.push(sdk.get_agent_assignments_id(17u64).await.unwrap().status);
    statuses.push(sdk.put_agent_assignments_id(&body, 17u64).await.unwrap().status);
    statuses.push(sdk.delete_agent_assignments_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_calls(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_chapter_phone_numbers(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_chapters(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_custom_user_properties(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_email_blasts(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_email_blasts_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_event_attendances(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_event_attendances(&body).await.unwrap().status);
    statuses.push(sdk.get_event_rsvps(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_event_rsvps(&body).await.unwrap().status);
    statuses.push(sdk.get_event_rsvps_id(17u64).await.unwrap().status);
    statuses.push(sdk.put_event_rsvps_id(&body, 17u64).await.unwrap().status);
    statuses.push(sdk.delete_event_rsvps_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_event_sessions(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_event_sessions(&body).await.unwrap().status);
    statuses.push(sdk.get_event_sessions_id(17u64).await.unwrap().status);
    statuses.push(sdk.put_event_sessions_id(&body, 17u64).await.unwrap().status);
    statuses.push(sdk.delete_event_sessions_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_events(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_events_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_organizations(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_organizations_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_pages(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_pages_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_phonebanks(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_phonebanks_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_scheduled_calls(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_scheduled_calls_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_scheduled_tasks(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_scheduled_tasks(&body).await.unwrap().status);
    statuses.push(sdk.get_scheduled_tasks_id(17u64).await.unwrap().status);
    statuses.push(sdk.put_scheduled_tasks_id(&body, 17u64).await.unwrap().status);
    statuses.push(sdk.delete_scheduled_tasks_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_task_agents(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_task_agents(&body).await.unwrap().status);
    statuses.push(sdk.get_task_agents_id(17u64).await.unwrap().status);
    statuses.push(sdk.delete_task_agents_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_task_assignments(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_task_assignments(&body).await.unwrap().status);
    statuses.push(sdk.get_task_assignments_id(17u64).await.unwrap().status);
    statuses.push(sdk.put_task_assignments_id(&body, 17u64).await.unwrap().status);
    statuses.push(sdk.delete_task_assignments_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_team_members(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_text_blasts(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_text_blasts_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_text_templates(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_text_templates(&body).await.unwrap().status);
    statuses.push(sdk.get_text_templates_id(17u64).await.unwrap().status);
    statuses.push(sdk.put_text_templates_id(&body, 17u64).await.unwrap().status);
    statuses.push(sdk.delete_text_templates_id(17u64).await.unwrap().status);
    statuses.push(sdk.get_textbanks(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_textbanks_id(17u64).await.unwrap().status);
    statuses.push(sdk.post_texts(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_texts(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_user_actions(&UserActionInput::new(7, 12)).await.unwrap().status);
    statuses.push(sdk.get_user_lists(Params::new()).await.unwrap().status);
    statuses.push(sdk.get_user_lists_id(17u64).await.unwrap().status);
    statuses.push(sdk.post_user_notes(Params::new()).await.unwrap().status);
    statuses.push(sdk.post_users(&UserInput::new()).await.unwrap().status);
    statuses.push(sdk.get_users(Params::new()).await.unwrap().status);
    statuses.push(sdk.put_users_id(&UserInput::new(), 17u64).await.unwrap().status);

    let expected = [
        ("get_activities", "GET", "/activities"),
        ("get_agent_assignments", "GET", "/agent_assignments"),
        ("post_agent_assignments", "POST", "/agent_assignments"),
        ("get_agent_assignments_id", "GET", "/agent_assignments/17"),
        ("put_agent_assignments_id", "PUT", "/agent_assignments/17"),
        ("delete_agent_assignments_id", "DELETE", "/agent_assignments/17"),
        ("get_calls", "GET", "/calls"),
        ("get_chapter_phone_numbers", "GET", "/chapter_phone_numbers"),
        ("get_chapters", "GET", "/chapters"),
        ("get_custom_user_properties", "GET", "/custom_user_properties"),
        ("get_email_blasts", "GET", "/email_blasts"),
        ("get_email_blasts_id", "GET", "/email_blasts/17"),
        ("get_event_attendances", "GET", "/event_attendances"),
        ("post_event_attendances", "POST", "/event_attendances"),
        ("get_event_rsvps", "GET", "/event_rsvps"),
        ("post_event_rsvps", "POST", "/event_rsvps"),
        ("get_event_rsvps_id", "GET", "/event_rsvps/17"),
        ("put_event_rsvps_id", "PUT", "/event_rsvps/17"),
        ("delete_event_rsvps_id", "DELETE", "/event_rsvps/17"),
        ("get_event_sessions", "GET", "/event_sessions"),
        ("post_event_sessions", "POST", "/event_sessions"),
        ("get_event_sessions_id", "GET", "/event_sessions/17"),
        ("put_event_sessions_id", "PUT", "/event_sessions/17"),
        ("delete_event_sessions_id", "DELETE", "/event_sessions/17"),
        ("get_events", "GET", "/events"),
        ("get_events_id", "GET", "/events/17"),
        ("get_organizations", "GET", "/organizations"),
        ("get_organizations_id", "GET", "/organizations/17"),
        ("get_pages", "GET", "/pages"),
        ("get_pages_id", "GET", "/pages/17"),
        ("get_phonebanks", "GET", "/phonebanks"),
        ("get_phonebanks_id", "GET", "/phonebanks/17"),
        ("get_scheduled_calls", "GET", "/scheduled_calls"),
        ("get_scheduled_calls_id", "GET", "/scheduled_calls/17"),
        ("get_scheduled_tasks", "GET", "/scheduled_tasks"),
        ("post_scheduled_tasks", "POST", "/scheduled_tasks"),
        ("get_scheduled_tasks_id", "GET", "/scheduled_tasks/17"),
        ("put_scheduled_tasks_id", "PUT", "/scheduled_tasks/17"),
        ("delete_scheduled_tasks_id", "DELETE", "/scheduled_tasks/17"),
        ("get_task_agents", "GET", "/task_agents"),
        ("post_task_agents", "POST", "/task_agents"),
        ("get_task_agents_id", "GET", "/task_agents/17"),
        ("delete_task_agents_id", "DELETE", "/task_agents/17"),
        ("get_task_assignments", "GET", "/task_assignments"),
        ("post_task_assignments", "POST", "/task_assignments"),
        ("get_task_assignments_id", "GET", "/task_assignments/17"),
        ("put_task_assignments_id", "PUT", "/task_assignments/17"),
        ("delete_task_assignments_id", "DELETE", "/task_assignments/17"),
        ("get_team_members", "GET", "/team_members"),
        ("get_text_blasts", "GET", "/text_blasts"),
        ("get_text_blasts_id", "GET", "/text_blasts/17"),
        ("get_text_templates", "GET", "/text_templates"),
        ("post_text_templates", "POST", "/text_templates"),
        ("get_text_templates_id", "GET", "/text_templates/17"),
        ("put_text_templates_id", "PUT", "/text_templates/17"),
        ("delete_text_templates_id", "DELETE", "/text_templates/17"),
        ("get_textbanks", "GET", "/textbanks"),
        ("get_textbanks_id", "GET", "/textbanks/17"),
        ("post_texts", "POST", "/texts"),
        ("get_texts", "GET", "/texts"),
        ("post_user_actions", "POST", "/user_actions"),
        ("get_user_lists", "GET", "/user_lists"),
        ("get_user_lists_id", "GET", "/user_lists/17"),
        ("post_user_notes", "POST", "/user_notes"),
        ("post_users", "POST", "/users"),
        ("get_users", "GET", "/users"),
        ("put_users_id", "PUT", "/users/17"),
    ];

    assert_eq!(expected.len(), catalog::ENDPOINTS.len());
    assert!(statuses.iter().all(|status| *status == 200));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), expected.len());
    for ((name, verb, route), request) in expected.iter().zip(&requests) {
        assert_eq!(request.method.as_str(), *verb, "{name}");
        assert_eq!(request.url.path(), *route, "{name}");
    }
}
