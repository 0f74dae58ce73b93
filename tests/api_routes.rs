//! HTTP surface tests against the real route table.

use actix_web::{test, web, App};
use career_advisor::api::{configure, AppState};
use career_advisor::config::{AdvisorConfig, FeatureFlags};
use serde_json::{json, Value};

fn state(config: &AdvisorConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(config).unwrap())
}

#[actix_rt::test]
async fn test_health() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data).configure(configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_list_tools() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/tools").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    let tools = body["data"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 9);
    assert!(tools.contains(&json!("find_scholarships")));
}

#[actix_rt::test]
async fn test_tool_call_updates_session() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tools/collect_profile")
        .set_json(json!({"user_id": "ana", "name": "Ana", "interests": "technology"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["user_id"], "ana");
    assert_eq!(body["stage"], "PROFILE_COMPLETE");
    assert_eq!(body["interaction_count"], 1);
    assert_eq!(body["suggestions"][0]["action"], "recommend_careers");
    assert_eq!(body["suggestions"][0]["priority"], "high");
    assert_eq!(body["profile"]["name"], "Ana");

    let req = test::TestRequest::get().uri("/api/session/ana").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["session"]["stage"], "PROFILE_COMPLETE");
    assert_eq!(body["data"]["session"]["interaction_count"], 1);

    let req = test::TestRequest::get().uri("/api/session/ana/history").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let events = body["data"].as_array().unwrap();
    assert_eq!(events[0]["event_type"], "tool_invoked");
    assert_eq!(events[0]["description"], "collect_profile");
}

#[actix_rt::test]
async fn test_tool_errors_are_still_200() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tools/teleport")
        .set_json(json!({"user_id": "ana"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Unknown tool: teleport");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::post()
        .uri("/api/tools/collect_profile")
        .insert_header(("content-type", "application/json"))
        .set_payload("{broken")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["user_id"], "default_user");
}

#[actix_rt::test]
async fn test_numeric_user_ids_stay_separate() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

    for (user_id, name) in [(42, "Alice"), (7, "Bob")] {
        let req = test::TestRequest::post()
            .uri("/api/tools/collect_profile")
            .set_json(json!({"user_id": user_id, "name": name}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["user_id"], user_id.to_string());
        assert_eq!(body["interaction_count"], 1);
    }

    let sessions = data.advisor.sessions();
    assert_eq!(sessions.get("42").profile.unwrap().name, "Alice");
    assert_eq!(sessions.get("7").profile.unwrap().name, "Bob");
    assert!(!sessions.contains("default_user"));
}

#[actix_rt::test]
async fn test_structured_user_id_is_rejected() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tools/collect_profile")
        .set_json(json!({"user_id": {"id": 42}, "name": "Alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid arguments"));
    assert_eq!(data.advisor.sessions().user_count(), 0);
}

#[actix_rt::test]
async fn test_missing_user_id_uses_default_user() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tools/start_journey")
        .set_json(json!({"user_name": "Sam"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user_id"], "default_user");
    assert_eq!(body["conversation_started"], true);
}

#[actix_rt::test]
async fn test_delete_session_resets_user() {
    let data = state(&AdvisorConfig::default());
    let app = test::init_service(App::new().app_data(data).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tools/track_progress")
        .set_json(json!({
            "user_id": "ana",
            "user_name": "Ana",
            "completed_skills": "Git, SQL"
        }))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/session/ana").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["existed"], true);

    let req = test::TestRequest::get().uri("/api/session/ana").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["session"]["stage"], "NEW");
    assert_eq!(body["data"]["session"]["interaction_count"], 0);
    assert!(body["data"]["session"]["progress"].is_null());

    let req = test::TestRequest::get().uri("/api/session/ana/history").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_careers_respect_market_data_flag() {
    let config = AdvisorConfig {
        features: FeatureFlags {
            enable_market_data: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let app = test::init_service(App::new().app_data(state(&config)).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/careers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let careers = body["data"].as_array().unwrap();
    assert_eq!(careers.len(), 5);
    assert!(careers.iter().all(|c| c.get("avg_salary").is_none()));
    assert!(careers.iter().all(|c| c.get("required_skills").is_some()));
}

#[actix_rt::test]
async fn test_disabled_scholarships_report_error() {
    let config = AdvisorConfig {
        features: FeatureFlags {
            enable_scholarships: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let app = test::init_service(App::new().app_data(state(&config)).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tools/find_scholarships")
        .set_json(json!({"user_id": "ana", "target_career": "Data Scientist"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Scholarship lookup is disabled in this deployment");
}
