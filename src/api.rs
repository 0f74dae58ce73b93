//! Web API Module
//!
//! JSON endpoints over the career advisor. Tool calls always answer 200 with
//! the tool result; failures are carried in its `status` field.

use crate::agent::tools::CareerAdvisor;
use crate::agent::types::{ToolName, ToolResult};
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, AdvisorResult};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{de, Serialize};
use serde_json::{json, Value};

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub advisor: CareerAdvisor,
}

impl AppState {
    pub fn new(config: &AdvisorConfig) -> AdvisorResult<Self> {
        Ok(Self {
            advisor: CareerAdvisor::new(config)?,
        })
    }
}

// ============================================================
// API RESPONSE ENVELOPE
// ============================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "Career Advisor API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_tools(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(json!({
        "tools": ToolName::ALL,
        "features": data.advisor.features(),
    })))
}

/// Split the optional `user_id` out of a raw request body
fn split_tool_body(body: &[u8]) -> Result<(Option<String>, Value), AdvisorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok((None, json!({})));
    }

    let mut args: Value = serde_json::from_slice(body)?;
    let user_id = match args.as_object_mut().and_then(|map| map.remove("user_id")) {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        Some(other) => {
            let reason = format!("user_id must be a string or number, got {}", other);
            return Err(<serde_json::Error as de::Error>::custom(reason).into());
        }
    };
    Ok((user_id, args))
}

async fn invoke_tool(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let tool = path.into_inner();
    let advisor = &data.advisor;

    let result = match split_tool_body(&body) {
        Ok((user_id, args)) => advisor.dispatch(&tool, user_id.as_deref(), args),
        Err(e) => {
            log::warn!("[api] Rejected body for {}: {}", tool, e);
            ToolResult::error(advisor.resolve_user_id(None), &e.to_string())
        }
    };

    HttpResponse::Ok().json(result)
}

async fn get_session(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    let session = data.advisor.sessions().get(&user_id);

    HttpResponse::Ok().json(ApiResponse::success(json!({
        "user_id": user_id,
        "session": session,
    })))
}

async fn reset_session(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    let existed = data.advisor.sessions().reset(&user_id);

    HttpResponse::Ok().json(ApiResponse::success(json!({
        "user_id": user_id,
        "existed": existed,
    })))
}

async fn get_history(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match data.advisor.sessions().history(&user_id) {
        Ok(events) => HttpResponse::Ok().json(ApiResponse::success(events)),
        Err(e) => {
            log::error!("[api] Timeline read failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(&format!("Failed to load history: {}", e)))
        }
    }
}

async fn get_careers(data: web::Data<AppState>) -> impl Responder {
    let market_data = data.advisor.features().enable_market_data;

    let careers: Vec<Value> = data
        .advisor
        .knowledge()
        .careers()
        .iter()
        .map(|career| {
            let mut entry = json!(career);
            if !market_data {
                if let Some(map) = entry.as_object_mut() {
                    map.remove("avg_salary");
                    map.remove("job_growth");
                }
            }
            entry
        })
        .collect();

    HttpResponse::Ok().json(ApiResponse::success(careers))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Route table, shared by the server and the integration tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/tools", web::get().to(list_tools))
        .route("/api/tools/{tool}", web::post().to(invoke_tool))
        .route("/api/session/{user_id}", web::get().to(get_session))
        .route("/api/session/{user_id}", web::delete().to(reset_session))
        .route("/api/session/{user_id}/history", web::get().to(get_history))
        .route("/api/careers", web::get().to(get_careers));
}

pub async fn run_server(config: AdvisorConfig) -> std::io::Result<()> {
    let state = AppState::new(&config).map_err(std::io::Error::other)?;
    let state = web::Data::new(state);

    log::info!("[api] Career Advisor API starting at http://{}:{}", config.host, config.port);
    log::info!(
        "[api] Features: market_data={} auto_chain={} scholarships={}, transitions={:?}",
        config.features.enable_market_data,
        config.features.enable_auto_chain,
        config.features.enable_scholarships,
        config.transition_policy
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new().wrap(cors).app_data(state.clone()).configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
