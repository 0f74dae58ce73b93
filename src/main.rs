//! Career Advisor Backend - Main Entry Point
//!
//! Starts the web API server for the career advisor.

use career_advisor::api::run_server;
use career_advisor::config::AdvisorConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AdvisorConfig::from_env();
    run_server(config).await
}
