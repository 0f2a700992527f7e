use actix_cors::Cors;
use actix_web::http::{StatusCode, header};
use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer, Responder, get, middleware::Logger, post, web,
};
use log::{debug, error, info};
use serde::Deserialize;

use crate::config::{DEFAULT_LANGUAGE, DEFAULT_VAD, RelayConfig};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub struct AppState {
    pub config: RelayConfig,
    pub http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
pub struct RelayQuery {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_vad")]
    pub vad: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_vad() -> String {
    DEFAULT_VAD.to_string()
}

/// Backend URL for one relayed request. Query values pass through untouched.
fn backend_target(base_url: &str, language: &str, vad: &str) -> String {
    format!(
        "{}/transcribe_clean?language={language}&vad={vad}",
        base_url.trim_end_matches('/')
    )
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/api/v1/health")]
pub async fn health_check() -> impl Responder {
    debug!("Health check endpoint called");
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Transcription relay is running"
    }))
}

/// Forwards the inbound upload to the backend and copies its response back
/// verbatim: same status, same body, content-type defaulted to JSON if the
/// backend omitted one.
#[post("/api/transcribe_clean")]
pub async fn relay_transcribe(
    data: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<RelayQuery>,
    body: web::Bytes,
) -> impl Responder {
    let target = backend_target(&data.config.backend_url, &query.language, &query.vad);
    info!("Relaying upload ({} bytes) to {target}", body.len());

    // The multipart boundary lives in the inbound content-type header, so it
    // must travel with the body.
    let mut outbound = data.http.post(&target).body(body.to_vec());
    if let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    {
        outbound = outbound.header(reqwest::header::CONTENT_TYPE, content_type);
    }

    let response = match outbound.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Backend request failed: {e}");
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": format!("backend unreachable: {e}")
            }));
        }
    };

    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read backend response: {e}");
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": format!("backend unreachable: {e}")
            }));
        }
    };

    debug!("Backend answered {status} ({} bytes)", response_text.len());

    // actix and reqwest carry different http crate versions; convert by code.
    let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    HttpResponse::build(status)
        .content_type(content_type)
        .body(response_text)
}

pub async fn run_server(host: String, port: u16, config: RelayConfig) -> std::io::Result<()> {
    info!("Starting transcription relay");
    info!("Backend address: {}", config.backend_url);

    let app_state = web::Data::new(AppState {
        config,
        http: reqwest::Client::new(),
    });

    info!("Starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(web::PayloadConfig::new(100 * 1024 * 1024)) // 100MB uploads
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(index)
            .service(health_check)
            .service(relay_transcribe)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
