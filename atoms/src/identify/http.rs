use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use serde::Serialize;

use super::service::{identify, parse_identify_request};
use crate::gemini::GeminiClient;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MISSING_API_KEY: &str = "Server config error: Missing API Key";
pub const ANALYSIS_FAILED: &str = "Analysis failed";

/// HTTP Handler: POST /api/identify
///
/// `api_key` is resolved by the caller on every invocation; `None` or an
/// empty key is a server misconfiguration. Every failure after the key check
/// collapses into one generic 500, with the detail only in the logs.
pub async fn identify_handler(
    event: &Request,
    api_key: Option<&str>,
    client: &GeminiClient,
) -> Result<Response<Body>, Error> {
    if event.method() != &Method::POST {
        tracing::warn!("⚠️ identify_handler: method {} not allowed", event.method());
        return error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED);
    }

    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        tracing::error!("❌ identify_handler: GEMINI_API_KEY is not configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, MISSING_API_KEY);
    };

    let result = match parse_identify_request(event.body()) {
        Ok(request) => identify(client, api_key, &request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(answer) => json_response(StatusCode::OK, &answer),
        Err(e) => {
            tracing::error!("❌ identify_handler: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

fn error_response(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &serde_json::json!({ "error": message }))
}
