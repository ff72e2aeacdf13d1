use lambda_http::{Body, Error, Request, RequestExt, Response};
use pokedex_atoms::identify;
use pokedex_shared::{config, AppState};
use std::sync::Arc;

/// Main Lambda handler - every path is the identify endpoint
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let request_id = event
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.as_str())
        .unwrap_or("-");
    tracing::info!(
        "🚀 Identify Lambda invoked - Method: {} Path: {} RequestId: {}",
        event.method(),
        event.uri().path(),
        request_id
    );

    // Resolved per invocation; absence is answered with a 500 below
    let api_key = config::api_key();

    identify::identify_handler(&event, api_key.as_deref(), &state.gemini).await
}
