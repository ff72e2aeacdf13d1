use lambda_http::{run, service_fn, Error, Request};
use pokedex_shared::{logging, AppState, Settings};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let settings = Settings::from_env();
    tracing::info!(
        "⚙️ Cold start - model={} api_base={} timeout={:?}",
        settings.model,
        settings.api_base,
        settings.timeout
    );
    let state = Arc::new(AppState::new(&settings)?);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
