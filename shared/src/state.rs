use pokedex_atoms::gemini::GeminiClient;

use crate::config::Settings;

/// Built once per Lambda container and shared by every invocation
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(AppState {
            gemini: GeminiClient::new(http, settings.api_base.clone(), settings.model.clone()),
        })
    }
}
