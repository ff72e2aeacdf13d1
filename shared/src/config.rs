use std::env;
use std::time::Duration;

use pokedex_atoms::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings read once per cold start.
///
/// The API key is not part of this: it is looked up on every invocation
/// with [`api_key`] so that a missing key is reported per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout_secs = match non_empty(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "{}={:?} is not a number of seconds, using {}",
                    TIMEOUT_VAR,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        Settings {
            api_base: non_empty(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// GEMINI_API_KEY, read fresh on each call. Blank counts as unset.
pub fn api_key() -> Option<String> {
    env::var(API_KEY_VAR).ok().filter(|key| !key.trim().is_empty())
}
