// Gemini generateContent client: wire types, client and errors
pub mod client;
pub mod error;
pub mod model;

pub use client::{GeminiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use error::GeminiError;
pub use model::*;
