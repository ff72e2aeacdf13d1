// Re-export model types and service functions
pub mod model;
pub mod service;
pub mod http;

pub use model::{IdentifyRequest, IdentifyResult, IDENTIFY_PROMPT, IMAGE_MIME_TYPE};
pub use service::*;
pub use http::*;
