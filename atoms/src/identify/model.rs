use serde::{Deserialize, Serialize};

/// Instruction sent alongside every image.
pub const IDENTIFY_PROMPT: &str = "Identify the pokemon in this image. Return a JSON object with a single key 'pokemon' containing the name in lowercase. If no pokemon is clearly visible or it is a random object, set 'pokemon' to 'none'. Example: {\"pokemon\": \"pikachu\"}";

/// Callers always send JPEG; the payload itself is not inspected.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Body of POST /api/identify
#[derive(Debug, Clone, Deserialize)]
pub struct IdentifyRequest {
    /// Base64 JPEG, forwarded untouched
    pub image: String,
}

/// Shape the model is asked to answer with.
///
/// The handler relays the parsed JSON as is, so this type describes the
/// expected answer for clients rather than being enforced on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyResult {
    pub pokemon: String,
}

impl IdentifyResult {
    pub const NONE: &'static str = "none";

    pub fn is_none(&self) -> bool {
        self.pokemon == Self::NONE
    }
}
