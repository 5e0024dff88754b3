use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UploadResponse {
    pub id: i32,
    pub message: String,
}

/// Multipart form accepted by the upload endpoint (documentation only).
#[derive(ToSchema)]
pub struct UploadForm {
    pub topic: String,
    pub question: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
