use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /api/`.
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// `{"success": true}` acknowledgement returned by write endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct Success {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Success {
    pub fn ok() -> Self { Self { success: true, message: None } }

    pub fn with_message(msg: impl Into<String>) -> Self {
        Self { success: true, message: Some(msg.into()) }
    }
}
