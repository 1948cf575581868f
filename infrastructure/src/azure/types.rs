use serde::Deserialize;

/// Short-audio recognition result in `format=simple`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SimpleRecognitionResponse {
    pub recognition_status: String,
    #[serde(default)]
    pub display_text: Option<String>,
}
