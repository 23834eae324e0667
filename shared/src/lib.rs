mod analysis;
mod endpoint;
mod evaluation;
mod validation;

use serde::{Deserialize, Serialize};

pub use analysis::{
    AnalysisBody, AnalysisBodyError, AnalysisImage, AnalysisImageKind, AnalysisOutcome, AnalysisReport,
    DEFAULT_ANALYSIS_MESSAGE,
};
pub use endpoint::{Endpoint, HttpMethod};
pub use evaluation::{Evaluation, EvaluationRow, NOT_AVAILABLE, with_leading_slash};
pub use validation::{ValidationError, require_file, require_image_path};

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "image";
/// Form field carrying the path to analyse.
pub const IMAGE_PATH_FIELD: &str = "image_path";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UploadResponse {
    pub img_path: String,
}

impl UploadResponse {
    pub fn summary(&self) -> String {
        format!("Image uploaded: {}", self.img_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_summary() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"img_path": "/media/uploads/face.jpg"}"#).unwrap();
        assert_eq!(response.img_path, "/media/uploads/face.jpg");
        assert_eq!(response.summary(), "Image uploaded: /media/uploads/face.jpg");
    }
}
