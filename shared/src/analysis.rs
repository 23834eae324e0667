use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ANALYSIS_MESSAGE: &str = "Analysis completed";

/// Structured reply of the face-detection and blur-analysis endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AnalysisReport {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub is_human_face: Option<bool>,
    #[serde(default)]
    pub is_blurry: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub corrected_image_url: Option<String>,
}

/// The analysis endpoint answers either with a bare image URL (older
/// deployments) or with an [`AnalysisReport`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisBody {
    Legacy(String),
    Report(AnalysisReport),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisImageKind {
    /// URL taken from a legacy bare-string reply.
    Inferred,
    Corrected,
}

impl AnalysisImageKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisImageKind::Inferred => "Image Path:",
            AnalysisImageKind::Corrected => "Corrected Image:",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnalysisImage {
    pub kind: AnalysisImageKind,
    pub url: String,
}

/// Normalized analysis result. Whatever shape the upstream used, the
/// dashboard renders exactly this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub message: String,
    pub image: Option<AnalysisImage>,
}

/// A body the dashboard cannot render at all.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisBodyError {
    #[display(fmt = "Analysis response was null")]
    Null,
}

impl std::error::Error for AnalysisBodyError {}

impl AnalysisOutcome {
    /// Decodes a raw response body. Text that is not JSON is kept as a bare
    /// image URL, the same as a JSON string. Any other JSON value except
    /// `null` is read as a report, with unreadable fields left empty.
    pub fn from_body(body: &str) -> Result<Self, AnalysisBodyError> {
        AnalysisBody::parse(body).map(Into::into)
    }
}

impl AnalysisReport {
    /// Reads each field on its own, so one mistyped field does not hide the rest.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            id: value.get("id").and_then(Value::as_i64),
            is_human_face: value.get("is_human_face").and_then(Value::as_bool),
            is_blurry: value.get("is_blurry").and_then(Value::as_bool),
            message: text("message"),
            corrected_image_url: text("corrected_image_url"),
        }
    }
}

impl AnalysisBody {
    pub fn parse(body: &str) -> Result<Self, AnalysisBodyError> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Null) => Err(AnalysisBodyError::Null),
            Ok(Value::String(url)) => Ok(AnalysisBody::Legacy(url)),
            Ok(value) => Ok(AnalysisBody::Report(AnalysisReport::from_value(&value))),
            Err(_) => Ok(AnalysisBody::Legacy(body.to_string())),
        }
    }
}

impl From<AnalysisBody> for AnalysisOutcome {
    fn from(body: AnalysisBody) -> Self {
        match body {
            AnalysisBody::Legacy(url) => AnalysisOutcome {
                message: DEFAULT_ANALYSIS_MESSAGE.to_string(),
                image: Some(AnalysisImage {
                    kind: AnalysisImageKind::Inferred,
                    url,
                }),
            },
            AnalysisBody::Report(report) => AnalysisOutcome {
                message: report
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_ANALYSIS_MESSAGE.to_string()),
                image: report
                    .corrected_image_url
                    .filter(|url| !url.is_empty())
                    .map(|url| AnalysisImage {
                        kind: AnalysisImageKind::Corrected,
                        url,
                    }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_becomes_inferred_image() {
        let outcome = AnalysisOutcome::from_body(r#""/media/uploads/face.jpg""#).unwrap();
        assert_eq!(outcome.message, "Analysis completed");
        assert_eq!(
            outcome.image,
            Some(AnalysisImage {
                kind: AnalysisImageKind::Inferred,
                url: "/media/uploads/face.jpg".into(),
            })
        );
    }

    #[test]
    fn non_json_text_is_treated_as_bare_string() {
        let outcome = AnalysisOutcome::from_body("media/processed/face_unblurred.jpg").unwrap();
        let image = outcome.image.expect("image");
        assert_eq!(image.kind, AnalysisImageKind::Inferred);
        assert_eq!(image.url, "media/processed/face_unblurred.jpg");
    }

    #[test]
    fn corrected_url_is_rendered_verbatim() {
        let body = r#"{
            "id": 7,
            "is_human_face": true,
            "is_blurry": true,
            "corrected_image_url": "media/processed/face_unblurred.jpg",
            "message": "Blur detected and corrected"
        }"#;
        let outcome = AnalysisOutcome::from_body(body).unwrap();
        assert_eq!(outcome.message, "Blur detected and corrected");
        assert_eq!(
            outcome.image,
            Some(AnalysisImage {
                kind: AnalysisImageKind::Corrected,
                url: "media/processed/face_unblurred.jpg".into(),
            })
        );
    }

    #[test]
    fn report_without_correction_has_no_image() {
        let body = r#"{"id": 3, "is_human_face": false, "message": "Not a human face"}"#;
        let outcome = AnalysisOutcome::from_body(body).unwrap();
        assert_eq!(outcome.message, "Not a human face");
        assert!(outcome.image.is_none());
    }

    #[test]
    fn missing_message_falls_back() {
        let outcome = AnalysisOutcome::from_body("{}").unwrap();
        assert_eq!(outcome.message, DEFAULT_ANALYSIS_MESSAGE);
        assert!(outcome.image.is_none());
    }

    #[test]
    fn non_object_json_is_an_empty_report() {
        assert_eq!(
            AnalysisBody::parse("[1, 2]"),
            Ok(AnalysisBody::Report(AnalysisReport::default()))
        );
        assert_eq!(
            AnalysisBody::parse("42"),
            Ok(AnalysisBody::Report(AnalysisReport::default()))
        );
    }

    #[test]
    fn mistyped_id_keeps_message_and_image() {
        let body = r#"{
            "id": "7",
            "message": "Blur detected and corrected",
            "corrected_image_url": "media/processed/a.jpg"
        }"#;
        let outcome = AnalysisOutcome::from_body(body).unwrap();
        assert_eq!(outcome.message, "Blur detected and corrected");
        assert_eq!(
            outcome.image,
            Some(AnalysisImage {
                kind: AnalysisImageKind::Corrected,
                url: "media/processed/a.jpg".into(),
            })
        );
    }

    #[test]
    fn mistyped_flags_are_left_empty() {
        let value: Value =
            serde_json::from_str(r#"{"id": 3, "is_blurry": "yes", "message": 5}"#).unwrap();
        let report = AnalysisReport::from_value(&value);
        assert_eq!(report.id, Some(3));
        assert_eq!(report.is_blurry, None);
        assert_eq!(report.message, None);
    }

    #[test]
    fn null_body_is_an_error() {
        assert_eq!(AnalysisOutcome::from_body("null"), Err(AnalysisBodyError::Null));
    }

    #[test]
    fn labels() {
        assert_eq!(AnalysisImageKind::Inferred.label(), "Image Path:");
        assert_eq!(AnalysisImageKind::Corrected.label(), "Corrected Image:");
    }
}
