use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

/// One stored face-detection and blur evaluation, as listed by the upstream.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub is_human_face: bool,
    #[serde(default)]
    pub is_blurry: bool,
    #[serde(default)]
    pub corrected_image_url: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
}

/// Display form of an [`Evaluation`] with image paths made root-relative.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationRow {
    pub id: Option<i64>,
    pub uploaded_image: String,
    pub is_human_face: bool,
    pub is_blurry: bool,
    pub corrected_image: Option<String>,
    pub created_on: Option<String>,
}

impl EvaluationRow {
    /// Records without an id render an empty cell.
    pub fn id_text(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn corrected_image_or_na(&self) -> &str {
        self.corrected_image.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

impl From<Evaluation> for EvaluationRow {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            id: evaluation.id,
            uploaded_image: with_leading_slash(&evaluation.image_path),
            is_human_face: evaluation.is_human_face,
            is_blurry: evaluation.is_blurry,
            corrected_image: evaluation
                .corrected_image_url
                .filter(|url| !url.is_empty())
                .map(|url| with_leading_slash(&url)),
            created_on: evaluation.created_on,
        }
    }
}

/// The upstream stores corrected images as `media/...`; the page needs `/media/...`.
pub fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_missing_slash() {
        assert_eq!(
            with_leading_slash("media/processed/a_unblurred.jpg"),
            "/media/processed/a_unblurred.jpg"
        );
    }

    #[test]
    fn keeps_existing_slash() {
        assert_eq!(with_leading_slash("/media/uploads/a.jpg"), "/media/uploads/a.jpg");
    }

    #[test]
    fn row_from_listing() {
        let listing = r#"[
            {
                "id": 1,
                "image_path": "/media/uploads/a.jpg",
                "is_human_face": true,
                "is_blurry": true,
                "corrected_image_url": "media/processed/a_unblurred.jpg",
                "created_on": "2025-01-05T10:15:00+05:30"
            },
            {
                "id": 2,
                "image_path": "media/uploads/b.png",
                "is_human_face": false,
                "is_blurry": false,
                "corrected_image_url": null,
                "created_on": "2025-01-05T10:16:00+05:30"
            }
        ]"#;
        let evaluations: Vec<Evaluation> = serde_json::from_str(listing).unwrap();
        let rows: Vec<EvaluationRow> = evaluations.into_iter().map(EvaluationRow::from).collect();

        assert_eq!(rows[0].uploaded_image, "/media/uploads/a.jpg");
        assert_eq!(rows[0].corrected_image_or_na(), "/media/processed/a_unblurred.jpg");
        assert!(rows[0].is_human_face && rows[0].is_blurry);

        assert_eq!(rows[1].uploaded_image, "/media/uploads/b.png");
        assert_eq!(rows[1].corrected_image, None);
        assert_eq!(rows[1].corrected_image_or_na(), "N/A");
        assert_eq!(rows[1].created_on.as_deref(), Some("2025-01-05T10:16:00+05:30"));
    }

    #[test]
    fn absent_fields_default() {
        let evaluation: Evaluation = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(evaluation.id, Some(9));
        assert_eq!(evaluation.image_path, "");
        assert!(!evaluation.is_human_face);
        assert!(!evaluation.is_blurry);
        assert_eq!(evaluation.corrected_image_url, None);
        assert_eq!(evaluation.created_on, None);

        let row = EvaluationRow::from(evaluation);
        assert_eq!(row.uploaded_image, "/");
        assert_eq!(row.corrected_image_or_na(), NOT_AVAILABLE);
    }

    #[test]
    fn listing_tolerates_record_without_id() {
        let listing = r#"[
            {"id": 1, "image_path": "media/a.jpg"},
            {"image_path": "media/b.jpg"}
        ]"#;
        let rows: Vec<EvaluationRow> = serde_json::from_str::<Vec<Evaluation>>(listing)
            .unwrap()
            .into_iter()
            .map(EvaluationRow::from)
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id_text(), "1");
        assert_eq!(rows[1].id, None);
        assert_eq!(rows[1].id_text(), "");
        assert_eq!(rows[1].uploaded_image, "/media/b.jpg");
    }

    #[test]
    fn empty_corrected_url_is_not_available() {
        let row = EvaluationRow::from(Evaluation {
            id: Some(4),
            image_path: "/media/uploads/c.jpg".into(),
            corrected_image_url: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(row.corrected_image_or_na(), "N/A");
    }
}
