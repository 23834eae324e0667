use strum_macros::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// The upstream API routes the dashboard talks to.
///
/// Paths keep their trailing slash; the upstream rejects the bare form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumIter)]
pub enum Endpoint {
    #[strum(serialize = "/api/uploadImage/")]
    UploadImage,
    #[strum(serialize = "/api/faceDetectionAndBlurAnalysis/")]
    FaceDetectionAndBlurAnalysis,
    #[strum(serialize = "/api/getAllDetectionsAndCorrections/")]
    GetAllDetectionsAndCorrections,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        (*self).into()
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::GetAllDetectionsAndCorrections => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Generic alert shown when a request to this endpoint fails for any reason.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::UploadImage => "Upload failed",
            Endpoint::FaceDetectionAndBlurAnalysis => "Analysis failed",
            Endpoint::GetAllDetectionsAndCorrections => "Failed to load evaluations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn paths_keep_trailing_slash() {
        assert_eq!(Endpoint::UploadImage.path(), "/api/uploadImage/");
        assert_eq!(
            Endpoint::GetAllDetectionsAndCorrections.path(),
            "/api/getAllDetectionsAndCorrections/"
        );
        assert!(Endpoint::iter().all(|e| e.path().starts_with("/api/") && e.path().ends_with('/')));
    }

    #[test]
    fn only_listing_is_a_get() {
        let gets: Vec<Endpoint> = Endpoint::iter()
            .filter(|e| e.method() == HttpMethod::Get)
            .collect();
        assert_eq!(gets, vec![Endpoint::GetAllDetectionsAndCorrections]);
    }

    #[test]
    fn failure_messages() {
        assert_eq!(Endpoint::UploadImage.failure_message(), "Upload failed");
        assert_eq!(
            Endpoint::FaceDetectionAndBlurAnalysis.failure_message(),
            "Analysis failed"
        );
        assert_eq!(
            Endpoint::GetAllDetectionsAndCorrections.failure_message(),
            "Failed to load evaluations"
        );
    }
}
