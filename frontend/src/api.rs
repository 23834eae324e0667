use gloo_console::log;
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::{
    AnalysisBodyError, AnalysisOutcome, Endpoint, Evaluation, IMAGE_PATH_FIELD, UPLOAD_FIELD, UploadResponse,
};
use wasm_bindgen::JsValue;
use web_sys::{FormData, UrlSearchParams};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Unusable response: {0}")]
    Body(#[from] AnalysisBodyError),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Request(format!("{:?}", value))
    }
}

/// Sends the file as multipart field `image` and returns the stored path.
pub async fn upload_image(file: &GlooFile) -> Result<UploadResponse, ApiError> {
    let form_data = FormData::new()?;
    form_data.append_with_blob(UPLOAD_FIELD, file.as_ref())?;

    log!("Uploading", file.name());
    let response = Request::post(Endpoint::UploadImage.path())
        .body(form_data)?
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<UploadResponse>().await?)
}

/// Sends `image_path` URL-encoded and normalizes whatever shape comes back.
pub async fn analyze_image(image_path: &str) -> Result<AnalysisOutcome, ApiError> {
    let params = UrlSearchParams::new()?;
    params.append(IMAGE_PATH_FIELD, image_path);

    log!("Analyzing", image_path);
    let response = Request::post(Endpoint::FaceDetectionAndBlurAnalysis.path())
        .body(params)?
        .send()
        .await?;

    let body = ensure_ok(response).await?.text().await?;
    Ok(AnalysisOutcome::from_body(&body)?)
}

pub async fn fetch_evaluations() -> Result<Vec<Evaluation>, ApiError> {
    let response = Request::get(Endpoint::GetAllDetectionsAndCorrections.path())
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<Vec<Evaluation>>().await?)
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}
