use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web::Bytes};
use reqwest::Client;
use serde::Serialize;
use shared::HttpMethod;
use std::time::Duration;
use url::Url;

/// Request headers passed through to the upstream. `Content-Type` carries the
/// multipart boundary, so it must survive untouched.
const FORWARDED_HEADERS: [&str; 2] = ["content-type", "accept"];

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Invalid upstream target: {0}")]
    Target(String),
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Forwards dashboard requests to the analysis service and relays its replies
/// as they are: status, content type and body.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, keeping any path prefix the base has.
    pub fn target_url(&self, path: &str, query: &str) -> Result<Url, ProxyError> {
        let mut target = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        if !query.is_empty() {
            target.push('?');
            target.push_str(query);
        }
        Url::parse(&target).map_err(|_| ProxyError::Target(target))
    }

    pub async fn forward(
        &self,
        method: HttpMethod,
        req: &HttpRequest,
        body: Bytes,
    ) -> Result<HttpResponse, ProxyError> {
        let target = self.target_url(req.path(), req.query_string())?;
        log::debug!("Forwarding {:?} {} to {}", method, req.path(), target);

        let mut builder = match method {
            HttpMethod::Get => self.client.get(target),
            HttpMethod::Post => self.client.post(target).body(body),
        };
        for name in FORWARDED_HEADERS {
            if let Some(value) = req.headers().get(name) {
                builder = builder.header(name, value.as_bytes());
            }
        }

        let upstream = builder.send().await?;
        let status =
            StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = upstream
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let payload = upstream.bytes().await?;

        let mut response = HttpResponse::build(status);
        if let Some(content_type) = content_type {
            response.insert_header((header::CONTENT_TYPE, content_type));
        }
        Ok(response.body(payload))
    }
}
