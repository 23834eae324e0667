use crate::proxy::{ProxyError, UpstreamClient};
use actix_files::Files;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Route, web};
use log::error;
use serde_json::json;
use shared::{Endpoint, HttpMethod};
use strum::IntoEnumIterator;

/// `max_body_bytes` bounds what the proxy reads before forwarding; larger
/// bodies are answered with 413.
pub fn configure_routes(
    cfg: &mut web::ServiceConfig,
    frontend_dir: String,
    max_body_bytes: usize,
) {
    cfg.app_data(web::PayloadConfig::new(max_body_bytes))
        .service(web::resource("/health").route(web::get().to(health)));

    for endpoint in Endpoint::iter() {
        cfg.service(web::resource(endpoint.path()).route(route_for(endpoint.method()).to(proxy)));
    }

    cfg.service(web::resource("/media/{tail:.*}").route(web::get().to(proxy)))
        // Mounted at the root, so it has to come last.
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

fn route_for(method: HttpMethod) -> Route {
    match method {
        HttpMethod::Get => web::get(),
        HttpMethod::Post => web::post(),
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn proxy(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<UpstreamClient>,
) -> Result<HttpResponse, ProxyError> {
    let method = if req.method() == Method::POST {
        HttpMethod::Post
    } else {
        HttpMethod::Get
    };

    upstream.forward(method, &req, body).await.map_err(|e| {
        error!("Forwarding {} failed: {}", req.path(), e);
        e
    })
}
