use std::path::{Path, PathBuf};

use actix_files::NamedFile;
use actix_web::http::header::{HeaderValue, HOST};
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{debug, warn};
use serde::Serialize;

use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};

/// Headers that describe a single connection and are never forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

/// Largest request body accepted for forwarding.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub struct ProxyState {
    pub config: ProxyConfig,
    pub client: reqwest::Client,
}

impl ProxyState {
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config, client })
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub target: String,
    pub prefix: String,
}

#[get("/__dev-proxy/health")]
pub async fn health(state: web::Data<ProxyState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        target: state.config.target.to_string(),
        prefix: state.config.path_prefix.clone(),
    })
}

/// Registers the health check and the catch-all dispatcher.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(health)
        .default_service(web::to(dispatch));
}

async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<ProxyState>,
) -> Result<HttpResponse> {
    if state.config.matches(req.path()) {
        return forward(&req, body, &state).await;
    }
    match &state.config.static_dir {
        Some(dir) => serve_static(&req, dir),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

async fn forward(req: &HttpRequest, body: web::Bytes, state: &ProxyState) -> Result<HttpResponse> {
    let url = state.config.upstream_url(req.path(), req.query_string());
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|e| ProxyError::BadRequest(e.to_string()))?;
    debug!("{} {} -> {}", req.method(), req.uri(), url);

    let listed = connection_listed(
        req.headers()
            .get_all(actix_web::http::header::CONNECTION)
            .map(|v| v.as_bytes()),
    );
    let mut headers = reqwest::header::HeaderMap::new();
    for (name, value) in req.headers() {
        if skip_header(name.as_str(), &listed) || *name == HOST {
            continue;
        }
        let name = reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes());
        let value = reqwest::header::HeaderValue::from_bytes(value.as_bytes());
        if let (Ok(name), Ok(value)) = (name, value) {
            headers.append(name, value);
        }
    }

    let host = if state.config.change_origin {
        Some(state.config.target_authority())
    } else {
        req.headers()
            .get(HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
    };
    if let Some(host) = host {
        if let Ok(value) = reqwest::header::HeaderValue::from_str(&host) {
            headers.insert(reqwest::header::HOST, value);
        }
    }

    let upstream = state
        .client
        .request(method, url.clone())
        .headers(headers)
        .body(body.to_vec())
        .send()
        .await
        .map_err(|source| {
            warn!("Upstream request to {} failed: {}", url, source);
            ProxyError::Upstream {
                url: url.to_string(),
                source,
            }
        })?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let listed = connection_listed(
        upstream
            .headers()
            .get_all(reqwest::header::CONNECTION)
            .iter()
            .map(|v| v.as_bytes()),
    );
    let mut response = HttpResponse::build(status);
    for (name, value) in upstream.headers() {
        if skip_header(name.as_str(), &listed) {
            continue;
        }
        if let Ok(value) = HeaderValue::from_bytes(value.as_bytes()) {
            response.append_header((name.as_str(), value));
        }
    }

    let bytes = upstream.bytes().await.map_err(|source| ProxyError::Upstream {
        url: url.to_string(),
        source,
    })?;
    Ok(response.body(bytes))
}

/// Serves a file from the built client, falling back to `index.html` so that
/// client-side routes survive a reload.
fn serve_static(req: &HttpRequest, dir: &Path) -> Result<HttpResponse> {
    let file = static_file_for(dir, req.path());
    debug!("Serving {} for {}", file.display(), req.path());
    Ok(NamedFile::open(file)?.into_response(req))
}

pub fn static_file_for(dir: &Path, path: &str) -> PathBuf {
    let relative = path.trim_start_matches('/');
    let escapes = relative.split('/').any(|segment| segment == "..");
    if !relative.is_empty() && !escapes {
        let candidate = dir.join(relative);
        if candidate.is_file() {
            return candidate;
        }
    }
    dir.join("index.html")
}

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Header names nominated as hop-by-hop by `Connection` values, lowercased.
fn connection_listed<'a>(values: impl Iterator<Item = &'a [u8]>) -> Vec<String> {
    values
        .filter_map(|v| std::str::from_utf8(v).ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

fn skip_header(name: &str, listed: &[String]) -> bool {
    is_hop_by_hop(name)
        || name.eq_ignore_ascii_case("content-length")
        || listed.iter().any(|l| name.eq_ignore_ascii_case(l))
}
