//! Reverse proxy to the store API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. `/api/*` is forwarded to the
//! configured origin unchanged; `/media/*` is forwarded with the prefix
//! stripped, so relative image paths from the API resolve against the store
//! origin. Cookies travel both ways untouched; the store owns the session.
//!
//! Bodies are buffered (requests up to the configured limit, responses in
//! full). Store responses are small JSON documents and images.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::state::AppState;

/// Path prefix for store media; stripped before forwarding.
pub const MEDIA_PREFIX: &str = "/media";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Request body is larger than {limit} bytes.")]
    BodyTooLarge { limit: usize },
    #[error("The store service is unavailable right now. Please try again later.")]
    Upstream(#[source] reqwest::Error),
    #[error("The store service sent an unreadable response.")]
    BadResponse(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) | Self::BadResponse(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Forward one request to the store API and relay its answer.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let request_id = Uuid::new_v4();
    let (parts, body) = request.into_parts();
    let limit = state.config.proxy.max_body_bytes;

    if declared_length(&parts.headers).is_some_and(|len| len > limit) {
        tracing::debug!(%request_id, path = parts.uri.path(), "request body over limit");
        return Err(ProxyError::BodyTooLarge { limit });
    }
    let body = to_bytes(body, limit).await.map_err(|_| ProxyError::BodyTooLarge { limit })?;

    let url = upstream_url(&state.config.api_origin, parts.uri.path(), parts.uri.query());
    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(end_to_end_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%request_id, method = %parts.method, %url, error = %e, "store request failed");
            ProxyError::Upstream(e)
        })?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%request_id, %url, error = %e, "store response body failed");
        ProxyError::Upstream(e)
    })?;
    tracing::debug!(%request_id, method = %parts.method, path = parts.uri.path(), status = status.as_u16(), "proxied");

    let mut response = Response::builder()
        .status(status)
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::BadResponse(e.to_string()))?;
    response.headers_mut().extend(headers);
    Ok(response)
}

/// Upstream URL for a local path: `/media` is stripped, everything else is kept.
pub(crate) fn upstream_url(origin: &str, path: &str, query: Option<&str>) -> String {
    let path = match path.strip_prefix(MEDIA_PREFIX) {
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    };
    match query {
        Some(q) if !q.is_empty() => format!("{origin}{path}?{q}"),
        _ => format!("{origin}{path}"),
    }
}

/// Headers that describe one connection and must not be forwarded.
pub(crate) fn is_hop_by_hop(name: &HeaderName) -> bool {
    [
        header::CONNECTION,
        header::PROXY_AUTHENTICATE,
        header::PROXY_AUTHORIZATION,
        header::TE,
        header::TRAILER,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
        header::HOST,
        header::CONTENT_LENGTH,
    ]
    .contains(name)
        || name.as_str() == "keep-alive"
}

/// Copy `headers` minus hop-by-hop ones and any named in `Connection`.
///
/// `Content-Length` is dropped as well; both the client and axum set it from
/// the buffered body.
pub(crate) fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || listed.iter().any(|token| token == name.as_str()) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
}
