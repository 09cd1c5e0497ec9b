//! Redirect handlers as axum routers.
//!
//! Every handler owns an immutable path to URL table and a fallback router.
//! A request whose path is in the table gets a `302 Found` to the mapped URL;
//! any other request is passed to the fallback untouched. Because the
//! fallback is itself a [`Router`], handlers chain into a linear list of
//! lookups that ends in whatever catch-all the caller supplies.

use crate::error::Result;
use crate::mapping::{build_map, parse_json, parse_yaml, MappingFormat, PathUrl};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tower::ServiceExt;

#[derive(Clone)]
struct RedirectState {
    paths_to_urls: Arc<HashMap<String, String>>,
    fallback: Router,
}

/// Redirect every path found in `paths_to_urls`, deferring the rest to `fallback`.
pub fn map_handler(paths_to_urls: HashMap<String, String>, fallback: Router) -> Router {
    log::debug!("Building redirect handler with {} paths", paths_to_urls.len());
    let state = RedirectState {
        paths_to_urls: Arc::new(paths_to_urls),
        fallback,
    };
    Router::new().fallback(resolve).with_state(state)
}

/// Build a redirect handler from a YAML list of `path`/`url` records.
///
/// The only errors are for malformed YAML, including records without both fields.
pub fn yaml_handler(yml: &[u8], fallback: Router) -> Result<Router> {
    let path_urls = parse_yaml(yml)?;
    Ok(rules_handler(path_urls, fallback))
}

/// Build a redirect handler from a JSON array of `path`/`url` objects.
pub fn json_handler(json: &[u8], fallback: Router) -> Result<Router> {
    let path_urls = parse_json(json)?;
    Ok(rules_handler(path_urls, fallback))
}

/// Build a redirect handler from data in the given format.
pub fn format_handler(format: MappingFormat, data: &[u8], fallback: Router) -> Result<Router> {
    match format {
        MappingFormat::Yaml => yaml_handler(data, fallback),
        MappingFormat::Json => json_handler(data, fallback),
    }
}

fn rules_handler(path_urls: Vec<PathUrl>, fallback: Router) -> Router {
    map_handler(build_map(path_urls), fallback)
}

/// Catch-all router answering every request with `Hello World.`.
pub fn hello_router() -> Router {
    Router::new().fallback(hello)
}

async fn hello() -> &'static str {
    "Hello World.\n"
}

async fn resolve(State(state): State<RedirectState>, request: Request) -> Response {
    let path = lookup_path(request.uri().path());
    if let Some(dest) = state.paths_to_urls.get(path.as_ref()) {
        log::debug!("Redirecting {} to {}", path, dest);
        return found(dest);
    }

    let result: std::result::Result<Response, Infallible> = state.fallback.oneshot(request).await;
    match result {
        Ok(response) => response,
        Err(never) => match never {},
    }
}

/// Percent-decoded request path, or the raw path if it does not decode to UTF-8.
fn lookup_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// `302 Found` to `dest`. Relative targets are sent as-is for the client to resolve.
fn found(dest: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, escape_non_ascii(dest))]).into_response()
}

/// Hex-escape every non-ASCII byte so the URL is a valid header value.
fn escape_non_ascii(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for byte in url.bytes() {
        if byte.is_ascii() {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("%{:02X}", byte));
        }
    }
    escaped
}
