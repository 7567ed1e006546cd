//! HTTP helpers for the DMS REST API.
//!
//! Every request URL is built by [`api_url`]. The helpers attach the session's
//! bearer token when there is one and unwrap the `{status, data, message}`
//! envelope into `Result<_, ApiError>`.

use contracts::shared::api::{ApiError, ApiResponse, Page};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use crate::system::auth::storage;

pub const DEFAULT_API_BASE: &str = "https://disability-management-api.onrender.com";

/// localStorage key that overrides the API host at runtime.
pub const API_BASE_STORAGE_KEY: &str = "dms_api_base";

/// Picks the API host: runtime override, then build-time `DMS_API_BASE`,
/// then the hosted default. Trailing slashes are dropped.
pub fn resolve_api_base(stored: Option<String>, compiled: Option<&str>) -> String {
    stored
        .filter(|s| !s.trim().is_empty())
        .or_else(|| compiled.filter(|s| !s.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

pub fn api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten());
    resolve_api_base(stored, option_env!("DMS_API_BASE"))
}

/// Full URL for an API path such as `/v1/communities`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Resolves an uploaded file path (`uploads\\x.png`) against the API host.
pub fn media_url_with_base(base: &str, path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
        path
    } else {
        join_url(base, &path)
    }
}

pub fn media_url(path: &str) -> String {
    media_url_with_base(&api_base(), path)
}

/// Generated-initials picture for records without a profile image.
pub fn avatar_url(name: &str, image: Option<&str>) -> String {
    match image.filter(|p| !p.trim().is_empty()) {
        Some(path) => media_url(path),
        None => format!(
            "https://ui-avatars.com/api/?name={}",
            urlencoding::encode(name.trim())
        ),
    }
}

/// `?page=N` for paginated lists.
#[derive(Serialize)]
struct PageQuery {
    page: i64,
}

pub fn paged_path(path: &str, page: i64) -> String {
    match serde_qs::to_string(&PageQuery { page }) {
        Ok(qs) => format!("{}?{}", path, qs),
        Err(_) => path.to_string(),
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_session().and_then(|s| s.bearer()) {
        Some(bearer) => builder.header("Authorization", &bearer),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    log::warn!("request failed: {}", e);
    ApiError::Network(e.to_string())
}

/// Reads the envelope even from 4xx/5xx answers so the server's message wins
/// over a bare status code.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response.text().await.map_err(network)?;
    match serde_json::from_str::<ApiResponse<T>>(&text) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => {
            log::warn!("HTTP {} from API", status);
            Err(ApiError::Http(status))
        }
        Err(e) => {
            log::warn!("cannot decode API response: {}", e);
            Err(ApiError::Decode(e.to_string()))
        }
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    with_auth(builder).send().await.map_err(network)
}

async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(network)
}

/// GET and unwrap `data`.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    read_envelope::<T>(response).await?.into_result()
}

/// GET one page of a list.
pub async fn get_page<T: DeserializeOwned>(path: &str, page: i64) -> Result<Page<T>, ApiError> {
    let response = send(Request::get(&api_url(&paged_path(path, page)))).await?;
    read_envelope::<Vec<T>>(response).await?.into_page()
}

/// GET the raw `data` payload; used by report builders.
pub async fn get_value(path: &str) -> Result<serde_json::Value, ApiError> {
    get_data::<serde_json::Value>(path).await
}

/// Successful write; carries the server's message when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub message: Option<String>,
}

impl Ack {
    pub fn message_or(&self, default: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

fn ack(envelope: ApiResponse<serde_json::Value>) -> Result<Ack, ApiError> {
    let message = envelope.message.clone();
    envelope.into_ack()?;
    Ok(Ack { message })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Patch,
}

/// JSON body write.
pub async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Ack, ApiError> {
    let url = api_url(path);
    let builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
    };
    let request = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let envelope = read_envelope::<serde_json::Value>(send_request(request).await?).await?;
    ack(envelope)
}

#[derive(Serialize)]
struct DeleteBody {
    user_id: i64,
}

/// DELETE carrying `{user_id}` of the acting user.
pub async fn delete_json(path: &str) -> Result<Ack, ApiError> {
    let user_id = storage::load_session()
        .map(|s| s.user_id)
        .ok_or(ApiError::NotAuthenticated)?;
    let request = with_auth(Request::delete(&api_url(path)))
        .json(&DeleteBody { user_id })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let envelope = read_envelope::<serde_json::Value>(send_request(request).await?).await?;
    ack(envelope)
}

/// DELETE without a body (reference data).
pub async fn delete_plain(path: &str) -> Result<Ack, ApiError> {
    let response = send(Request::delete(&api_url(path))).await?;
    let envelope = read_envelope::<serde_json::Value>(response).await?;
    ack(envelope)
}

/// Multipart payload: text parts in order, then the files.
pub struct MultipartBody {
    pub fields: Vec<(&'static str, String)>,
    pub profile_image: Option<File>,
    pub documents: Vec<File>,
}

impl MultipartBody {
    fn to_form_data(&self) -> Result<FormData, ApiError> {
        let js = |e: wasm_bindgen::JsValue| ApiError::Decode(format!("{:?}", e));
        let form = FormData::new().map_err(js)?;
        for (key, value) in &self.fields {
            form.append_with_str(key, value).map_err(js)?;
        }
        if let Some(image) = &self.profile_image {
            form.append_with_blob_and_filename("profile_image", image, &image.name())
                .map_err(js)?;
        }
        for doc in &self.documents {
            form.append_with_blob_and_filename("supporting_documents[]", doc, &doc.name())
                .map_err(js)?;
        }
        Ok(form)
    }
}

async fn send_multipart(builder: RequestBuilder, body: &MultipartBody) -> Result<Ack, ApiError> {
    let request = with_auth(builder)
        .body(body.to_form_data()?)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let envelope = read_envelope::<serde_json::Value>(send_request(request).await?).await?;
    ack(envelope)
}

pub async fn post_multipart(path: &str, body: &MultipartBody) -> Result<Ack, ApiError> {
    send_multipart(Request::post(&api_url(path)), body).await
}

pub async fn patch_multipart(path: &str, body: &MultipartBody) -> Result<Ack, ApiError> {
    send_multipart(Request::patch(&api_url(path)), body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_resolution_order() {
        assert_eq!(
            resolve_api_base(Some("http://localhost:8080/".into()), Some("https://build")),
            "http://localhost:8080"
        );
        assert_eq!(resolve_api_base(Some("  ".into()), Some("https://build/")), "https://build");
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
    }

    #[test]
    fn test_media_paths() {
        assert_eq!(
            media_url_with_base("https://api.test", "uploads\\pwd\\a.png"),
            "https://api.test/uploads/pwd/a.png"
        );
        assert_eq!(
            media_url_with_base("https://api.test", "/uploads/b.png"),
            "https://api.test/uploads/b.png"
        );
        assert_eq!(
            media_url_with_base("https://api.test", "https://cdn.test/c.png"),
            "https://cdn.test/c.png"
        );
    }

    #[test]
    fn test_paged_path() {
        assert_eq!(paged_path("/v1/pwd-records", 3), "/v1/pwd-records?page=3");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://h", "/v1/users"), "https://h/v1/users");
        assert_eq!(join_url("https://h", "v1/users"), "https://h/v1/users");
    }
}
