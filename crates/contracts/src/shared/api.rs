//! Response envelope of the DMS REST API and the client-side error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::serde_ext::flexible_i64;

pub const STATUS_SUCCESS: &str = "success";

/// Every failure a page can surface to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed with HTTP {0}")]
    Http(u16),
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The API answered `status: "error"`; carries its message.
    #[error("{0}")]
    Rejected(String),
    #[error("Not authenticated. Please log in again.")]
    NotAuthenticated,
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub current_page: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub total_pages: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub total: i64,
}

/// `{status, data?, message?, pagination?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One page of a paginated list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: i64,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Server message, or `default` when the API sent none.
    pub fn message_or(&self, default: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }

    /// Success with a payload becomes `Ok(data)`; anything else an error.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Rejected(self.message_or("Request failed")));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }

    /// Success without caring about the payload (deletes, status patches).
    pub fn into_ack(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(self.message_or("Request failed")))
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// List responses; a missing `pagination` block means a single page.
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        let total_pages = self
            .pagination
            .as_ref()
            .map(|p| p.total_pages)
            .filter(|p| *p > 0)
            .unwrap_or(1);
        let items = self.into_result()?;
        Ok(Page { items, total_pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_yields_data() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"status": "success", "data": [1, 2, 3]})).unwrap();
        assert_eq!(resp.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_error_envelope_carries_server_message() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"status": "error", "message": "Community exists"})).unwrap();
        assert_eq!(
            resp.into_result().unwrap_err(),
            ApiError::Rejected("Community exists".to_string())
        );
    }

    #[test]
    fn test_error_envelope_without_message_uses_default() {
        let resp: ApiResponse<()> = serde_json::from_value(json!({"status": "error"})).unwrap();
        assert_eq!(resp.into_ack().unwrap_err().to_string(), "Request failed");
    }

    #[test]
    fn test_success_without_data_is_decode_error() {
        let resp: ApiResponse<String> = serde_json::from_value(json!({"status": "success"})).unwrap();
        assert!(matches!(resp.into_result(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_page_defaults_to_single_page() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"status": "success", "data": [5]})).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items, vec![5]);
    }

    #[test]
    fn test_page_reads_total_pages() {
        let resp: ApiResponse<Vec<i32>> = serde_json::from_value(json!({
            "status": "success",
            "data": [],
            "pagination": {"current_page": "2", "total_pages": 4, "total": 37}
        }))
        .unwrap();
        assert_eq!(resp.into_page().unwrap().total_pages, 4);
    }
}
