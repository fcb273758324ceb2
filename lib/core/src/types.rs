use serde::{Deserialize, Serialize};

/// Page-numbered pagination parameters, as supplied on the query string.
///
/// Pages are 1-based. Each listing endpoint picks its own default limit
/// (properties and compounds use 10, developers 5, policies 50), so the
/// limit stays optional here and is resolved at the call site.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: usize,

    /// Items per page. None = the endpoint's default.
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_page() -> usize {
    1
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: None,
        }
    }
}

impl PageParams {
    /// Resolve the per-page limit against the endpoint default.
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default)
    }

    /// Translate the page number to a row offset: `(page - 1) × limit`.
    /// Page 0 is treated as page 1.
    pub fn offset(&self, limit: usize) -> usize {
        self.page.max(1).saturating_sub(1) * limit
    }
}

/// Result wrapper for list operations.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
