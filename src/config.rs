//! Frontend Configuration
//!
//! The API base URL defaults to the local json-server and can be
//! overridden by the host page:
//!
//! ```html
//! <meta name="shopping-list-api" content="https://api.example.com">
//! ```

/// Backend used when the page does not configure one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

const API_META_NAME: &str = "shopping-list-api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL that `/items` is appended to
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            api_base_url: url.into(),
        }
    }

    /// Read the `<meta name="shopping-list-api">` override, falling back to the default
    pub fn from_document() -> Self {
        match Self::meta_base_url() {
            Some(url) => {
                log::info!("[CONFIG] API base URL from page: {}", url);
                Self::with_base_url(url)
            }
            None => {
                log::info!("[CONFIG] API base URL (default): {}", DEFAULT_API_BASE_URL);
                Self::default()
            }
        }
    }

    fn meta_base_url() -> Option<String> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{}\"]", API_META_NAME);
        let meta = document.query_selector(&selector).ok()??;
        meta.get_attribute("content")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }
}
