//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Fallback used when neither the build environment nor the browser window
/// can tell us where the backend lives (e.g. native unit tests).
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `API_BASE_URL` captured at compile time (`API_BASE_URL=https://... trunk build`)
/// 2. the current window location, using port 8080 for the backend server
/// 3. [`DEFAULT_API_BASE`]
///
/// # Returns
/// - API base URL like "http://localhost:8080/api", without a trailing slash
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/products/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(configured) = option_env!("API_BASE_URL") {
        return normalize_base(configured);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return DEFAULT_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:8080/api", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `base` - API base as returned by [`api_base`]
/// * `path` - The API path (should start with "/")
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(
            api_url("http://localhost:8080/api/", "/products"),
            "http://localhost:8080/api/products"
        );
        assert_eq!(
            api_url("https://shop.example.com/api", "/brands"),
            "https://shop.example.com/api/brands"
        );
    }
}
