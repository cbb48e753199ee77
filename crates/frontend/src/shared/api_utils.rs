//! API utilities for frontend-backend communication
//!
//! The relay listens on port 3000; in production it also serves the
//! storefront, so the URL resolves to the same origin.

/// Port of the backend relay
const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/mail/inquiry");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Origin of the page, used for absolute share links
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
