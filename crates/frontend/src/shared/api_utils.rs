//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base URL for API requests
///
/// Constructed from the current window location, using port 3000 for the
/// backend server ("http://localhost:3000", "https://example.com:3000").
/// Empty string if window is not available.
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
