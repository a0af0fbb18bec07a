//! System utilities

use std::env;

const PROXY_ENV_VARS: [&str; 6] = [
    "all_proxy",
    "ALL_PROXY",
    "http_proxy",
    "HTTP_PROXY",
    "https_proxy",
    "HTTPS_PROXY",
];

/// Get system proxy settings from the environment
///
/// # Returns
///
/// The first non-empty proxy variable, or an empty string if none is set
pub fn get_system_proxy() -> String {
    PROXY_ENV_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|proxy| !proxy.is_empty())
        .unwrap_or_default()
}
