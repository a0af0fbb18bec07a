use std::time::Duration;

use log::debug;
use reqwest::{Client, Proxy, StatusCode};
use url::Url;

use crate::error::FetchError;
use crate::settings::FetchSettings;
use crate::utils::system::get_system_proxy;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyConfig {
    pub proxy: Option<String>,
}

pub fn parse_proxy(proxy_str: &str) -> ProxyConfig {
    match proxy_str {
        "SYSTEM" => {
            let proxy = get_system_proxy();
            ProxyConfig {
                proxy: (!proxy.is_empty()).then_some(proxy),
            }
        }
        "NONE" | "" => ProxyConfig { proxy: None },
        _ => ProxyConfig {
            proxy: Some(proxy_str.to_string()),
        },
    }
}

/// Options for retrieving a remote source document
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub proxy: ProxyConfig,
    pub max_download_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig::from(&FetchSettings::default())
    }
}

impl From<&FetchSettings> for FetchConfig {
    fn from(settings: &FetchSettings) -> Self {
        FetchConfig {
            timeout: Duration::from_secs(settings.timeout_secs),
            user_agent: settings.user_agent.clone(),
            proxy: parse_proxy(&settings.proxy),
            max_download_size: settings.max_download_size,
        }
    }
}

fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::InvalidUrl(format!(
            "{}: unsupported scheme {}",
            url, scheme
        ))),
    }
}

/// Makes an HTTP GET request to the specified URL
///
/// # Arguments
/// * `url` - The URL to request
/// * `config` - Timeout, user agent, proxy and size limit for the request
///
/// # Returns
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Why the request failed
pub async fn web_get_async(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let url = validate_url(url)?;

    let mut client_builder = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str());

    client_builder = match config.proxy.proxy.as_deref() {
        Some(proxy) => {
            let proxy = Proxy::all(proxy).map_err(|e| FetchError::Client(e.to_string()))?;
            client_builder.proxy(proxy)
        }
        None => client_builder.no_proxy(),
    };

    let client = client_builder
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))?;

    debug!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let too_large = |len: usize| config.max_download_size > 0 && len > config.max_download_size;
    if let Some(len) = response.content_length() {
        if usize::try_from(len).map_or(true, too_large) {
            return Err(FetchError::TooLarge(config.max_download_size));
        }
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;
    if too_large(bytes.len()) {
        return Err(FetchError::TooLarge(config.max_download_size));
    }

    String::from_utf8(bytes.to_vec()).map_err(|e| FetchError::Body(e.to_string()))
}

/// Synchronous version of web_get_async that uses tokio runtime to run the async function
pub fn web_get(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| FetchError::Client(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(web_get_async(url, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_proxy() {
        assert_eq!(parse_proxy("NONE"), ProxyConfig { proxy: None });
        assert_eq!(parse_proxy(""), ProxyConfig { proxy: None });
        assert_eq!(
            parse_proxy("socks5://127.0.0.1:1080"),
            ProxyConfig {
                proxy: Some("socks5://127.0.0.1:1080".to_string())
            }
        );
    }

    #[test]
    fn test_fetch_config_from_settings() {
        let settings = FetchSettings {
            timeout_secs: 3,
            user_agent: "ua".to_string(),
            proxy: "http://127.0.0.1:8080".to_string(),
            max_download_size: 1024,
        };
        let config = FetchConfig::from(&settings);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "ua");
        assert_eq!(config.proxy.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.max_download_size, 1024);
    }

    #[test]
    fn test_invalid_url_fails_before_request() {
        let config = FetchConfig::default();
        assert!(matches!(
            web_get("not a url", &config),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            web_get("ftp://example.com/surge.conf", &config),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
