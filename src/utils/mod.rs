pub mod http;
pub mod system;

pub use http::{parse_proxy, web_get, web_get_async, FetchConfig, ProxyConfig};
pub use system::get_system_proxy;
