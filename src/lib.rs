pub mod error;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;
#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the conversion entry points for easier access
pub use error::{ConvertError, FetchError, SettingsError, Surge2ClashError};
pub use generator::yaml::clash::{ClashProxy, ClashProxyGroup, ClashYamlOutput};
pub use interfaces::surge2clash::{convert, surge_to_clash, surge_url_to_clash};
pub use models::{SectionBody, SurgeConfig, SurgeSection};
pub use parser::parse_surge_config;
pub use settings::Settings;
