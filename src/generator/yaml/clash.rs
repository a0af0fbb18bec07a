use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

// Fields are declared in lexicographic key order so the emitted document
// lists keys sorted, matching what existing Clash profiles from this
// converter look like.

/// Represents a complete Clash configuration output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashYamlOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<ClashProxy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_groups: Option<Vec<ClashProxyGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socks_port: Option<u16>,
}

/// A single proxy entry
///
/// `port` stays a string, as written in the Surge line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashProxy {
    pub name: String,
    pub password: String,
    pub port: String,
    pub server: String,
    pub tls: bool,
    #[serde(rename = "type")]
    pub proxy_type: String,
    pub username: String,
}

/// A proxy group listing member proxy names in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashProxyGroup {
    pub name: String,
    pub proxies: Vec<String>,
    #[serde(rename = "type")]
    pub group_type: String,
}

impl ClashYamlOutput {
    /// Serialize to YAML, non-ASCII text is written as is
    pub fn to_yaml(&self) -> Result<String, ConvertError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn append_proxies(&mut self, proxies: impl IntoIterator<Item = ClashProxy>) {
        self.proxies.get_or_insert_with(Vec::new).extend(proxies);
    }

    pub fn append_proxy_groups(&mut self, groups: impl IntoIterator<Item = ClashProxyGroup>) {
        self.proxy_groups.get_or_insert_with(Vec::new).extend(groups);
    }

    pub fn append_rules(&mut self, rules: impl IntoIterator<Item = String>) {
        self.rules.get_or_insert_with(Vec::new).extend(rules);
    }
}
