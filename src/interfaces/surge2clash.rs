use log::debug;

use crate::error::{ConvertError, Surge2ClashError};
use crate::generator::sections::{
    general_to_clash, proxy_group_to_clash, proxy_to_clash, rule_to_clash,
};
use crate::generator::yaml::clash::ClashYamlOutput;
use crate::models::{SurgeConfig, SurgeSection};
use crate::parser::parse_surge_config;
use crate::utils::http::{web_get_async, FetchConfig};

/// Fold parsed Surge sections, in document order, into a Clash configuration
pub fn convert(parsed: SurgeConfig) -> Result<ClashYamlOutput, ConvertError> {
    parsed
        .into_iter()
        .try_fold(ClashYamlOutput::default(), |cfg, (name, section)| {
            let Some(kind) = SurgeSection::from_name(&name) else {
                debug!("Skipping unsupported section [{}]", name);
                return Ok(cfg);
            };
            debug!("Converting section [{}] with {} item(s)", kind, section.len());
            match kind {
                SurgeSection::General => general_to_clash(cfg, section),
                SurgeSection::Proxy => Ok(proxy_to_clash(cfg, section)),
                SurgeSection::ProxyGroup => Ok(proxy_group_to_clash(cfg, section)),
                SurgeSection::Rule => Ok(rule_to_clash(cfg, section)),
            }
        })
}

/// Convert Surge configuration text into Clash YAML
pub fn surge_to_clash(surge_data: &str) -> Result<String, ConvertError> {
    convert(parse_surge_config(surge_data))?.to_yaml()
}

/// Fetch a Surge configuration from `url` and convert it into Clash YAML
pub async fn surge_url_to_clash(
    url: &str,
    fetch_config: &FetchConfig,
) -> Result<String, Surge2ClashError> {
    let body = web_get_async(url, fetch_config).await?;
    Ok(surge_to_clash(&body)?)
}
