use log::warn;

use super::split_fields;
use crate::generator::yaml::clash::{ClashProxy, ClashYamlOutput};
use crate::models::SectionBody;

/// Surge proxy types that are spelled differently in Clash
const PROXY_TYPE_ALIASES: &[(&str, &str)] = &[("https", "http")];

/// type, server, port, username, password
const MIN_PROXY_FIELDS: usize = 5;

/// Convert `[Proxy]` lines of the form `name = type, server, port, user, pass`
///
/// Lines with too few fields are logged and skipped.
pub fn proxy_to_clash(mut cfg: ClashYamlOutput, section: SectionBody) -> ClashYamlOutput {
    let proxies = section
        .into_iter()
        .filter_map(|(name, line)| line.and_then(|line| build_proxy(name, &line)))
        .collect::<Vec<_>>();
    cfg.append_proxies(proxies);
    cfg
}

fn build_proxy(name: String, line: &str) -> Option<ClashProxy> {
    let fields = split_fields(line);
    if fields.len() < MIN_PROXY_FIELDS {
        warn!("invalid proxy config {}", line);
        return None;
    }

    let surge_type = fields[0];
    let proxy_type = PROXY_TYPE_ALIASES
        .iter()
        .find(|(from, _)| *from == surge_type)
        .map_or(surge_type, |(_, to)| *to);

    Some(ClashProxy {
        name,
        password: fields[4].to_string(),
        port: fields[2].to_string(),
        server: fields[1].to_string(),
        tls: surge_type == "https",
        proxy_type: proxy_type.to_string(),
        username: fields[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_proxy_https() {
        let proxy = build_proxy("hk".to_string(), "https, 1.2.3.4, 443, user, pass").unwrap();
        assert_eq!(proxy.proxy_type, "http");
        assert!(proxy.tls);
        assert_eq!(proxy.server, "1.2.3.4");
        assert_eq!(proxy.port, "443");
        assert_eq!(proxy.username, "user");
        assert_eq!(proxy.password, "pass");
    }

    #[test]
    fn test_build_proxy_keeps_unaliased_type() {
        let proxy = build_proxy("s5".to_string(), "socks5,host,1080,u,p,udp-relay=true").unwrap();
        assert_eq!(proxy.proxy_type, "socks5");
        assert!(!proxy.tls);
    }

    #[test]
    fn test_build_proxy_too_few_fields() {
        assert!(build_proxy("bad".to_string(), "http,host,80,user").is_none());
    }
}
