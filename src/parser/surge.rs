//! Surge configuration parser
//!
//! Splits a Surge document into bracketed sections. Lines are kept as
//! `key=value` pairs or, when they carry no `=`, as bare keys without a value
//! (rule lines and section flags). Nothing is interpreted here and parsing
//! never fails.

use crate::models::{upsert, SectionBody, SurgeConfig, GLOBAL_SECTION};

/// Parse Surge configuration text into its sections
///
/// Lines before the first header land in the `Global` section, which is
/// always present, even for empty input.
pub fn parse_surge_config(data: &str) -> SurgeConfig {
    let mut config = SurgeConfig::new();
    let mut section = GLOBAL_SECTION.to_string();
    let mut body = SectionBody::new();

    for line in data.split('\n') {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }

        if is_section_header(line) {
            let name = line.trim_matches(&['[', ']'][..]).to_string();
            let finished = std::mem::replace(&mut body, SectionBody::new());
            upsert(&mut config, std::mem::replace(&mut section, name), finished);
            continue;
        }

        // Blank lines end up as an empty bare key; no converter reacts to it.
        match line.split_once('=') {
            Some((key, value)) => upsert(
                &mut body,
                key.trim().to_string(),
                Some(value.trim().to_string()),
            ),
            None => upsert(&mut body, line.to_string(), None),
        }
    }

    upsert(&mut config, section, body);
    config
}

fn is_section_header(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_section_header() {
        assert!(is_section_header("[General]"));
        assert!(is_section_header("[]"));
        assert!(!is_section_header("["));
        assert!(!is_section_header("[Proxy"));
        assert!(!is_section_header("Proxy]"));
    }

    #[test]
    fn test_value_keeps_later_equal_signs() {
        let config = parse_surge_config("[Proxy]\nss = ss,host,1,pw=YWJj==");
        let proxy = config.get("Proxy").unwrap();
        assert_eq!(proxy.get("ss"), Some(&Some("ss,host,1,pw=YWJj==".to_string())));
    }

    #[test]
    fn test_nested_brackets_are_stripped() {
        let config = parse_surge_config("[[Rule]]\nFINAL");
        assert!(config.contains_key("Rule"));
    }
}
