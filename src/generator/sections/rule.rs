use super::split_fields;
use crate::generator::yaml::clash::ClashYamlOutput;
use crate::models::SectionBody;

/// Rule types passed through to Clash unchanged
const PASSTHROUGH_RULE_TYPES: [&str; 5] =
    ["DOMAIN-SUFFIX", "DOMAIN-KEYWORD", "DOMAIN", "IP-CIDR", "GEOIP"];

const NO_RESOLVE: &str = "no-resolve";

/// Clash rule emitted for Surge's `FINAL`, whatever policy it names
const FINAL_RULE: &str = "MATCH,Proxy";

/// Convert `[Rule]` lines
///
/// Rule lines are bare keys; any value is ignored. Unsupported rule types
/// are dropped.
pub fn rule_to_clash(mut cfg: ClashYamlOutput, section: SectionBody) -> ClashYamlOutput {
    let rules = section
        .keys()
        .filter_map(|line| build_rule(line))
        .collect::<Vec<_>>();
    cfg.append_rules(rules);
    cfg
}

fn build_rule(line: &str) -> Option<String> {
    let mut fields = split_fields(line);
    let keep = if fields.len() == 4 && fields[3] == NO_RESOLVE {
        4
    } else {
        3
    };
    fields.truncate(keep);

    match fields[0] {
        "FINAL" => Some(FINAL_RULE.to_string()),
        rule_type if PASSTHROUGH_RULE_TYPES.contains(&rule_type) => Some(fields.join(",")),
        _ => None,
    }
}
