use super::split_fields;
use crate::generator::yaml::clash::{ClashProxyGroup, ClashYamlOutput};
use crate::models::SectionBody;

/// Convert `[Proxy Group]` lines of the form `name = type, member, member, ...`
pub fn proxy_group_to_clash(mut cfg: ClashYamlOutput, section: SectionBody) -> ClashYamlOutput {
    let groups = section
        .into_iter()
        .filter_map(|(name, line)| line.map(|line| build_proxy_group(name, &line)))
        .collect::<Vec<_>>();
    cfg.append_proxy_groups(groups);
    cfg
}

fn build_proxy_group(name: String, line: &str) -> ClashProxyGroup {
    let mut fields = split_fields(line).into_iter();
    let group_type = fields.next().unwrap_or_default().to_string();
    ClashProxyGroup {
        name,
        proxies: fields.map(str::to_string).collect(),
        group_type,
    }
}
