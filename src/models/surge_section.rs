/// Surge sections that have a Clash counterpart
///
/// Every other section name is dropped during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurgeSection {
    General,
    Proxy,
    ProxyGroup,
    Rule,
}

impl SurgeSection {
    /// Resolve a section header name, `None` for sections without a converter
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "General" => Some(SurgeSection::General),
            "Proxy" => Some(SurgeSection::Proxy),
            "Proxy Group" => Some(SurgeSection::ProxyGroup),
            "Rule" => Some(SurgeSection::Rule),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurgeSection::General => "General",
            SurgeSection::Proxy => "Proxy",
            SurgeSection::ProxyGroup => "Proxy Group",
            SurgeSection::Rule => "Rule",
        }
    }
}

impl std::fmt::Display for SurgeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
