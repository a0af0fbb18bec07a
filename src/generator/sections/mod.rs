//! Per-section conversion rules
//!
//! Each converter takes the Clash output built so far plus one parsed Surge
//! section and returns the updated output. Sections of the same kind may
//! appear more than once; list fields are appended to, never replaced.

mod general;
mod proxy;
mod proxy_group;
mod rule;

pub use general::general_to_clash;
pub use proxy::proxy_to_clash;
pub use proxy_group::proxy_group_to_clash;
pub use rule::rule_to_clash;

/// Split a comma separated Surge value into trimmed fields
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
