//! Data models for the Surge side of a conversion
//!
//! A Surge configuration is parsed into a [`SurgeConfig`]: an ordered mapping
//! from section name to [`SectionBody`]. Bodies map each line's key to an
//! optional value, `None` marking a bare flag line without `=`.
//!
//! ```rust
//! use surge2clash::{parse_surge_config, SurgeSection};
//!
//! let config = parse_surge_config("[Rule]\nFINAL,DIRECT");
//! assert!(config.contains_key("Global"));
//! assert_eq!(SurgeSection::from_name("Rule"), Some(SurgeSection::Rule));
//! ```

mod surge_config;
mod surge_section;

pub use surge_config::*;
pub use surge_section::*;
