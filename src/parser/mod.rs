pub mod surge;

pub use surge::parse_surge_config;
