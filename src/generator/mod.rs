pub mod sections;
pub mod yaml;
