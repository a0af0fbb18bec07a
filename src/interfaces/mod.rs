pub mod surge2clash;
