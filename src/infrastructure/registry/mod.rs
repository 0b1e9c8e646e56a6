//! Registry source implementations

mod json_file;
mod static_source;

pub use json_file::JsonFileSource;
pub use static_source::StaticSource;
