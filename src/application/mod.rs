//! Application layer - Use cases and orchestration

pub mod convert;
pub mod list_tags;

pub use convert::{ConversionReport, ConvertOptions, ConvertService, ConvertedDocument};
pub use list_tags::ListTagsService;
