//! Generator that turns model classes into `.sample` stub files, one class
//! skeleton per file with a field declaration for each attribute.

mod context;
mod doc;
mod generator;
mod types;

pub use context::RenderContext;
pub use doc::{doc_with_version, LINE_SEPARATOR};
pub use generator::{SampleGenerator, FILE_EXTENSION, GENERATOR_NAME};
pub use types::{to_target_type, PRIMITIVE_TYPES};

// Re-export the generator contract for convenience
pub use modelgen_common::{GeneratedFiles, Generator};
