pub mod generate;
pub mod init;
pub mod list;

pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use list::{list, ListArgs};

use modelgen_common::GeneratorRegistry;
use modelgen_generator_sample::SampleGenerator;

/// Registry holding every generator built into the CLI
pub fn builtin_registry() -> anyhow::Result<GeneratorRegistry> {
    let mut registry = GeneratorRegistry::new();
    registry.register(Box::new(SampleGenerator::new()))?;
    Ok(registry)
}
