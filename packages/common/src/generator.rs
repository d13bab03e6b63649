use crate::error::CommonError;
use crate::result::CommonResult;
use modelgen_model::{Packages, RootElement};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Generated output: relative file path (always `/`-separated) to file text
pub type GeneratedFiles = BTreeMap<String, String>;

/// Plugin trait for generating files from model elements
/// Implementations can target different languages
pub trait Generator: Send + Sync {
    /// Human-readable name the generator is registered under
    fn name(&self) -> &str;

    /// Generate one or more files from the given elements
    fn generate(&self, packages: &Packages, elements: &[RootElement], version: &str)
        -> GeneratedFiles;
}

/// Named set of generators the host can dispatch to
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, generator: Box<dyn Generator>) -> CommonResult<()> {
        let name = generator.name().to_string();
        if self.get(&name).is_some() {
            return Err(CommonError::DuplicateGenerator(name));
        }
        debug!(generator = %name, "Registering generator");
        self.generators.push(generator);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators
            .iter()
            .find(|g| g.name() == name)
            .map(|g| g.as_ref())
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    #[instrument(skip(self, packages, elements), fields(elements = elements.len()))]
    pub fn run(
        &self,
        name: &str,
        packages: &Packages,
        elements: &[RootElement],
        version: &str,
    ) -> CommonResult<GeneratedFiles> {
        let generator = self
            .get(name)
            .ok_or_else(|| CommonError::UnknownGenerator(name.to_string()))?;

        let files = generator.generate(packages, elements, version);
        info!(files = files.len(), "Generator finished");
        Ok(files)
    }

    /// Run every registered generator, keyed by generator name
    pub fn run_all(
        &self,
        packages: &Packages,
        elements: &[RootElement],
        version: &str,
    ) -> BTreeMap<String, GeneratedFiles> {
        self.generators
            .iter()
            .map(|g| {
                debug!(generator = %g.name(), "Running generator");
                (g.name().to_string(), g.generate(packages, elements, version))
            })
            .collect()
    }
}
