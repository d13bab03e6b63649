use crate::context::RenderContext;
use crate::doc::{doc_with_version, LINE_SEPARATOR};
use crate::types::to_target_type;
use modelgen_common::{GeneratedFiles, Generator};
use modelgen_model::{ClassDef, Packages, RegularAttribute, RootElement};

/// Name the generator registers under
pub const GENERATOR_NAME: &str = "Sample";

pub const FILE_EXTENSION: &str = "sample";

/// Generates a `.sample` stub per model class
pub struct SampleGenerator {
    name: String,
}

impl SampleGenerator {
    pub fn new() -> Self {
        Self {
            name: GENERATOR_NAME.to_string(),
        }
    }

    /// `<model directory>/<class name>.sample`, always `/`-joined
    pub fn generate_filename(&self, packages: &Packages, class: &ClassDef) -> String {
        format!(
            "{}/{}.{}",
            packages.model().directory_name(),
            class.name,
            FILE_EXTENSION
        )
    }

    pub fn generate_class(&self, packages: &Packages, class: &ClassDef, version: &str) -> String {
        let ctx = RenderContext::new();

        ctx.add(&format!("package {}", packages.model().package_name()));
        ctx.add(LINE_SEPARATOR);
        ctx.add(LINE_SEPARATOR);
        ctx.add(&doc_with_version(&class.definition, version));

        ctx.add_line(&format!("class {} {{", class.name));
        ctx.indent();
        for attribute in &class.attributes {
            compile_attribute(attribute, &ctx);
        }
        ctx.dedent();
        ctx.add_line("}");

        ctx.get_output()
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SampleGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, packages: &Packages, elements: &[RootElement], version: &str) -> GeneratedFiles {
        let mut files = GeneratedFiles::new();
        for class in elements.iter().filter_map(RootElement::as_class) {
            // a later class with the same name replaces the earlier one
            files.insert(
                self.generate_filename(packages, class),
                self.generate_class(packages, class, version),
            );
        }
        files
    }
}

/// Attributes that are neither single-valued nor many are left out
fn compile_attribute(attribute: &RegularAttribute, ctx: &RenderContext) {
    let type_name = to_target_type(&attribute.type_name);

    if attribute.card.is_single() {
        ctx.add_line(&format!("{} {}", type_name, attribute.name));
    } else if attribute.card.is_many() {
        ctx.add_line(&format!("List<{}> {}", type_name, attribute.name));
    }
}
