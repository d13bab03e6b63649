use modelgen_generator_sample::{Generator, SampleGenerator};
use modelgen_model::{Cardinality, ClassDef, Packages, RegularAttribute, RootElement};

fn main() {
    let elements = vec![
        RootElement::Class(
            ClassDef::new("Trade")
                .with_definition("A trade record")
                .with_attribute(RegularAttribute::new("id", "string", Cardinality::single()))
                .with_attribute(RegularAttribute::new("legs", "Leg", Cardinality::many())),
        ),
        RootElement::Class(
            ClassDef::new("Leg")
                .with_attribute(RegularAttribute::new("notional", "number", Cardinality::single())),
        ),
    ];

    let generator = SampleGenerator::new();
    let files = generator.generate(&Packages::new("com.example"), &elements, "1.0");

    for (path, content) in &files {
        println!("// {}", path);
        println!("{}", content);
    }
}
