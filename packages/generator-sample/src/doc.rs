/// Line separator used in every generated file
pub const LINE_SEPARATOR: &str = "\n";

/// Render a documentation comment carrying the element's definition and the
/// model version, terminated by a line separator
pub fn doc_with_version(definition: &str, version: &str) -> String {
    let definition = definition.trim();
    if definition.is_empty() {
        format!("/** version {} */{}", version, LINE_SEPARATOR)
    } else {
        format!("/** {} — version {} */{}", definition, version, LINE_SEPARATOR)
    }
}
