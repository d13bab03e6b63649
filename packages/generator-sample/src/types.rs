/// Model primitive type names and the target keywords they render as
pub const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("string", "String"),
    ("int", "Integer"),
    ("number", "BigDecimal"),
    ("boolean", "Boolean"),
    ("date", "LocalDate"),
    ("time", "LocalTime"),
    ("dateTime", "LocalDateTime"),
    ("zonedDateTime", "ZonedDateTime"),
];

/// Map a model type name to the target type name
///
/// Names that are not primitives are model types and are referenced as-is.
pub fn to_target_type(type_name: &str) -> &str {
    PRIMITIVE_TYPES
        .iter()
        .find(|(model, _)| *model == type_name)
        .map(|(_, target)| *target)
        .unwrap_or(type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_types() {
        assert_eq!(to_target_type("string"), "String");
        assert_eq!(to_target_type("int"), "Integer");
        assert_eq!(to_target_type("number"), "BigDecimal");
        assert_eq!(to_target_type("boolean"), "Boolean");
        assert_eq!(to_target_type("date"), "LocalDate");
        assert_eq!(to_target_type("zonedDateTime"), "ZonedDateTime");
    }

    #[test]
    fn test_model_types_pass_through() {
        assert_eq!(to_target_type("Leg"), "Leg");
        assert_eq!(to_target_type("String"), "String");
        // lookup is case sensitive
        assert_eq!(to_target_type("STRING"), "STRING");
    }
}
