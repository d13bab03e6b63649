use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level node of a model
///
/// Generators usually care about one or two kinds and skip the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RootElement {
    /// Data class with attributes
    Class(ClassDef),

    /// Enumeration of named values
    #[serde(rename = "enum")]
    Enumeration(EnumDef),

    /// Basic type declared by the model itself
    DataType(DataTypeDef),

    /// Function signature
    Function(FunctionDef),
}

impl RootElement {
    /// Name of the element, whatever its kind
    pub fn name(&self) -> &str {
        match self {
            RootElement::Class(class) => &class.name,
            RootElement::Enumeration(enumeration) => &enumeration.name,
            RootElement::DataType(data_type) => &data_type.name,
            RootElement::Function(function) => &function.name,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDef> {
        match self {
            RootElement::Class(class) => Some(class),
            _ => None,
        }
    }
}

/// A data class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDef {
    pub name: String,

    /// Free-text description, may be empty
    #[serde(default)]
    pub definition: String,

    /// Attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<RegularAttribute>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: String::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_attribute(mut self, attribute: RegularAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// An attribute of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularAttribute {
    pub name: String,

    /// Name of a primitive type (`string`, `number`, ...) or of a model type
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default = "Cardinality::single")]
    pub card: Cardinality,
}

impl RegularAttribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, card: Cardinality) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            card,
        }
    }
}

/// Occurrence constraint of an attribute
///
/// `sup` of `None` means unbounded. The many flag can be set explicitly;
/// otherwise it follows from the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cardinality {
    #[serde(default)]
    pub inf: u32,

    #[serde(default)]
    pub sup: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many: Option<bool>,
}

impl Cardinality {
    /// Exactly one (`1..1`)
    pub fn single() -> Self {
        Self::bounded(1, Some(1))
    }

    /// Zero or one (`0..1`)
    pub fn optional() -> Self {
        Self::bounded(0, Some(1))
    }

    /// Zero or more (`0..*`)
    pub fn many() -> Self {
        Self::bounded(0, None)
    }

    /// Never present (`0..0`)
    pub fn absent() -> Self {
        Self::bounded(0, Some(0))
    }

    pub fn bounded(inf: u32, sup: Option<u32>) -> Self {
        Self {
            inf,
            sup,
            many: None,
        }
    }

    /// Force the many flag regardless of the upper bound
    pub fn with_many(mut self, many: bool) -> Self {
        self.many = Some(many);
        self
    }

    /// Whether the upper bound is exactly one
    pub fn is_single(&self) -> bool {
        self.sup == Some(1)
    }

    pub fn is_many(&self) -> bool {
        self.many.unwrap_or_else(|| self.sup.map_or(true, |sup| sup > 1))
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sup {
            Some(sup) => write!(f, "{}..{}", self.inf, sup),
            None => write!(f, "{}..*", self.inf),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeDef {
    pub name: String,
    #[serde(default)]
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub inputs: Vec<RegularAttribute>,
    #[serde(default)]
    pub output: Option<RegularAttribute>,
}
