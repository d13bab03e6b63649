use serde::{Deserialize, Serialize};

/// A single namespace: its dotted package name and the directory files for
/// it are written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    package_name: String,
    directory_name: String,
}

impl Package {
    pub fn new(package_name: impl Into<String>, directory_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            directory_name: directory_name.into(),
        }
    }

    /// Derive the directory from the dotted name (`a.b.c` -> `a/b/c`)
    pub fn from_package_name(package_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        let directory_name = package_name.replace('.', "/");
        Self::new(package_name, directory_name)
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }
}

/// The sub-namespaces generated code is placed in, rooted at a model namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packages {
    namespace: String,
    model: Package,
}

impl Packages {
    /// Packages for `namespace`; the model package is `<namespace>.model`
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let model = if namespace.is_empty() {
            Package::from_package_name("model")
        } else {
            Package::from_package_name(format!("{}.model", namespace))
        };
        Self { namespace, model }
    }

    /// Replace the derived model package with an explicit one
    pub fn with_model(mut self, model: Package) -> Self {
        self.model = model;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn model(&self) -> &Package {
        &self.model
    }
}
