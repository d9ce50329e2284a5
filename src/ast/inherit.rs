// Tue Jan 20 2026 - Alex

use crate::ast::type_desc::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// Single-base inheritance clause. A source declaration with multiple bases
/// keeps only the first; the remainder is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inherit {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub namespaces: Vec<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub templates: Option<Vec<TypeDescriptor>>,
}

impl Inherit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            visibility: None,
            namespaces: Vec::new(),
            name: name.into(),
            templates: None,
        }
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    pub fn with_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_templates(mut self, templates: Vec<TypeDescriptor>) -> Self {
        self.templates = Some(templates);
        self
    }
}
