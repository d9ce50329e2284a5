// Tue Jan 20 2026 - Alex

use crate::ast::value::{is_false, Value};
use serde::{Deserialize, Serialize};

/// Describes one type usage: base name, enclosing namespaces, template
/// arguments, pointer/reference markers, qualifiers and layout attributes.
/// Flags are monotonic while a descriptor is being built: once set they are
/// never cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub namespaces: Vec<String>,
    pub name: Value,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub templates: Option<Vec<TypeDescriptor>>,
    #[serde(skip_serializing_if = "is_false", default)]
    pub ptr: bool,
    #[serde(rename = "ref", skip_serializing_if = "is_false", default)]
    pub reference: bool,
    #[serde(rename = "const", skip_serializing_if = "is_false", default)]
    pub is_const: bool,
    #[serde(rename = "volatile", skip_serializing_if = "is_false", default)]
    pub is_volatile: bool,
    #[serde(rename = "static", skip_serializing_if = "is_false", default)]
    pub is_static: bool,
    #[serde(rename = "constexpr", skip_serializing_if = "is_false", default)]
    pub is_constexpr: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bitfield: Option<u32>,
    #[serde(rename = "fixedArray", skip_serializing_if = "Option::is_none", default)]
    pub fixed_array: Option<Value>,
    #[serde(skip_serializing_if = "is_false", default)]
    pub constant: bool,
}

impl TypeDescriptor {
    pub fn named(name: impl Into<Value>) -> Self {
        Self {
            namespaces: Vec::new(),
            name: name.into(),
            templates: None,
            ptr: false,
            reference: false,
            is_const: false,
            is_volatile: false,
            is_static: false,
            is_constexpr: false,
            bitfield: None,
            fixed_array: None,
            constant: false,
        }
    }

    pub fn with_templates(mut self, templates: Vec<TypeDescriptor>) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn with_ptr(mut self) -> Self {
        self.ptr = true;
        self
    }

    pub fn with_ref(mut self) -> Self {
        self.reference = true;
        self
    }

    pub fn with_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_fixed_array(mut self, size: impl Into<Value>) -> Self {
        self.fixed_array = Some(size.into());
        self
    }

    pub fn with_bitfield(mut self, width: u32) -> Self {
        self.bitfield = Some(width);
        self
    }

    /// Template arguments of this descriptor, innermost included, mutable.
    /// Used by the constant resolution pass.
    pub fn templates_mut(&mut self) -> impl Iterator<Item = &mut TypeDescriptor> {
        self.templates.as_mut().into_iter().flatten()
    }
}
