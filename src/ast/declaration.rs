// Tue Jan 20 2026 - Alex

use crate::ast::field::Field;
use crate::ast::inherit::Inherit;
use crate::ast::template::TemplateParam;
use crate::ast::value::Value;
use serde::{Deserialize, Serialize};

/// Everything the layout extractor emits is one of these. Children arrays
/// always mirror source declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Declaration {
    Namespace(Namespace),
    Struct(Aggregate),
    Class(Aggregate),
    Enum(Enumeration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Namespace(ns) => &ns.name,
            Self::Struct(agg) | Self::Class(agg) => &agg.name,
            Self::Enum(en) => &en.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    pub children: Vec<Declaration>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// Body of a struct or class; the declaration kind lives on the enclosing
/// `Declaration` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub templates: Option<Vec<TemplateParam>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inherit: Option<Inherit>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub nested: Vec<Declaration>,
    pub fields: Vec<Field>,
}

impl Aggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: None,
            inherit: None,
            nested: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_templates(mut self, templates: Vec<TemplateParam>) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn with_inherit(mut self, inherit: Inherit) -> Self {
        self.inherit = Some(inherit);
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumeration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub base: Option<String>,
    pub values: Vec<EnumValue>,
}

impl Enumeration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            values: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_values(mut self, values: Vec<EnumValue>) -> Self {
        self.values = values;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<Value>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}
