// Tue Jan 20 2026 - Alex

use crate::ast::type_desc::TypeDescriptor;
use crate::ast::value::Value;
use serde::{Deserialize, Serialize};

/// One data member of a struct or class. `offset` is present only when the
/// declaration carried a trailing `// <hex>` comment; absence means the
/// offset is unknown at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub offset: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Value>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            offset: None,
            name: name.into(),
            ty,
            default: None,
        }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}
