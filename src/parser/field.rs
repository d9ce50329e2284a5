// Wed Jan 21 2026 - Alex

use crate::ast::{Field, Value};
use crate::parser::descriptor::{next_declarator, DescriptorBuilder};
use crate::parser::eval::{evaluate, parse_number};
use crate::parser::kind::NodeKind;
use crate::parser::node_text;
use crate::parser::offset::extract_offset;
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

static CAST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:static_cast|const_cast|reinterpret_cast|dynamic_cast)\s*<[^>]*>\s*\((.*)\)$")
        .expect("cast pattern")
});

/// Builds one `Field` from a `field_declaration` node. Returns `None` for
/// declarations that are not data members: methods, operators and
/// declarator-less declarations.
pub struct FieldBuilder<'s> {
    src: &'s str,
}

impl<'s> FieldBuilder<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src }
    }

    pub fn build(&self, node: &Node, trailing_comment: Option<&Node>) -> Option<Field> {
        let type_node = node.child_by_field_name("type")?;
        let declarator = node.child_by_field_name("declarator")?;
        if is_function(&declarator) {
            return None;
        }

        let descriptors = DescriptorBuilder::new(self.src);
        let mut ty = descriptors.build(&type_node, Some(&declarator));

        // static storage, cv qualifiers and the bitfield clause are siblings
        // of the type node inside the field declaration.
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match NodeKind::of(&child) {
                NodeKind::StorageClassSpecifier => {
                    if node_text(&child, self.src) == "static" {
                        ty.is_static = true;
                    }
                }
                NodeKind::TypeQualifier => match node_text(&child, self.src) {
                    "const" => ty.is_const = true,
                    "volatile" => ty.is_volatile = true,
                    "constexpr" => ty.is_constexpr = true,
                    _ => {}
                },
                NodeKind::BitfieldClause => {
                    if let Some(width) = child.named_child(0) {
                        if let Value::Int(width) = evaluate(&width, self.src) {
                            ty.bitfield = Some(width as u32);
                        }
                    }
                }
                _ => {}
            }
        }

        let name = declared_name(&declarator, self.src)
            .unwrap_or_else(|| node_text(&declarator, self.src).to_string());

        let mut field = Field::new(name, ty);

        if let Some(default) = node.child_by_field_name("default_value") {
            let text = node_text(&default, self.src);
            field.default = Some(
                parse_number(text).unwrap_or_else(|| Value::Text(strip_cast(text).to_string())),
            );
        }

        if let Some(comment) = trailing_comment {
            field.offset = extract_offset(node_text(comment, self.src));
        }

        Some(field)
    }
}

/// A field declaration whose declarator chain contains a function
/// declarator is a method; methods are not retained.
fn is_function(declarator: &Node) -> bool {
    let mut current = Some(*declarator);
    while let Some(node) = current {
        if NodeKind::of(&node) == NodeKind::FunctionDeclarator {
            return true;
        }
        current = next_declarator(&node);
    }
    false
}

/// The declared identifier at the end of the declarator chain.
fn declared_name(declarator: &Node, src: &str) -> Option<String> {
    let mut current = Some(*declarator);
    while let Some(node) = current {
        match NodeKind::of(&node) {
            NodeKind::FieldIdentifier | NodeKind::Identifier => {
                return Some(node_text(&node, src).to_string());
            }
            _ => {}
        }
        current = next_declarator(&node);
    }
    None
}

/// Normalizes a textual default value by unwrapping a single enclosing
/// named cast: `static_cast<uint32_t>(ESystemPoolSize::Audio)` becomes
/// `ESystemPoolSize::Audio`.
fn strip_cast(text: &str) -> &str {
    match CAST_PATTERN.captures(text) {
        Some(captures) => captures.get(1).map(|m| m.as_str().trim()).unwrap_or(text),
        None => text,
    }
}
