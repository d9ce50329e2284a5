// Wed Jan 21 2026 - Alex

use crate::ast::{EnumValue, Enumeration, Value};
use crate::parser::eval::{evaluate, parse_number};
use crate::parser::kind::NodeKind;
use crate::parser::node_text;
use tree_sitter::Node;

/// Builds an `Enumeration` with fully assigned values.
///
/// A running counter mirrors enumerator assignment: an enumerator without
/// an initializer takes the counter and advances it; an explicit integer
/// literal takes its own value and moves the counter past it; an alias of
/// an earlier enumerator copies that enumerator's resolved value and a
/// computed initializer (shift/arithmetic) is evaluated — neither touches
/// the counter.
pub struct EnumBuilder<'s> {
    src: &'s str,
}

impl<'s> EnumBuilder<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src }
    }

    pub fn build(&self, node: &Node) -> Option<Enumeration> {
        let name = node.child_by_field_name("name")?;
        let body = node.child_by_field_name("body")?;

        let mut decl = Enumeration::new(node_text(&name, self.src));
        if let Some(base) = node.child_by_field_name("base") {
            decl.base = Some(node_text(&base, self.src).to_string());
        }

        let mut counter: i64 = 0;
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            if NodeKind::of(&child) != NodeKind::Enumerator {
                continue;
            }
            let Some(name) = child.child_by_field_name("name") else {
                continue;
            };
            let value = match child.child_by_field_name("value") {
                None => {
                    let value = Value::Int(counter);
                    counter += 1;
                    value
                }
                Some(init) => self.explicit_value(&init, &decl.values, &mut counter),
            };
            decl.values.push(EnumValue {
                name: node_text(&name, self.src).to_string(),
                value: Some(value),
            });
        }
        Some(decl)
    }

    fn explicit_value(&self, init: &Node, earlier: &[EnumValue], counter: &mut i64) -> Value {
        match NodeKind::of(init) {
            NodeKind::NumberLiteral => {
                let text = node_text(init, self.src);
                match parse_number(text) {
                    Some(Value::Int(value)) => {
                        *counter = value + 1;
                        Value::Int(value)
                    }
                    Some(other) => other,
                    None => Value::Text(text.to_string()),
                }
            }
            NodeKind::Identifier => {
                let text = node_text(init, self.src);
                match earlier.iter().find(|entry| entry.name == text) {
                    Some(entry) => entry.value.clone().unwrap_or(Value::Int(0)),
                    None => Value::Text(text.to_string()),
                }
            }
            NodeKind::QualifiedIdentifier => Value::Text(node_text(init, self.src).to_string()),
            _ => evaluate(init, self.src),
        }
    }
}
