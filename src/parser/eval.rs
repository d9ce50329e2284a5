// Tue Jan 20 2026 - Alex

use crate::ast::Value;
use crate::parser::kind::NodeKind;
use crate::parser::node_text;
use tree_sitter::Node;

/// Evaluates a constant expression node to a number, or to symbolic text
/// when the expression is an identifier that must be resolved later. Any
/// unsupported form logs an error and evaluates to 0 so the surrounding
/// field is still emitted.
pub fn evaluate(node: &Node, src: &str) -> Value {
    match NodeKind::of(node) {
        NodeKind::NumberLiteral => {
            let text = node_text(node, src);
            match parse_number(text) {
                Some(value) => value,
                None => {
                    log::error!("Malformed number literal: {}", text);
                    Value::Int(0)
                }
            }
        }
        NodeKind::ParenthesizedExpression => match node.named_child(0) {
            Some(inner) => evaluate(&inner, src),
            None => Value::Int(0),
        },
        NodeKind::BinaryExpression => {
            let left = node.child_by_field_name("left");
            let operator = node.child_by_field_name("operator");
            let right = node.child_by_field_name("right");
            match (left, operator, right) {
                (Some(left), Some(operator), Some(right)) => {
                    let a = evaluate(&left, src);
                    let b = evaluate(&right, src);
                    apply(node_text(&operator, src), a, b)
                }
                _ => {
                    log::error!("Malformed binary expression: {}", node_text(node, src));
                    Value::Int(0)
                }
            }
        }
        NodeKind::Identifier | NodeKind::QualifiedIdentifier | NodeKind::FieldIdentifier => {
            Value::Text(node_text(node, src).to_string())
        }
        _ => {
            log::error!("Missing expression parser for: {}", node.kind());
            Value::Int(0)
        }
    }
}

fn apply(op: &str, a: Value, b: Value) -> Value {
    match (&a, &b) {
        (Value::Int(a), Value::Int(b)) => {
            let (a, b) = (*a, *b);
            match op {
                "+" => Value::Int(a.wrapping_add(b)),
                "-" => Value::Int(a.wrapping_sub(b)),
                "*" => Value::Int(a.wrapping_mul(b)),
                "/" | "%" if b == 0 => {
                    log::error!("Division by zero in constant expression");
                    Value::Int(0)
                }
                "/" => Value::Int(a / b),
                "%" => Value::Int(a % b),
                "<<" => Value::Int(a << (b & 63)),
                ">>" => Value::Int(a >> (b & 63)),
                _ => {
                    log::error!("Unsupported operator: {}", op);
                    Value::Int(0)
                }
            }
        }
        _ if a.is_numeric() && b.is_numeric() => {
            let a = as_float(&a);
            let b = as_float(&b);
            match op {
                "+" => Value::Float(a + b),
                "-" => Value::Float(a - b),
                "*" => Value::Float(a * b),
                "/" => Value::Float(a / b),
                "%" => Value::Float(a % b),
                _ => {
                    log::error!("Unsupported float operator: {}", op);
                    Value::Int(0)
                }
            }
        }
        _ => {
            log::error!("Non-numeric operand in constant expression");
            Value::Int(0)
        }
    }
}

fn as_float(value: &Value) -> f64 {
    match value {
        Value::Int(value) => *value as f64,
        Value::Float(value) => *value,
        Value::Text(_) => 0.0,
    }
}

/// Parses a C++ number literal: decimal, `0x` hex, `0b` binary, and floats
/// (any literal containing a decimal point). Integer and float suffixes
/// (`u`, `l`, `f` and combinations) are tolerated.
pub fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();

    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let digits = digits.trim_end_matches(|c| matches!(c, 'u' | 'U' | 'l' | 'L'));
        return i64::from_str_radix(digits, 16).ok().map(Value::Int);
    }
    if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        let digits = digits.trim_end_matches(|c| matches!(c, 'u' | 'U' | 'l' | 'L'));
        return i64::from_str_radix(digits, 2).ok().map(Value::Int);
    }
    if text.contains('.') {
        let digits = text.trim_end_matches(|c| matches!(c, 'f' | 'F' | 'l' | 'L'));
        return digits.parse::<f64>().ok().map(Value::Float);
    }

    let digits = text.trim_end_matches(|c| matches!(c, 'u' | 'U' | 'l' | 'L'));
    digits.parse::<i64>().ok().map(Value::Int)
}
