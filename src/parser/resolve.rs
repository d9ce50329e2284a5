// Wed Jan 21 2026 - Alex

use crate::ast::{Aggregate, Declaration, TypeDescriptor, Value};
use std::collections::HashMap;

/// Second pass over a raw forest: substitutes named-constant references in
/// fixed-array sizes and template arguments with the defaults of sibling
/// fields in the same aggregate. Pure — consumes the raw forest and
/// returns the final one; resolution never crosses an aggregate boundary.
pub fn resolve(declarations: Vec<Declaration>) -> Vec<Declaration> {
    declarations
        .into_iter()
        .map(resolve_declaration)
        .collect()
}

fn resolve_declaration(declaration: Declaration) -> Declaration {
    match declaration {
        Declaration::Namespace(mut ns) => {
            ns.children = resolve(ns.children);
            Declaration::Namespace(ns)
        }
        Declaration::Struct(aggregate) => Declaration::Struct(resolve_aggregate(aggregate)),
        Declaration::Class(aggregate) => Declaration::Class(resolve_aggregate(aggregate)),
        Declaration::Enum(en) => Declaration::Enum(en),
    }
}

fn resolve_aggregate(mut aggregate: Aggregate) -> Aggregate {
    aggregate.nested = resolve(aggregate.nested);

    let defaults: HashMap<String, Value> = aggregate
        .fields
        .iter()
        .filter_map(|field| {
            field
                .default
                .clone()
                .map(|default| (field.name.clone(), default))
        })
        .collect();

    for field in &mut aggregate.fields {
        resolve_descriptor(&mut field.ty, &defaults);
    }
    aggregate
}

fn resolve_descriptor(ty: &mut TypeDescriptor, defaults: &HashMap<String, Value>) {
    let symbolic_size = match &ty.fixed_array {
        Some(Value::Text(name)) => Some(name.clone()),
        _ => None,
    };
    if let Some(name) = symbolic_size {
        match defaults.get(&name) {
            Some(default @ (Value::Int(_) | Value::Float(_))) => {
                ty.fixed_array = Some(default.clone());
            }
            Some(Value::Text(symbolic)) => {
                // The referenced constant is itself symbolic (an enum member
                // reference); downstream consumers resolve it externally.
                ty.fixed_array = Some(Value::Text(symbolic.clone()));
                ty.constant = true;
            }
            None => {
                // A qualified name can never refer to a sibling field; it
                // stays symbolic for external resolution.
                if name.contains("::") {
                    ty.constant = true;
                }
            }
        }
    }

    for argument in ty.templates_mut() {
        let symbolic_name = match &argument.name {
            Value::Text(name) => Some(name.clone()),
            _ => None,
        };
        if let Some(name) = symbolic_name {
            match defaults.get(&name) {
                Some(default @ (Value::Int(_) | Value::Float(_))) => {
                    argument.name = default.clone();
                }
                Some(Value::Text(symbolic)) => {
                    argument.name = Value::Text(symbolic.clone());
                    argument.constant = true;
                }
                None => {}
            }
        }
        resolve_descriptor(argument, defaults);
    }
}
