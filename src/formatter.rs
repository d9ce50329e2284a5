// Thu Jan 22 2026 - Alex

use crate::ast::{
    Aggregate, Declaration, Enumeration, Field, Namespace, TemplateParam, TypeDescriptor, Value,
};
use itertools::Itertools;

/// Renders one declaration back into canonical C++ text. Feeding the
/// output through the parser again reproduces a structurally equal
/// declaration; the round trip is the formatter's correctness oracle.
pub fn format_declaration(declaration: &Declaration, indent: usize) -> String {
    match declaration {
        Declaration::Namespace(ns) => format_namespace(ns, indent),
        Declaration::Struct(aggregate) => format_aggregate("struct", aggregate, indent),
        Declaration::Class(aggregate) => format_aggregate("class", aggregate, indent),
        Declaration::Enum(en) => format_enum(en, indent),
    }
}

/// Renders a whole forest, declarations separated only by their own
/// newlines.
pub fn format_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|declaration| format_declaration(declaration, 0))
        .collect()
}

fn format_namespace(ns: &Namespace, indent: usize) -> String {
    let pad = padding(indent);
    let mut code = format!("{}namespace {} {{\n", pad, ns.name);
    for child in &ns.children {
        code.push_str(&format_declaration(child, indent + 2));
    }
    code.push_str(&format!("{}}}\n", pad));
    code
}

fn format_enum(en: &Enumeration, indent: usize) -> String {
    let pad = padding(indent);
    let mut code = format!("{}enum class {} ", pad, en.name);
    if let Some(base) = &en.base {
        code.push_str(&format!(": {} ", base));
    }
    code.push_str("{\n");

    let value_pad = padding(indent + 2);
    let values = en
        .values
        .iter()
        .map(|value| match &value.value {
            None => format!("{}{}", value_pad, value.name),
            Some(assigned) => format!("{}{} = {}", value_pad, value.name, assigned),
        })
        .join(",\n");
    code.push_str(&values);
    code.push('\n');

    code.push_str(&format!("{}}};\n", pad));
    code
}

fn format_aggregate(kind: &str, aggregate: &Aggregate, indent: usize) -> String {
    let pad = padding(indent);
    let mut code = String::new();

    if let Some(templates) = &aggregate.templates {
        let params = templates.iter().map(format_template_param).join(", ");
        code.push_str(&format!("{}template<{}>\n", pad, params));
    }

    code.push_str(&format!("{}{} {} ", pad, kind, aggregate.name));

    if let Some(inherit) = &aggregate.inherit {
        code.push_str(": ");
        if let Some(visibility) = &inherit.visibility {
            code.push_str(&format!("{} ", visibility));
        }
        if !inherit.namespaces.is_empty() {
            code.push_str(&inherit.namespaces.join("::"));
            code.push_str("::");
        }
        code.push_str(&inherit.name);
        if let Some(templates) = &inherit.templates {
            let names = templates
                .iter()
                .map(|template| template.name.to_string())
                .join(", ");
            code.push_str(&format!("<{}>", names));
        }
        code.push(' ');
    }
    code.push_str("{\n");

    for nested in &aggregate.nested {
        code.push_str(&format_declaration(nested, indent + 2));
    }
    for field in &aggregate.fields {
        code.push_str(&format_field(field, indent + 2));
    }

    code.push_str(&format!("{}}};\n", pad));
    code
}

fn format_template_param(param: &TemplateParam) -> String {
    let mut code = match &param.ty {
        None => format!("typename {}", param.name),
        Some(ty) => format!("{} {}", ty, param.name),
    };
    if let Some(default) = &param.default {
        code.push_str(&format!(" = {}", default));
    }
    code
}

pub fn format_field(field: &Field, indent: usize) -> String {
    let mut code = format!("{}{} {}", padding(indent), format_type(&field.ty), field.name);

    if let Some(bitfield) = field.ty.bitfield {
        code.push_str(&format!(" : {}", bitfield));
    }

    if let Some(size) = &field.ty.fixed_array {
        match size {
            // Numeric sizes render as hex, the way offsets appear upstream.
            Value::Int(size) => code.push_str(&format!("[0x{:X}]", size)),
            symbolic => code.push_str(&format!("[{}]", symbolic)),
        }
    }

    if let Some(default) = &field.default {
        code.push_str(&format!(" = {}", default));
    }

    code.push(';');

    if let Some(offset) = field.offset {
        code.push_str(&format!(" // {:X}", offset));
    }

    code.push('\n');
    code
}

pub fn format_type(ty: &TypeDescriptor) -> String {
    let mut code = String::new();

    if ty.is_static {
        code.push_str("static ");
    }
    if ty.is_constexpr {
        code.push_str("constexpr ");
    }
    if ty.is_const {
        code.push_str("const ");
    }
    if ty.is_volatile {
        code.push_str("volatile ");
    }

    if !ty.namespaces.is_empty() {
        code.push_str(&ty.namespaces.join("::"));
        code.push_str("::");
    }
    code.push_str(&ty.name.to_string());

    if let Some(templates) = &ty.templates {
        let arguments = templates.iter().map(format_type).join(", ");
        code.push_str(&format!("<{}>", arguments));
    }

    if ty.ptr {
        code.push('*');
    }
    if ty.reference {
        code.push('&');
    }
    code
}

fn padding(length: usize) -> String {
    " ".repeat(length)
}
