// Wed Jan 21 2026 - Alex

use crate::ast::{Inherit, TypeDescriptor, Value};
use crate::parser::eval::{evaluate, parse_number};
use crate::parser::kind::NodeKind;
use crate::parser::node_text;
use tree_sitter::Node;

/// Builds a `TypeDescriptor` from a type node and its declarator chain.
/// Declarator modifiers are monotonic: each one only ever sets its flag.
pub struct DescriptorBuilder<'s> {
    src: &'s str,
}

impl<'s> DescriptorBuilder<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src }
    }

    pub fn build(&self, type_node: &Node, declarator: Option<&Node>) -> TypeDescriptor {
        let mut ty = self.base_type(type_node);
        if let Some(declarator) = declarator {
            self.apply_declarators(&mut ty, *declarator);
        }
        ty
    }

    /// Resolves the base name of a type: primitive, plain identifier,
    /// `auto`, qualified identifier or template instantiation.
    pub fn base_type(&self, node: &Node) -> TypeDescriptor {
        match NodeKind::of(node) {
            NodeKind::PrimitiveType
            | NodeKind::TypeIdentifier
            | NodeKind::PlaceholderTypeSpecifier
            | NodeKind::SizedTypeSpecifier => {
                TypeDescriptor::named(node_text(node, self.src))
            }
            NodeKind::QualifiedIdentifier => self.qualified_type(node),
            NodeKind::TemplateType => self.template_type(node),
            _ => {
                log::error!("Missing type handler for node kind: {}", node.kind());
                TypeDescriptor::named(node_text(node, self.src))
            }
        }
    }

    /// Peels `scope::name` pairs until the innermost unqualified name is
    /// reached, accumulating the scopes into `namespaces`.
    fn qualified_type(&self, node: &Node) -> TypeDescriptor {
        let mut namespaces = Vec::new();
        let mut current = *node;

        loop {
            if let Some(scope) = current.child_by_field_name("scope") {
                namespaces.push(node_text(&scope, self.src).to_string());
            }
            match current.child_by_field_name("name") {
                Some(inner) if NodeKind::of(&inner) == NodeKind::QualifiedIdentifier => {
                    current = inner;
                }
                Some(inner) => {
                    return self.base_type(&inner).with_namespaces(namespaces);
                }
                None => {
                    return TypeDescriptor::named(node_text(&current, self.src))
                        .with_namespaces(namespaces);
                }
            }
        }
    }

    /// Template instantiations like `DynArray<Handle<T>>` or
    /// `Array<float, 4>`: one descriptor per argument, where an argument is
    /// itself a type descriptor or a numeric non-type argument.
    fn template_type(&self, node: &Node) -> TypeDescriptor {
        let name = match node.child_by_field_name("name") {
            Some(name) => node_text(&name, self.src).to_string(),
            None => node_text(node, self.src).to_string(),
        };

        let mut templates = Vec::new();
        if let Some(args) = node.child_by_field_name("arguments") {
            let mut cursor = args.walk();
            for arg in args.named_children(&mut cursor) {
                match NodeKind::of(&arg) {
                    NodeKind::TypeDescriptor => {
                        let inner_type = arg.child_by_field_name("type");
                        let inner_decl = arg.child_by_field_name("declarator");
                        if let Some(inner_type) = inner_type {
                            templates.push(self.build(&inner_type, inner_decl.as_ref()));
                        }
                    }
                    NodeKind::NumberLiteral => {
                        let text = node_text(&arg, self.src);
                        let value = parse_number(text)
                            .unwrap_or_else(|| Value::Text(text.to_string()));
                        templates.push(TypeDescriptor::named(value));
                    }
                    NodeKind::Identifier | NodeKind::QualifiedIdentifier => {
                        templates.push(TypeDescriptor::named(node_text(&arg, self.src)));
                    }
                    _ => {}
                }
            }
        }

        TypeDescriptor::named(name).with_templates(templates)
    }

    /// Walks a declarator chain applying pointer, reference and fixed-array
    /// modifiers until the declared identifier is reached.
    pub fn apply_declarators(&self, ty: &mut TypeDescriptor, declarator: Node) {
        let mut current = Some(declarator);
        while let Some(node) = current {
            match NodeKind::of(&node) {
                NodeKind::PointerDeclarator | NodeKind::AbstractPointerDeclarator => {
                    ty.ptr = true;
                }
                NodeKind::ReferenceDeclarator | NodeKind::AbstractReferenceDeclarator => {
                    ty.reference = true;
                }
                NodeKind::ArrayDeclarator => {
                    if let Some(size) = node.child_by_field_name("size") {
                        ty.fixed_array = Some(evaluate(&size, self.src));
                    }
                }
                _ => break,
            }
            current = next_declarator(&node);
        }
    }

    /// Builds the single-base inheritance clause. Additional base classes
    /// after the first are dropped.
    pub fn build_inherit(&self, clause: &Node) -> Option<Inherit> {
        let mut visibility = None;
        let mut cursor = clause.walk();

        for child in clause.named_children(&mut cursor) {
            match NodeKind::of(&child) {
                NodeKind::AccessSpecifier => {
                    visibility = Some(node_text(&child, self.src).to_string());
                }
                NodeKind::TypeIdentifier
                | NodeKind::QualifiedIdentifier
                | NodeKind::TemplateType => {
                    let base = self.base_type(&child);
                    let name = match base.name {
                        Value::Text(name) => name,
                        other => other.to_string(),
                    };
                    let mut inherit = Inherit::new(name).with_namespaces(base.namespaces);
                    inherit.visibility = visibility;
                    inherit.templates = base.templates;
                    return Some(inherit);
                }
                _ => {}
            }
        }
        None
    }
}

/// Next link of a declarator chain. Most declarators expose it as the
/// `declarator` field; reference declarators keep it as a plain child.
pub(crate) fn next_declarator<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if let Some(inner) = node.child_by_field_name("declarator") {
        return Some(inner);
    }
    let mut cursor = node.walk();
    let inner = node.named_children(&mut cursor).find(|child| {
        let kind = NodeKind::of(child);
        kind.is_declarator()
            || matches!(kind, NodeKind::FieldIdentifier | NodeKind::Identifier)
    });
    inner
}
