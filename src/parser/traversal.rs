// Wed Jan 21 2026 - Alex

use crate::ast::{Aggregate, Declaration, Enumeration, Namespace, TemplateParam};
use crate::parser::descriptor::DescriptorBuilder;
use crate::parser::enums::EnumBuilder;
use crate::parser::field::FieldBuilder;
use crate::parser::kind::NodeKind;
use crate::parser::node_text;
use tree_sitter::Node;

type SlotId = usize;

/// In-progress declaration. Child declarations are held as arena indices
/// until the whole tree has been visited, so no two stack frames ever
/// alias the same container.
enum Slot {
    Namespace {
        decl: Namespace,
        children: Vec<SlotId>,
    },
    Aggregate {
        kind: AggregateKind,
        decl: Aggregate,
        nested: Vec<SlotId>,
    },
    Enum(Enumeration),
    Taken,
}

#[derive(Clone, Copy)]
enum AggregateKind {
    Struct,
    Class,
}

/// One unit of pending work: a CST node to visit and the arena slot its
/// output attaches to (`None` at the top level). A template declaration
/// forwards its parameter list to the wrapped specifier through
/// `templates`.
struct Frame<'t> {
    node: Node<'t>,
    parent: Option<SlotId>,
    templates: Option<Vec<TemplateParam>>,
}

/// Stack-driven visitor over the CST. Frames are pushed in reverse source
/// order so the LIFO stack processes siblings left to right; every output
/// array therefore mirrors source declaration order.
pub struct TraversalEngine<'s> {
    src: &'s str,
    arena: Vec<Slot>,
    roots: Vec<SlotId>,
}

impl<'s> TraversalEngine<'s> {
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            arena: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn run(mut self, root: Node) -> Vec<Declaration> {
        let mut stack = vec![Frame {
            node: root,
            parent: None,
            templates: None,
        }];
        while let Some(frame) = stack.pop() {
            self.dispatch(frame, &mut stack);
        }

        let roots = std::mem::take(&mut self.roots);
        roots
            .into_iter()
            .filter_map(|id| self.materialize(id))
            .collect()
    }

    fn dispatch<'t>(&mut self, frame: Frame<'t>, stack: &mut Vec<Frame<'t>>) {
        match NodeKind::of(&frame.node) {
            NodeKind::TranslationUnit | NodeKind::DeclarationList => {
                self.walk_declarations(&frame, stack);
            }
            NodeKind::NamespaceDefinition => self.enter_namespace(&frame, stack),
            NodeKind::TemplateDeclaration => self.enter_template(frame, stack),
            NodeKind::EnumSpecifier => {
                if let Some(decl) = EnumBuilder::new(self.src).build(&frame.node) {
                    let id = self.insert(Slot::Enum(decl));
                    self.attach(frame.parent, id);
                }
            }
            NodeKind::StructSpecifier => {
                self.enter_aggregate(AggregateKind::Struct, frame, stack);
            }
            NodeKind::ClassSpecifier => {
                self.enter_aggregate(AggregateKind::Class, frame, stack);
            }
            NodeKind::UnionSpecifier => {
                log::debug!("Skipping union: {}", node_text(&frame.node, self.src));
            }
            NodeKind::FieldDeclarationList => self.walk_fields(&frame, stack),
            NodeKind::Comment | NodeKind::AccessSpecifier | NodeKind::Ignored => {}
            _ => {
                log::error!("Missing handler for node kind: {}", frame.node.kind());
            }
        }
    }

    /// Translation units and namespace bodies: only declarable kinds are
    /// considered, everything else at this position is skipped.
    fn walk_declarations<'t>(&mut self, frame: &Frame<'t>, stack: &mut Vec<Frame<'t>>) {
        let mut cursor = frame.node.walk();
        let declarable: Vec<Node<'t>> = frame
            .node
            .named_children(&mut cursor)
            .filter(|child| NodeKind::of(child).is_declarable())
            .collect();

        for node in declarable.into_iter().rev() {
            stack.push(Frame {
                node,
                parent: frame.parent,
                templates: None,
            });
        }
    }

    /// A namespace declared with a qualified name (`a::b::c`) flattens into
    /// nested namespace nodes, one per segment, the innermost wrapping the
    /// body.
    fn enter_namespace<'t>(&mut self, frame: &Frame<'t>, stack: &mut Vec<Frame<'t>>) {
        let Some(name) = frame.node.child_by_field_name("name") else {
            return;
        };
        let Some(body) = frame.node.child_by_field_name("body") else {
            return;
        };

        let segments = self.namespace_segments(&name);
        if segments.is_empty() {
            return;
        }

        let mut parent = frame.parent;
        for segment in segments {
            let id = self.insert(Slot::Namespace {
                decl: Namespace::new(segment),
                children: Vec::new(),
            });
            self.attach(parent, id);
            parent = Some(id);
        }

        stack.push(Frame {
            node: body,
            parent,
            templates: None,
        });
    }

    /// Peels one scope segment at a time from a possibly nested namespace
    /// name. Handles both flat (`a :: b :: c` as siblings) and right-nested
    /// specifier shapes.
    fn namespace_segments(&self, name: &Node) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = *name;

        loop {
            match NodeKind::of(&current) {
                NodeKind::NestedNamespaceSpecifier => {
                    let mut cursor = current.walk();
                    let parts: Vec<Node> = current.named_children(&mut cursor).collect();
                    match parts.as_slice() {
                        [] => break,
                        [rest] => current = *rest,
                        [first, rest @ ..] => {
                            segments.push(node_text(first, self.src).to_string());
                            if let [tail] = rest {
                                current = *tail;
                            } else {
                                for part in rest {
                                    segments.push(node_text(part, self.src).to_string());
                                }
                                break;
                            }
                        }
                    }
                }
                _ => {
                    segments.push(node_text(&current, self.src).to_string());
                    break;
                }
            }
        }
        segments
    }

    /// The template parameter list is captured here and handed to the
    /// wrapped struct/class specifier through its frame.
    fn enter_template<'t>(&mut self, frame: Frame<'t>, stack: &mut Vec<Frame<'t>>) {
        let Some(list) = frame.node.child_by_field_name("parameters") else {
            return;
        };
        let params = self.template_params(&list);

        let mut cursor = frame.node.walk();
        let target = frame
            .node
            .named_children(&mut cursor)
            .find(|child| NodeKind::of(child).is_declarable());

        // Template functions have no declarable child and are dropped.
        if let Some(target) = target {
            stack.push(Frame {
                node: target,
                parent: frame.parent,
                templates: Some(params),
            });
        }
    }

    fn template_params(&self, list: &Node) -> Vec<TemplateParam> {
        let mut params = Vec::new();
        let mut cursor = list.walk();

        for child in list.named_children(&mut cursor) {
            match NodeKind::of(&child) {
                NodeKind::TypeParameterDeclaration => {
                    if let Some(name) = child.named_child(0) {
                        params.push(TemplateParam::type_param(node_text(&name, self.src)));
                    }
                }
                NodeKind::OptionalTypeParameterDeclaration => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| node_text(&n, self.src).to_string());
                    let default = child
                        .child_by_field_name("default_type")
                        .map(|n| node_text(&n, self.src).to_string());
                    if let Some(name) = name {
                        let mut param = TemplateParam::type_param(name);
                        param.default = default;
                        params.push(param);
                    }
                }
                NodeKind::ParameterDeclaration | NodeKind::OptionalParameterDeclaration => {
                    let ty = child
                        .child_by_field_name("type")
                        .map(|n| node_text(&n, self.src).to_string());
                    let name = child
                        .child_by_field_name("declarator")
                        .map(|n| node_text(&n, self.src).to_string());
                    if let (Some(ty), Some(name)) = (ty, name) {
                        let mut param = TemplateParam::value_param(name, ty);
                        param.default = child
                            .child_by_field_name("default_value")
                            .map(|n| node_text(&n, self.src).to_string());
                        params.push(param);
                    }
                }
                _ => {}
            }
        }
        params
    }

    /// Struct and class specifiers. A body-less forward declaration yields
    /// nothing.
    fn enter_aggregate<'t>(
        &mut self,
        kind: AggregateKind,
        frame: Frame<'t>,
        stack: &mut Vec<Frame<'t>>,
    ) {
        let Some(body) = frame.node.child_by_field_name("body") else {
            return;
        };
        let Some(name) = frame.node.child_by_field_name("name") else {
            return;
        };

        let mut decl = Aggregate::new(node_text(&name, self.src));
        decl.templates = frame.templates;

        let mut cursor = frame.node.walk();
        let clause = frame
            .node
            .named_children(&mut cursor)
            .find(|child| NodeKind::of(child) == NodeKind::BaseClassClause);
        if let Some(clause) = clause {
            decl.inherit = DescriptorBuilder::new(self.src).build_inherit(&clause);
        }

        let id = self.insert(Slot::Aggregate {
            kind,
            decl,
            nested: Vec::new(),
        });
        self.attach(frame.parent, id);

        stack.push(Frame {
            node: body,
            parent: Some(id),
            templates: None,
        });
    }

    /// Field declaration lists: data members are built in place, in source
    /// order, pairing each one with an immediately following comment for
    /// offset extraction. Nested type declarations go back on the stack.
    fn walk_fields<'t>(&mut self, frame: &Frame<'t>, stack: &mut Vec<Frame<'t>>) {
        let Some(parent) = frame.parent else {
            return;
        };
        let builder = FieldBuilder::new(self.src);
        let mut nested = Vec::new();

        let mut cursor = frame.node.walk();
        let children: Vec<Node<'t>> = frame.node.children(&mut cursor).collect();

        for (index, child) in children.iter().enumerate() {
            if !child.is_named() {
                continue;
            }
            let kind = NodeKind::of(child);
            match kind {
                NodeKind::FieldDeclaration => {
                    // A nested type definition (`struct Binding { ... };`)
                    // parses as a declarator-less field declaration whose
                    // type is the specifier itself.
                    if let Some(specifier) = Self::nested_specifier(child) {
                        nested.push(specifier);
                        continue;
                    }
                    let comment = children
                        .get(index + 1)
                        .copied()
                        .filter(|next| NodeKind::of(next) == NodeKind::Comment);
                    if let Some(field) = builder.build(child, comment.as_ref()) {
                        if let Slot::Aggregate { decl, .. } = &mut self.arena[parent] {
                            decl.fields.push(field);
                        }
                    }
                }
                _ if kind.is_declarable() => nested.push(*child),
                NodeKind::Comment | NodeKind::AccessSpecifier | NodeKind::Ignored => {}
                _ => {
                    log::error!("Missing handler for node kind: {}", child.kind());
                }
            }
        }

        for node in nested.into_iter().rev() {
            stack.push(Frame {
                node,
                parent: Some(parent),
                templates: None,
            });
        }
    }

    fn nested_specifier<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        if node.child_by_field_name("declarator").is_some() {
            return None;
        }
        node.child_by_field_name("type")
            .filter(|ty| NodeKind::of(ty).is_declarable())
    }

    fn insert(&mut self, slot: Slot) -> SlotId {
        self.arena.push(slot);
        self.arena.len() - 1
    }

    fn attach(&mut self, parent: Option<SlotId>, id: SlotId) {
        match parent {
            None => self.roots.push(id),
            Some(parent) => match &mut self.arena[parent] {
                Slot::Namespace { children, .. } => children.push(id),
                Slot::Aggregate { nested, .. } => nested.push(id),
                _ => log::error!("Cannot attach a declaration to a leaf slot"),
            },
        }
    }

    /// Converts a finished slot into an owned declaration, recursing into
    /// child slots. Depth is bounded by source nesting.
    fn materialize(&mut self, id: SlotId) -> Option<Declaration> {
        match std::mem::replace(&mut self.arena[id], Slot::Taken) {
            Slot::Namespace { mut decl, children } => {
                decl.children = children
                    .into_iter()
                    .filter_map(|child| self.materialize(child))
                    .collect();
                Some(Declaration::Namespace(decl))
            }
            Slot::Aggregate { kind, mut decl, nested } => {
                decl.nested = nested
                    .into_iter()
                    .filter_map(|child| self.materialize(child))
                    .collect();
                Some(match kind {
                    AggregateKind::Struct => Declaration::Struct(decl),
                    AggregateKind::Class => Declaration::Class(decl),
                })
            }
            Slot::Enum(decl) => Some(Declaration::Enum(decl)),
            Slot::Taken => None,
        }
    }
}
