// Tue Jan 20 2026 - Alex

use tree_sitter::Node;

/// Closed set of grammar productions the extractor reacts to. The raw
/// string kinds coming from the grammar are mapped here, at the boundary,
/// and nowhere else; everything downstream matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    TranslationUnit,
    NamespaceDefinition,
    NamespaceIdentifier,
    NestedNamespaceSpecifier,
    DeclarationList,
    TemplateDeclaration,
    TemplateParameterList,
    TypeParameterDeclaration,
    OptionalTypeParameterDeclaration,
    ParameterDeclaration,
    OptionalParameterDeclaration,
    EnumSpecifier,
    EnumeratorList,
    Enumerator,
    StructSpecifier,
    ClassSpecifier,
    UnionSpecifier,
    BaseClassClause,
    AccessSpecifier,
    FieldDeclarationList,
    FieldDeclaration,
    FieldIdentifier,
    FunctionDeclarator,
    PointerDeclarator,
    AbstractPointerDeclarator,
    ReferenceDeclarator,
    AbstractReferenceDeclarator,
    ArrayDeclarator,
    BitfieldClause,
    TypeIdentifier,
    QualifiedIdentifier,
    PrimitiveType,
    SizedTypeSpecifier,
    TemplateType,
    TypeDescriptor,
    PlaceholderTypeSpecifier,
    TypeQualifier,
    StorageClassSpecifier,
    Identifier,
    NumberLiteral,
    BinaryExpression,
    ParenthesizedExpression,
    Comment,
    /// Constructs the extractor deliberately drops without a diagnostic:
    /// function bodies, concepts, aliases, using/friend declarations and
    /// plain declarations (ctors, dtors, operators).
    Ignored,
    /// Anything else; reported when found where a declaration was expected.
    Unknown,
}

impl NodeKind {
    pub fn of(node: &Node) -> Self {
        Self::from_raw(node.kind())
    }

    fn from_raw(kind: &str) -> Self {
        match kind {
            "translation_unit" => Self::TranslationUnit,
            "namespace_definition" => Self::NamespaceDefinition,
            "namespace_identifier" => Self::NamespaceIdentifier,
            "nested_namespace_specifier" => Self::NestedNamespaceSpecifier,
            "declaration_list" => Self::DeclarationList,
            "template_declaration" => Self::TemplateDeclaration,
            "template_parameter_list" => Self::TemplateParameterList,
            "type_parameter_declaration" => Self::TypeParameterDeclaration,
            "optional_type_parameter_declaration" => Self::OptionalTypeParameterDeclaration,
            "parameter_declaration" => Self::ParameterDeclaration,
            "optional_parameter_declaration" => Self::OptionalParameterDeclaration,
            "enum_specifier" => Self::EnumSpecifier,
            "enumerator_list" => Self::EnumeratorList,
            "enumerator" => Self::Enumerator,
            "struct_specifier" => Self::StructSpecifier,
            "class_specifier" => Self::ClassSpecifier,
            "union_specifier" => Self::UnionSpecifier,
            "base_class_clause" => Self::BaseClassClause,
            "access_specifier" => Self::AccessSpecifier,
            "field_declaration_list" => Self::FieldDeclarationList,
            "field_declaration" => Self::FieldDeclaration,
            "field_identifier" => Self::FieldIdentifier,
            "function_declarator" => Self::FunctionDeclarator,
            "pointer_declarator" => Self::PointerDeclarator,
            "abstract_pointer_declarator" => Self::AbstractPointerDeclarator,
            "reference_declarator" => Self::ReferenceDeclarator,
            "abstract_reference_declarator" => Self::AbstractReferenceDeclarator,
            "array_declarator" => Self::ArrayDeclarator,
            "bitfield_clause" => Self::BitfieldClause,
            "type_identifier" => Self::TypeIdentifier,
            "qualified_identifier" => Self::QualifiedIdentifier,
            "primitive_type" => Self::PrimitiveType,
            "sized_type_specifier" => Self::SizedTypeSpecifier,
            "template_type" => Self::TemplateType,
            "type_descriptor" => Self::TypeDescriptor,
            "placeholder_type_specifier" => Self::PlaceholderTypeSpecifier,
            "type_qualifier" => Self::TypeQualifier,
            "storage_class_specifier" => Self::StorageClassSpecifier,
            "identifier" => Self::Identifier,
            "number_literal" => Self::NumberLiteral,
            "binary_expression" => Self::BinaryExpression,
            "parenthesized_expression" => Self::ParenthesizedExpression,
            "comment" => Self::Comment,
            "function_definition"
            | "concept_definition"
            | "alias_declaration"
            | "using_declaration"
            | "friend_declaration"
            | "declaration"
            | "static_assert_declaration" => Self::Ignored,
            _ => Self::Unknown,
        }
    }

    /// Kinds accepted at a declaration-list position (top level, namespace
    /// body or aggregate body). Everything else there is ignored.
    pub fn is_declarable(self) -> bool {
        matches!(
            self,
            Self::NamespaceDefinition
                | Self::EnumSpecifier
                | Self::StructSpecifier
                | Self::ClassSpecifier
                | Self::UnionSpecifier
                | Self::TemplateDeclaration
        )
    }

    pub fn is_declarator(self) -> bool {
        matches!(
            self,
            Self::PointerDeclarator
                | Self::AbstractPointerDeclarator
                | Self::ReferenceDeclarator
                | Self::AbstractReferenceDeclarator
                | Self::ArrayDeclarator
                | Self::FunctionDeclarator
        )
    }
}
