// Tue Jan 20 2026 - Alex

pub mod descriptor;
pub mod enums;
pub mod error;
pub mod eval;
pub mod field;
pub mod kind;
pub mod offset;
pub mod resolve;
pub mod traversal;

pub use error::ParseError;

use crate::ast::Declaration;
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::Node;

pub(crate) fn node_text<'s>(node: &Node, src: &'s str) -> &'s str {
    node.utf8_text(src.as_bytes()).unwrap_or_default()
}

/// One parsed header: the source path and the final declaration forest.
#[derive(Debug, Clone)]
pub struct ParsedHeader {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
}

/// Owns one grammar-loaded parser handle. Handles are independent; create
/// one per worker for parallel parsing — nothing is shared between them.
pub struct HeaderParser {
    parser: tree_sitter::Parser,
}

impl HeaderParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_cpp::language())?;
        Ok(Self { parser })
    }

    /// Parses C++ header source into the final declaration forest:
    /// traversal over the syntax tree, then the constant resolution pass.
    pub fn parse_source(&mut self, code: &str) -> Result<Vec<Declaration>, ParseError> {
        let tree = self.parser.parse(code, None).ok_or(ParseError::NoTree)?;
        let raw = traversal::TraversalEngine::new(code).run(tree.root_node());
        Ok(resolve::resolve(raw))
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedHeader, ParseError> {
        let code = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ParsedHeader {
            path: path.to_path_buf(),
            declarations: self.parse_source(&code)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        Aggregate, EnumValue, Enumeration, Field, Inherit, Namespace, TemplateParam,
        TypeDescriptor, Value,
    };
    use crate::formatter::format_declarations;

    fn parse(code: &str) -> Vec<Declaration> {
        HeaderParser::new()
            .expect("grammar")
            .parse_source(code)
            .expect("parse")
    }

    /// Formats the forest and parses it again: the round-trip oracle.
    fn reparse(declarations: &[Declaration]) -> Vec<Declaration> {
        parse(&format_declarations(declarations))
    }

    fn int_values(pairs: &[(&str, i64)]) -> Vec<EnumValue> {
        pairs
            .iter()
            .map(|(name, value)| EnumValue::new(*name, *value))
            .collect()
    }

    #[test]
    fn test_parse_enum() {
        let ast = parse(
            r#"
            enum EGameMode {
              Singleplayer = 0,
              Multiplayer = 1,
              Count = 2,
              Invalid = 3
            };

            enum EShape : int8_t {
              Rectangle,
              Circle,
              Triangle,
              Count,
              Invalid
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![
                Declaration::Enum(Enumeration::new("EGameMode").with_values(int_values(&[
                    ("Singleplayer", 0),
                    ("Multiplayer", 1),
                    ("Count", 2),
                    ("Invalid", 3),
                ]))),
                Declaration::Enum(
                    Enumeration::new("EShape")
                        .with_base("int8_t")
                        .with_values(int_values(&[
                            ("Rectangle", 0),
                            ("Circle", 1),
                            ("Triangle", 2),
                            ("Count", 3),
                            ("Invalid", 4),
                        ]))
                ),
            ]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_enum_counter_continues_past_explicit_values() {
        let ast = parse("enum class E { A, B = 5, C, D = B, E };");

        assert_eq!(
            ast,
            vec![Declaration::Enum(Enumeration::new("E").with_values(
                int_values(&[("A", 0), ("B", 5), ("C", 6), ("D", 5), ("E", 7)])
            ))]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_enum_bit_flags() {
        let ast = parse(
            r#"
            enum class EFlags : uint32_t {
              None = 0,
              Dirty = 1 << 0,
              Hidden = 1 << 4,
              Frozen
            };
            "#,
        );

        // The shifted initializers leave the counter where `None = 0` put
        // it, so `Frozen` continues from there.
        assert_eq!(
            ast,
            vec![Declaration::Enum(
                Enumeration::new("EFlags")
                    .with_base("uint32_t")
                    .with_values(int_values(&[
                        ("None", 0),
                        ("Dirty", 1),
                        ("Hidden", 16),
                        ("Frozen", 1),
                    ]))
            )]
        );
    }

    #[test]
    fn test_enum_external_reference_stays_symbolic() {
        let ast = parse("enum class E { First = Other::Value };");

        assert_eq!(
            ast,
            vec![Declaration::Enum(Enumeration::new("E").with_values(vec![
                EnumValue::new("First", "Other::Value"),
            ]))]
        );
    }

    #[test]
    fn test_forward_declarations_vanish() {
        let ast = parse(
            r#"
            struct GameApp;
            class ISerializable;
            "#,
        );
        assert!(ast.is_empty());
    }

    #[test]
    fn test_parse_empty_structs() {
        let ast = parse(
            r#"
            struct GameApp {};
            struct GameNetwork {};
            "#,
        );

        assert_eq!(
            ast,
            vec![
                Declaration::Struct(Aggregate::new("GameApp")),
                Declaration::Struct(Aggregate::new("GameNetwork")),
            ]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_parse_struct_fields() {
        let ast = parse(
            r#"
            struct GameApp {
              static constexpr const bool kMode = true;

              bool isRunning;           // 00
              float delta;              // 04
              void* context;            // 08

              DynArray<int32_t> buffer; // 10
              DynArray<char*> lines;    // 20

              uint8_t unk30[0x4B - 0x30]; // 30
              uint8_t unk4B[0x10]; // 4B
              uintptr_t unk78[(0x138 - 0x78) >> 3];

              HashMap<uint64_t, CString> pool;

              DynArray<Handle<void*>> components;

              game::vehicle::BaseObject vehicle;
              game::Object* gameObject;
              Handle<game::world::worldNode> world;
              Handle<game::Object*> gameObjectRef;

              Array<float, 4> vector;
            };
            "#,
        );

        let mut kmode_type = TypeDescriptor::named("bool");
        kmode_type.is_static = true;
        kmode_type.is_constexpr = true;
        kmode_type.is_const = true;

        let expected = Declaration::Struct(Aggregate::new("GameApp").with_fields(vec![
            Field::new("kMode", kmode_type).with_default("true"),
            Field::new("isRunning", TypeDescriptor::named("bool")).with_offset(0x0),
            Field::new("delta", TypeDescriptor::named("float")).with_offset(0x4),
            Field::new("context", TypeDescriptor::named("void").with_ptr()).with_offset(0x8),
            Field::new(
                "buffer",
                TypeDescriptor::named("DynArray")
                    .with_templates(vec![TypeDescriptor::named("int32_t")]),
            )
            .with_offset(0x10),
            Field::new(
                "lines",
                TypeDescriptor::named("DynArray")
                    .with_templates(vec![TypeDescriptor::named("char").with_ptr()]),
            )
            .with_offset(0x20),
            Field::new(
                "unk30",
                TypeDescriptor::named("uint8_t").with_fixed_array(0x1B_i64),
            )
            .with_offset(0x30),
            Field::new(
                "unk4B",
                TypeDescriptor::named("uint8_t").with_fixed_array(0x10_i64),
            )
            .with_offset(0x4B),
            Field::new(
                "unk78",
                TypeDescriptor::named("uintptr_t").with_fixed_array(0x18_i64),
            ),
            Field::new(
                "pool",
                TypeDescriptor::named("HashMap").with_templates(vec![
                    TypeDescriptor::named("uint64_t"),
                    TypeDescriptor::named("CString"),
                ]),
            ),
            Field::new(
                "components",
                TypeDescriptor::named("DynArray").with_templates(vec![
                    TypeDescriptor::named("Handle")
                        .with_templates(vec![TypeDescriptor::named("void").with_ptr()]),
                ]),
            ),
            Field::new(
                "vehicle",
                TypeDescriptor::named("BaseObject")
                    .with_namespaces(vec!["game".into(), "vehicle".into()]),
            ),
            Field::new(
                "gameObject",
                TypeDescriptor::named("Object")
                    .with_namespaces(vec!["game".into()])
                    .with_ptr(),
            ),
            Field::new(
                "world",
                TypeDescriptor::named("Handle").with_templates(vec![
                    TypeDescriptor::named("worldNode")
                        .with_namespaces(vec!["game".into(), "world".into()]),
                ]),
            ),
            Field::new(
                "gameObjectRef",
                TypeDescriptor::named("Handle").with_templates(vec![
                    TypeDescriptor::named("Object")
                        .with_namespaces(vec!["game".into()])
                        .with_ptr(),
                ]),
            ),
            Field::new(
                "vector",
                TypeDescriptor::named("Array").with_templates(vec![
                    TypeDescriptor::named("float"),
                    TypeDescriptor::named(Value::Int(4)),
                ]),
            ),
        ]));

        assert_eq!(ast, vec![expected]);
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_struct_ignores_functions() {
        let ast = parse(
            r#"
            struct GameApp {
              GameApp();
              ~GameApp() override;

              CClass* GetType() override;

              static void* GetNext();

              GameApp& operator=(const GameApp& other);

              bool operator()() const;

              void sub_00();
              virtual void sub_08(const char* a1);
              virtual void sub_0C(const Handle<IScriptable>& a1) = 0;
            };
            "#,
        );

        assert_eq!(ast, vec![Declaration::Struct(Aggregate::new("GameApp"))]);
    }

    #[test]
    fn test_struct_inheritance() {
        let ast = parse(
            r#"
            struct Entity {};

            struct GameObject : Entity {};

            template<typename T>
            struct ASystem {};

            struct AudioSystem : ASystem<GameObject> {};
            "#,
        );

        assert_eq!(
            ast,
            vec![
                Declaration::Struct(Aggregate::new("Entity")),
                Declaration::Struct(
                    Aggregate::new("GameObject").with_inherit(Inherit::new("Entity"))
                ),
                Declaration::Struct(
                    Aggregate::new("ASystem")
                        .with_templates(vec![TemplateParam::type_param("T")])
                ),
                Declaration::Struct(Aggregate::new("AudioSystem").with_inherit(
                    Inherit::new("ASystem")
                        .with_templates(vec![TypeDescriptor::named("GameObject")])
                )),
            ]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_only_first_base_class_survives() {
        let ast = parse("struct Player : Entity, ISerializable {};");

        assert_eq!(
            ast,
            vec![Declaration::Struct(
                Aggregate::new("Player").with_inherit(Inherit::new("Entity"))
            )]
        );
    }

    #[test]
    fn test_structs_within_namespaces() {
        let ast = parse(
            r#"
            namespace Awesome {
              struct GameApp {};
              struct GameNetwork {};
            }

            namespace Universe {
              struct Body {};
            }

            namespace Universe {
              namespace Galaxy {
                struct Star : Universe::Body {};
              }
            }
            "#,
        );

        let mut awesome = Namespace::new("Awesome");
        awesome.children = vec![
            Declaration::Struct(Aggregate::new("GameApp")),
            Declaration::Struct(Aggregate::new("GameNetwork")),
        ];

        let mut universe_first = Namespace::new("Universe");
        universe_first.children = vec![Declaration::Struct(Aggregate::new("Body"))];

        let mut galaxy = Namespace::new("Galaxy");
        galaxy.children = vec![Declaration::Struct(
            Aggregate::new("Star").with_inherit(
                Inherit::new("Body").with_namespaces(vec!["Universe".into()]),
            ),
        )];
        let mut universe_second = Namespace::new("Universe");
        universe_second.children = vec![Declaration::Namespace(galaxy)];

        assert_eq!(
            ast,
            vec![
                Declaration::Namespace(awesome),
                Declaration::Namespace(universe_first),
                Declaration::Namespace(universe_second),
            ]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_qualified_namespace_flattens() {
        let ast = parse(
            r#"
            namespace Awesome::Event {
              struct EventListener {};
            }
            "#,
        );

        let mut event = Namespace::new("Event");
        event.children = vec![Declaration::Struct(Aggregate::new("EventListener"))];
        let mut awesome = Namespace::new("Awesome");
        awesome.children = vec![Declaration::Namespace(event)];

        assert_eq!(ast, vec![Declaration::Namespace(awesome)]);
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_struct_templates() {
        let ast = parse(
            r#"
            template<typename T>
            struct Vector {
              T* items;          // 00
              uint32_t size;     // 08
              uint32_t capacity; // 0C
            };

            template<typename K, typename V>
            struct Pair {
              K key;
              V value;
            };

            template<typename K, typename V>
            struct Map {
              Pair<K, V>* pairs;
              uint32_t size;
              uint32_t capacity;
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![
                Declaration::Struct(
                    Aggregate::new("Vector")
                        .with_templates(vec![TemplateParam::type_param("T")])
                        .with_fields(vec![
                            Field::new("items", TypeDescriptor::named("T").with_ptr())
                                .with_offset(0x0),
                            Field::new("size", TypeDescriptor::named("uint32_t")).with_offset(0x8),
                            Field::new("capacity", TypeDescriptor::named("uint32_t"))
                                .with_offset(0xC),
                        ])
                ),
                Declaration::Struct(
                    Aggregate::new("Pair")
                        .with_templates(vec![
                            TemplateParam::type_param("K"),
                            TemplateParam::type_param("V"),
                        ])
                        .with_fields(vec![
                            Field::new("key", TypeDescriptor::named("K")),
                            Field::new("value", TypeDescriptor::named("V")),
                        ])
                ),
                Declaration::Struct(
                    Aggregate::new("Map")
                        .with_templates(vec![
                            TemplateParam::type_param("K"),
                            TemplateParam::type_param("V"),
                        ])
                        .with_fields(vec![
                            Field::new(
                                "pairs",
                                TypeDescriptor::named("Pair")
                                    .with_templates(vec![
                                        TypeDescriptor::named("K"),
                                        TypeDescriptor::named("V"),
                                    ])
                                    .with_ptr()
                            ),
                            Field::new("size", TypeDescriptor::named("uint32_t")),
                            Field::new("capacity", TypeDescriptor::named("uint32_t")),
                        ])
                ),
            ]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_non_type_template_parameter() {
        let ast = parse(
            r#"
            template<typename T, uint32_t N>
            struct Array {
              T items[N];
              uint32_t size;
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![Declaration::Struct(
                Aggregate::new("Array")
                    .with_templates(vec![
                        TemplateParam::type_param("T"),
                        TemplateParam::value_param("N", "uint32_t"),
                    ])
                    .with_fields(vec![
                        Field::new("items", TypeDescriptor::named("T").with_fixed_array("N")),
                        Field::new("size", TypeDescriptor::named("uint32_t")),
                    ])
            )]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_class_with_access_and_inheritance() {
        let ast = parse(
            r#"
            class ISerializable {
              CName typeName;
            };

            class IScriptable : public ISerializable {
            public:
              DynArray<CProperty*> properties;
              DynArray<CBaseFunction*> functions;
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![
                Declaration::Class(Aggregate::new("ISerializable").with_fields(vec![
                    Field::new("typeName", TypeDescriptor::named("CName")),
                ])),
                Declaration::Class(
                    Aggregate::new("IScriptable")
                        .with_inherit(Inherit::new("ISerializable").with_visibility("public"))
                        .with_fields(vec![
                            Field::new(
                                "properties",
                                TypeDescriptor::named("DynArray").with_templates(vec![
                                    TypeDescriptor::named("CProperty").with_ptr(),
                                ])
                            ),
                            Field::new(
                                "functions",
                                TypeDescriptor::named("DynArray").with_templates(vec![
                                    TypeDescriptor::named("CBaseFunction").with_ptr(),
                                ])
                            ),
                        ])
                ),
            ]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_nested_types_keep_source_order() {
        let ast = parse(
            r#"
            struct Player {
              enum class Owner : int8_t {
                Player = 0,
                Johnny = 1
              };

              struct Binding {
                uint32_t id;
                Vector3 position;
              };

              Vector3 position;
              Binding parent;
            };
            "#,
        );

        let owner = Enumeration::new("Owner")
            .with_base("int8_t")
            .with_values(int_values(&[("Player", 0), ("Johnny", 1)]));
        let binding = Aggregate::new("Binding").with_fields(vec![
            Field::new("id", TypeDescriptor::named("uint32_t")),
            Field::new("position", TypeDescriptor::named("Vector3")),
        ]);

        let mut player = Aggregate::new("Player").with_fields(vec![
            Field::new("position", TypeDescriptor::named("Vector3")),
            Field::new("parent", TypeDescriptor::named("Binding")),
        ]);
        player.nested = vec![
            Declaration::Enum(owner),
            Declaration::Struct(binding),
        ];

        assert_eq!(ast, vec![Declaration::Struct(player)]);
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_offset_requires_trailing_comment() {
        let ast = parse(
            r#"
            struct GameApp {
              bool isRunning; // 0x0
              float delta;
            };
            "#,
        );

        let Declaration::Struct(app) = &ast[0] else {
            panic!("expected struct");
        };
        assert_eq!(app.fields[0].offset, Some(0));
        assert_eq!(app.fields[1].offset, None);
    }

    #[test]
    fn test_bitfield_width() {
        let ast = parse(
            r#"
            struct Color {
              uint8_t r : 3;
              uint8_t g : 3;
              uint8_t b : 2;
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![Declaration::Struct(Aggregate::new("Color").with_fields(vec![
                Field::new("r", TypeDescriptor::named("uint8_t").with_bitfield(3)),
                Field::new("g", TypeDescriptor::named("uint8_t").with_bitfield(3)),
                Field::new("b", TypeDescriptor::named("uint8_t").with_bitfield(2)),
            ]))]
        );
        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_symbolic_array_resolved_through_sibling_constant() {
        let ast = parse(
            r#"
            struct AudioSystem {
              static constexpr uint32_t kAudioSize = ESystemPoolSize::Audio;
              uint32_t pool[kAudioSize];
            };
            "#,
        );

        let Declaration::Struct(system) = &ast[0] else {
            panic!("expected struct");
        };
        assert_eq!(
            system.fields[0].default,
            Some(Value::Text("ESystemPoolSize::Audio".into()))
        );

        let pool = &system.fields[1].ty;
        assert_eq!(
            pool.fixed_array,
            Some(Value::Text("ESystemPoolSize::Audio".into()))
        );
        assert!(pool.constant);

        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_numeric_array_resolved_through_sibling_constant() {
        let ast = parse(
            r#"
            struct GameApp {
              static constexpr const int32_t kMax = 128;
              uint32_t fixedConstant[kMax];
              Array<void*, kMax> resources;
            };
            "#,
        );

        let Declaration::Struct(app) = &ast[0] else {
            panic!("expected struct");
        };
        assert_eq!(app.fields[1].ty.fixed_array, Some(Value::Int(128)));
        assert!(!app.fields[1].ty.constant);

        let resources = app.fields[2].ty.templates.as_ref().unwrap();
        assert_eq!(resources[1].name, Value::Int(128));

        assert_eq!(reparse(&ast), ast);
    }

    #[test]
    fn test_default_value_cast_stripping() {
        let ast = parse(
            r#"
            struct GameApp {
              static constexpr const uint32_t kAudioSize = static_cast<uint32_t>(ESystemPoolSize::Audio);
              static constexpr const auto kBool = FNV1a64("Bool");
              static constexpr const float kPi = 3.141592;
            };
            "#,
        );

        let Declaration::Struct(app) = &ast[0] else {
            panic!("expected struct");
        };
        assert_eq!(
            app.fields[0].default,
            Some(Value::Text("ESystemPoolSize::Audio".into()))
        );
        assert_eq!(
            app.fields[1].default,
            Some(Value::Text("FNV1a64(\"Bool\")".into()))
        );
        assert_eq!(app.fields[1].ty.name, Value::Text("auto".into()));
        assert_eq!(app.fields[2].default, Some(Value::Float(3.141592)));
    }

    #[test]
    fn test_unions_are_dropped() {
        let ast = parse(
            r#"
            union Converter {
              uint32_t bits;
              float value;
            };

            struct Keeper {};
            "#,
        );

        assert_eq!(ast, vec![Declaration::Struct(Aggregate::new("Keeper"))]);
    }

    #[test]
    fn test_unknown_declarations_do_not_stop_siblings() {
        let ast = parse(
            r#"
            #include <cstdint>

            using Alias = int;

            struct Keeper {
              int32_t kept;
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![Declaration::Struct(Aggregate::new("Keeper").with_fields(
                vec![Field::new("kept", TypeDescriptor::named("int32_t"))]
            ))]
        );
    }

    #[test]
    fn test_reference_fields() {
        let ast = parse(
            r#"
            struct Wrapper {
              int32_t& counter;
            };
            "#,
        );

        assert_eq!(
            ast,
            vec![Declaration::Struct(Aggregate::new("Wrapper").with_fields(
                vec![Field::new("counter", TypeDescriptor::named("int32_t").with_ref())]
            ))]
        );
        assert_eq!(reparse(&ast), ast);
    }
}
