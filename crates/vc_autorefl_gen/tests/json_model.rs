//! Models handed over by a front end as JSON.

use vc_autorefl_gen::meta::{FieldMode, TypeMeta};
use vc_autorefl_gen::{Config, ConstMode, Generator, PREAMBLE};

const MODEL: &str = r#"[
    {
        "name": "Point",
        "namespaces": ["Ubpa"],
        "attrs": [{ "name": "size", "value": "8" }],
        "fields": [
            {
                "name": "Point",
                "mode": "function",
                "access": "public",
                "parameters": [
                    { "ty": "float", "name": "x" },
                    { "ty": "float", "name": "y", "has_default": true }
                ]
            },
            { "name": "x", "ty": "float", "access": "public", "initializer": "0.f" },
            { "name": "y", "ty": "float", "access": "public" },
            { "name": "cache", "ty": "float" },
            {
                "name": "Scale",
                "mode": "function",
                "access": "public",
                "ty": "void",
                "parameters": [{ "ty": "float", "name": "k" }]
            },
            {
                "name": "Scale",
                "mode": "function",
                "access": "public",
                "ty": "void",
                "parameters": [{ "ty": "float" }, { "ty": "float" }]
            },
            {
                "name": "Zero",
                "mode": "function",
                "access": "public",
                "ty": "static Point",
                "qualifiers": { "is_static": true }
            }
        ]
    },
    {
        "name": "Wrapper",
        "template_parameters": [{ "kind": "typename", "name": "T" }],
        "bases": [
            { "name": "Ubpa::Point", "access": "public" },
            { "name": "Base<T>", "access": "public", "is_virtual": true }
        ],
        "fields": [
            {
                "name": "value",
                "ty": "T",
                "access": "public",
                "attrs": [{ "namespace": "Ubpa", "name": "range", "value": "{0, 1}" }]
            }
        ]
    }
]"#;

fn load() -> Vec<TypeMeta> {
    serde_json::from_str(MODEL).unwrap()
}

#[test]
fn model_defaults() {
    let metas = load();
    let point = &metas[0];

    assert_eq!(point.fields[1].mode, FieldMode::Variable);
    assert!(point.fields[5].parameters[1].name.is_empty());
    assert!(!metas[1].template_parameters[0].is_packed);
}

#[test]
fn generates_document() {
    let text = Generator::new(Config::default()).generate(&load());
    let expected = String::from(PREAMBLE)
        + "template<>
struct Ubpa::USRefl::TypeInfo<Ubpa::Point> :
    TypeInfoBase<Ubpa::Point>
{
#ifdef UBPA_USREFL_NOT_USE_NAMEOF
    static constexpr char name[12] = \"Ubpa::Point\";
#endif
    static constexpr AttrList attrs = {
        Attr {\"size\", 8},
    };
    static constexpr FieldList fields = {
        Field {UMeta::constructor, WrapConstructor<Type(float, float)>(), AttrList {
            Attr {UMeta::default_functions, std::tuple {
                WrapConstructor<Type(float)>()
            }},
        }},
        Field {\"x\", &Type::x, AttrList {
            Attr {UMeta::initializer, []()->float{ return 0.f; }},
        }},
        Field {\"y\", &Type::y},
        Field {\"Scale\", static_cast<void(Type::*)(float)>(&Type::Scale)},
        Field {\"Scale\", static_cast<void(Type::*)(float, float)>(&Type::Scale)},
        Field {\"Zero\", &Type::Zero},
    };
};

template<typename T>
struct Ubpa::USRefl::TypeInfo<Wrapper<T>> :
    TypeInfoBase<Wrapper<T>,
        Base<Ubpa::Point>,
        Base<Base<T>, true>
    >
{
#ifdef UBPA_USREFL_NOT_USE_NAMEOF
    // [!] all instance types have the same name
    static constexpr char name[8] = \"Wrapper\";
#endif
    static constexpr AttrList attrs = {};
    static constexpr FieldList fields = {
        Field {\"value\", &Wrapper<T>::value, AttrList {
            Attr {Ubpa::range, {0, 1}},
        }},
    };
};

";
    assert_eq!(text, expected);
}

#[test]
fn toml_config_changes_output() {
    let config = Config::from_toml_str(
        r#"
attr_list_const_mode = "non_const"
is_attr_value_to_function = true
non_namespace_name_without_quotation = true

[markers]
namespace = "Meta"
"#,
    )
    .unwrap();
    assert_eq!(config.attr_list_const_mode, ConstMode::NonConst);

    let text = Generator::new(config).generate(&load());
    assert!(text.contains(
        "    inline static AttrList attrs = {\n        Attr {size, []{ return 8; }},\n"
    ));
    assert!(text.contains(
        "        Field {Meta::constructor, WrapConstructor<Type(float, float)>(), AttrList {\n"
    ));
    assert!(text.contains("        Field {y, &Type::y},\n"));
    assert!(text.contains("            Attr {Ubpa::range, []{ return {0, 1}; }},\n"));
}
