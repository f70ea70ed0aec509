use vc_autorefl_meta::TypeMeta;

use crate::{Config, TypeEmitter};

/// Header placed before the first type block.
pub const PREAMBLE: &str = "\
// This file is generated by vc_autorefl

#pragma once

#include <USRefl/USRefl.h>

";

// -----------------------------------------------------------------------------
// Generator

/// Turns a list of type models into one USRefl registration header.
///
/// Generation is a pure function of the models and the configuration: the
/// same input always yields byte-identical output.
///
/// # Example
///
/// ```
/// use vc_autorefl_gen::{Config, Generator, PREAMBLE};
/// use vc_autorefl_meta::{Field, TypeMeta};
///
/// let metas = [TypeMeta::new("Point").with_field(Field::variable("x", "float"))];
/// let text = Generator::new(Config::default()).generate(&metas);
///
/// assert!(text.starts_with(PREAMBLE));
/// assert!(text.contains("struct Ubpa::USRefl::TypeInfo<Point> :"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    #[inline]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Renders the block of a single type, without the preamble.
    #[inline]
    pub fn generate_type(&self, meta: &TypeMeta) -> String {
        TypeEmitter::new(&self.config).emit(meta)
    }

    /// Renders the preamble followed by every type block in input order.
    pub fn generate(&self, metas: &[TypeMeta]) -> String {
        log::debug!("generate {} type block(s)", metas.len());

        let blocks = self.render_blocks(metas);
        let len = PREAMBLE.len() + blocks.iter().map(String::len).sum::<usize>();

        let mut output = String::with_capacity(len);
        output.push_str(PREAMBLE);
        for block in &blocks {
            output.push_str(block);
        }
        output
    }

    #[cfg(not(feature = "rayon"))]
    fn render_blocks(&self, metas: &[TypeMeta]) -> Vec<String> {
        metas.iter().map(|meta| self.generate_type(meta)).collect()
    }

    #[cfg(feature = "rayon")]
    fn render_blocks(&self, metas: &[TypeMeta]) -> Vec<String> {
        use rayon::prelude::*;

        // Indexed collect keeps input order.
        metas.par_iter().map(|meta| self.generate_type(meta)).collect()
    }
}

/// Shorthand for `Generator::new(config.clone()).generate(metas)`.
pub fn generate(metas: &[TypeMeta], config: &Config) -> String {
    Generator::new(config.clone()).generate(metas)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use vc_autorefl_meta::{Attr, Base, Field, Parameter, TypeMeta};

    use super::{Generator, PREAMBLE, generate};
    use crate::{Config, ConstMode};

    fn point() -> TypeMeta {
        TypeMeta::new("Point")
            .with_namespaces(["Ubpa"])
            .with_attr(Attr::new("size").with_value("8"))
            .with_field(
                Field::constructor("Point")
                    .with_params([Parameter::new("float", "x"), Parameter::new("float", "y")]),
            )
            .with_field(Field::variable("x", "float").with_initializer("0.f"))
            .with_field(Field::variable("y", "float").with_initializer("0.f"))
            .with_field(
                Field::function("Sum", "float")
                    .with_const(true)
                    .with_param(Parameter::new("float", "z").with_default(true)),
            )
    }

    #[test]
    fn empty_input_is_preamble() {
        let text = Generator::default().generate(&[]);
        assert_eq!(
            text,
            "// This file is generated by vc_autorefl\n\n#pragma once\n\n#include <USRefl/USRefl.h>\n\n"
        );
    }

    #[test]
    fn point_document() {
        let text = Generator::default().generate(&[point()]);
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
        Field {UMeta::constructor, WrapConstructor<Type(float, float)>()},
        Field {\"x\", &Type::x, AttrList {
            Attr {UMeta::initializer, []()->float{ return 0.f; }},
        }},
        Field {\"y\", &Type::y, AttrList {
            Attr {UMeta::initializer, []()->float{ return 0.f; }},
        }},
        Field {\"Sum\", &Type::Sum, AttrList {
            Attr {UMeta::default_functions, std::tuple {
                [](Type const* __this){ return __this->Sum(); }
            }},
        }},
    };
};

";
        assert_eq!(text, expected);
    }

    #[test]
    fn blocks_follow_input_order() {
        let metas = [
            TypeMeta::new("B"),
            TypeMeta::new("A").with_base(Base::public("B")),
            TypeMeta::new("C"),
        ];
        let text = Generator::default().generate(&metas);

        let b = text.find("TypeInfo<B>").unwrap();
        let a = text.find("TypeInfo<A>").unwrap();
        let c = text.find("TypeInfo<C>").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn generation_is_idempotent() {
        let metas = [point(), TypeMeta::new("Empty")];
        let config = Config::default().with_const_mode(ConstMode::Const);

        let first = generate(&metas, &config);
        let second = generate(&metas, &config);
        assert_eq!(first, second);
        assert!(first.contains("inline static const FieldList fields = {"));
    }

    #[test]
    fn single_type_has_no_preamble() {
        let generator = Generator::default();
        let block = generator.generate_type(&TypeMeta::new("A"));
        assert!(block.starts_with("template<>\n"));
        assert!(block.ends_with("};\n\n"));
        assert_eq!(generator.generate(&[TypeMeta::new("A")]), String::from(PREAMBLE) + &block);
    }
}
