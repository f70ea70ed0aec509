//! Adapters standing in for calls that omit default arguments.
//!
//! The generated format stores a function as a typed pointer or lambda and has
//! no way to say "this parameter has a default". For a function with `n`
//! parameters of which the last `k` are defaulted, one adapter is synthesized
//! per omittable arity `n - 1, n - 2, ..., n - k`, in that order, so that the
//! adapter for calling with `N` explicit arguments sits at index `n - N - 1`.

use core::fmt;

use vc_autorefl_meta::Field;

use super::SpecialMember;

/// One synthesized call shape of a function with default arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    /// Number of explicit arguments, the receiver excluded.
    pub arity: usize,
    pub kind: AdapterKind,
}

/// How an adapter reaches the original function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterKind {
    /// `WrapConstructor<OWNER(PARAMS)>()`
    Constructor { owner: String, params: String },
    /// `[](RECEIVER __this, PARAMS){ return CALL; }`
    Member {
        receiver: String,
        by_pointer: bool,
        member: String,
        params: String,
        args: String,
    },
    /// `[](PARAMS){ return OWNER::MEMBER(ARGS); }`
    Static {
        owner: String,
        member: String,
        params: String,
        args: String,
    },
}

impl fmt::Display for Adapter {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor { owner, params } => {
                write!(f, "WrapConstructor<{owner}({params})>()")
            }
            Self::Member {
                receiver,
                by_pointer,
                member,
                params,
                args,
            } => {
                let sep = if params.is_empty() { "" } else { ", " };
                write!(f, "[]({receiver} __this{sep}{params}){{ return ")?;
                if *by_pointer {
                    f.write_str("__this->")?;
                } else {
                    write!(f, "std::forward<{receiver}>(__this).")?;
                }
                write!(f, "{member}({args}); }}")
            }
            Self::Static {
                owner,
                member,
                params,
                args,
            } => write!(f, "[]({params}){{ return {owner}::{member}({args}); }}"),
        }
    }
}

/// Receiver type of a member function adapter.
///
/// Without a ref-qualifier the receiver is a pointer (`Type const*`), with one
/// it is a reference of that kind (`Type const&`, `Type&&`).
fn receiver_of(field: &Field, owner: &str) -> (String, bool) {
    let qualifiers = &field.qualifiers;
    let cv = qualifiers.cv_text();

    let mut receiver = owner.to_owned();
    if !cv.is_empty() {
        receiver.push(' ');
        receiver.push_str(&cv);
    }

    let by_pointer = !qualifiers.has_ref_qualifier();
    if by_pointer {
        receiver.push('*');
    } else {
        receiver.push_str(qualifiers.ref_qualifier.as_str());
    }
    (receiver, by_pointer)
}

/// Synthesizes the adapters of `field`, closest-to-full arity first.
///
/// Returns an empty list when no parameter has a default argument.
pub fn synthesize_adapters(field: &Field, special: SpecialMember, owner: &str) -> Vec<Adapter> {
    let defaults = field.default_parameter_num();
    let total = field.parameters.len();

    if !field.has_trailing_defaults() {
        log::warn!(
            "`{owner}::{}` declares default arguments before non-defaulted parameters",
            field.name
        );
    }

    (1..=defaults)
        .map(|omitted| {
            let arity = total.saturating_sub(omitted);
            let kind = if special == SpecialMember::Constructor {
                AdapterKind::Constructor {
                    owner: owner.to_owned(),
                    params: field.param_type_list(arity),
                }
            } else if field.is_member_function() {
                let (receiver, by_pointer) = receiver_of(field, owner);
                AdapterKind::Member {
                    receiver,
                    by_pointer,
                    member: field.name.clone(),
                    params: field.named_parameter_list(arity),
                    args: field.forward_argument_list(arity),
                }
            } else {
                AdapterKind::Static {
                    owner: owner.to_owned(),
                    member: field.name.clone(),
                    params: field.named_parameter_list(arity),
                    args: field.forward_argument_list(arity),
                }
            };
            Adapter { arity, kind }
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use vc_autorefl_meta::{Field, Parameter, RefQualifier};

    use super::{AdapterKind, synthesize_adapters};
    use crate::member::SpecialMember;

    fn defaulted(ty: &str, name: &str) -> Parameter {
        Parameter::new(ty, name).with_default(true)
    }

    #[test]
    fn constructor_adapters_decrease_in_arity() {
        let ctor = Field::constructor("Point").with_params([
            Parameter::new("int", "a"),
            defaulted("float", "b"),
            defaulted("double", "c"),
        ]);

        let adapters = synthesize_adapters(&ctor, SpecialMember::Constructor, "Type");
        let texts: Vec<_> = adapters.iter().map(ToString::to_string).collect();
        assert_eq!(
            texts,
            [
                "WrapConstructor<Type(int, float)>()",
                "WrapConstructor<Type(int)>()",
            ]
        );
        assert_eq!(adapters[0].arity, 2);
        assert_eq!(adapters[1].arity, 1);
    }

    #[test]
    fn member_adapter_through_pointer() {
        let sum = Field::function("Sum", "float")
            .with_const(true)
            .with_param(defaulted("float", "z"));

        let adapters = synthesize_adapters(&sum, SpecialMember::None, "Type");
        assert_eq!(adapters.len(), 1);
        assert_eq!(
            adapters[0].to_string(),
            "[](Type const* __this){ return __this->Sum(); }"
        );
        assert_eq!(adapters[0].arity, 0);
    }

    #[test]
    fn member_adapter_through_reference() {
        let take = Field::function("Take", "int")
            .with_ref_qualifier(RefQualifier::RValue)
            .with_params([Parameter::new("int", "a"), defaulted("int", "b")]);

        let adapters = synthesize_adapters(&take, SpecialMember::None, "Type");
        assert_eq!(
            adapters[0].to_string(),
            "[](Type&& __this, int a){ return std::forward<Type&&>(__this).Take(std::forward<int>(a)); }"
        );
        assert!(matches!(
            adapters[0].kind,
            AdapterKind::Member { by_pointer: false, .. }
        ));
    }

    #[test]
    fn volatile_receivers() {
        let poll = Field::function("Poll", "int")
            .with_const(true)
            .with_volatile(true)
            .with_ref_qualifier(RefQualifier::LValue)
            .with_param(defaulted("int", "timeout"));

        let adapters = synthesize_adapters(&poll, SpecialMember::None, "Type");
        assert_eq!(
            adapters[0].to_string(),
            "[](Type const volatile& __this){ return std::forward<Type const volatile&>(__this).Poll(); }"
        );

        let read = Field::function("Read", "int")
            .with_volatile(true)
            .with_param(defaulted("int", "offset"));

        let adapters = synthesize_adapters(&read, SpecialMember::None, "Type");
        assert_eq!(
            adapters[0].to_string(),
            "[](Type volatile* __this){ return __this->Read(); }"
        );
    }

    #[test]
    fn static_adapters() {
        let make = Field::function("Make", "static Point")
            .with_static(true)
            .with_params([defaulted("int", "a"), defaulted("int", "")]);

        let adapters = synthesize_adapters(&make, SpecialMember::None, "Type");
        let texts: Vec<_> = adapters.iter().map(ToString::to_string).collect();
        assert_eq!(
            texts,
            [
                "[](int a){ return Type::Make(std::forward<int>(a)); }",
                "[](){ return Type::Make(); }",
            ]
        );
    }

    #[test]
    fn no_defaults_no_adapters() {
        let plain = Field::function("f", "void").with_param(Parameter::new("int", "a"));
        assert!(synthesize_adapters(&plain, SpecialMember::None, "Type").is_empty());
    }
}
