//! Per-member resolution.
//!
//! Every eligible [`Field`] is resolved once into a [`MemberDescriptor`]:
//! display name, value expression and attribute list. The emitter only
//! prints descriptors, it makes no decisions of its own.

// -----------------------------------------------------------------------------
// Modules

mod adapter;
mod overload;

// -----------------------------------------------------------------------------
// Exports

pub use adapter::{Adapter, AdapterKind, synthesize_adapters};

use core::fmt;

use vc_autorefl_meta::{AccessSpecifier, Field, FieldMode, TypeMeta};

use crate::Config;
use crate::attr::{AttrText, render_attr, render_attr_name, render_marker_name, typed_lazy_value};
use overload::OverloadSets;

// -----------------------------------------------------------------------------
// Eligibility

/// Whether a field shows up in the generated field list.
///
/// Only public, non-template, non-friend, non-deleted members are reflected.
#[inline]
pub fn is_eligible(field: &Field) -> bool {
    field.access == AccessSpecifier::Public
        && !field.is_template
        && !field.is_friend
        && !field.is_deleted
}

// -----------------------------------------------------------------------------
// SpecialMember

/// Constructors and destructors, recognized by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMember {
    None,
    Constructor,
    Destructor,
}

impl SpecialMember {
    /// Constructor wins over destructor, which wins over a plain member.
    pub fn classify(field: &Field, meta: &TypeMeta) -> Self {
        if field.name == meta.constructor_name() {
            Self::Constructor
        } else if field.name.strip_prefix('~') == Some(meta.name.as_str()) {
            Self::Destructor
        } else {
            Self::None
        }
    }
}

// -----------------------------------------------------------------------------
// MemberValue

/// How the runtime reaches a member, resolved once per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValue {
    /// `&OWNER::member`, data members and unique functions.
    Address { owner: String, member: String },
    /// `WrapConstructor<OWNER(PARAMS)>()`
    Constructor { owner: String, params: String },
    /// `WrapDestructor<OWNER>()`
    Destructor { owner: String },
    /// `static_cast<SIGNATURE>(&OWNER::member)`, one entry of an overload set.
    ///
    /// `(member, ordinal)` identifies the entry among its `count` siblings.
    OverloadCast {
        owner: String,
        member: String,
        signature: String,
        ordinal: usize,
        count: usize,
    },
    /// `OWNER::member`, static data read as an evaluated constant.
    Constant { owner: String, member: String },
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address { owner, member } => write!(f, "&{owner}::{member}"),
            Self::Constructor { owner, params } => {
                write!(f, "WrapConstructor<{owner}({params})>()")
            }
            Self::Destructor { owner } => write!(f, "WrapDestructor<{owner}>()"),
            Self::OverloadCast {
                owner,
                member,
                signature,
                ..
            } => write!(f, "static_cast<{signature}>(&{owner}::{member})"),
            Self::Constant { owner, member } => write!(f, "{owner}::{member}"),
        }
    }
}

// -----------------------------------------------------------------------------
// AttrEntry

/// Value of one entry in a member's attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrEntryValue {
    None,
    Expr(String),
    /// `std::tuple { ... }` of default-argument adapters.
    Adapters(Vec<Adapter>),
}

/// One entry of a member's attribute list, declared or synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrEntry {
    pub name: String,
    pub value: AttrEntryValue,
}

impl From<AttrText> for AttrEntry {
    fn from(text: AttrText) -> Self {
        Self {
            name: text.name,
            value: match text.value {
                Some(expr) => AttrEntryValue::Expr(expr),
                None => AttrEntryValue::None,
            },
        }
    }
}

// -----------------------------------------------------------------------------
// MemberDescriptor

/// A fully resolved field entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor<'a> {
    pub field: &'a Field,
    pub special: SpecialMember,
    /// Rendered display name.
    pub name: String,
    pub value: MemberValue,
    /// Initializer, default functions, then declared attributes.
    pub attrs: Vec<AttrEntry>,
}

/// Expression naming the reflected type inside its own `TypeInfo`.
///
/// Non-template types use the `Type` alias provided by `TypeInfoBase`;
/// template types spell out their full name.
pub fn owner_name(meta: &TypeMeta) -> String {
    if meta.is_template_type() {
        meta.full_name()
    } else {
        "Type".to_owned()
    }
}

/// Resolves every eligible field of `meta`, in declaration order.
pub fn describe_members<'a>(meta: &'a TypeMeta, config: &Config) -> Vec<MemberDescriptor<'a>> {
    let owner = owner_name(meta);

    let mut eligible = Vec::with_capacity(meta.fields.len());
    for field in &meta.fields {
        if is_eligible(field) {
            eligible.push(field);
        } else {
            log::trace!(
                "skip field `{}::{}` (access: {}, template: {}, friend: {}, deleted: {})",
                meta.name,
                field.name,
                field.access,
                field.is_template,
                field.is_friend,
                field.is_deleted,
            );
        }
    }

    let mut overloads = OverloadSets::new(eligible.iter().copied());

    eligible
        .into_iter()
        .map(|field| describe_member(field, meta, &owner, &mut overloads, config))
        .collect()
}

fn describe_member<'a>(
    field: &'a Field,
    meta: &TypeMeta,
    owner: &str,
    overloads: &mut OverloadSets<'_>,
    config: &Config,
) -> MemberDescriptor<'a> {
    let special = SpecialMember::classify(field, meta);

    let name = match special {
        SpecialMember::Constructor => render_marker_name(&config.markers.constructor, config),
        SpecialMember::Destructor => render_marker_name(&config.markers.destructor, config),
        SpecialMember::None => render_attr_name("", &field.name, config),
    };

    let value = match (field.mode, special) {
        (FieldMode::Variable, _) => MemberValue::Address {
            owner: owner.to_owned(),
            member: field.name.clone(),
        },
        (FieldMode::Function, SpecialMember::Constructor) => MemberValue::Constructor {
            owner: owner.to_owned(),
            params: field.param_type_list(field.parameters.len()),
        },
        (FieldMode::Function, SpecialMember::Destructor) => MemberValue::Destructor {
            owner: owner.to_owned(),
        },
        (FieldMode::Function, SpecialMember::None) if overloads.is_overloaded(&field.name) => {
            if overloads.has_mixed_modes(&field.name) {
                log::warn!(
                    "`{}::{}` shares its name with members of another kind, \
                     the overload cast may not compile",
                    meta.name,
                    field.name
                );
            }
            MemberValue::OverloadCast {
                owner: owner.to_owned(),
                member: field.name.clone(),
                signature: field.function_type(owner),
                ordinal: overloads.next_ordinal(&field.name),
                count: overloads.count(&field.name),
            }
        }
        (FieldMode::Function, SpecialMember::None) => MemberValue::Address {
            owner: owner.to_owned(),
            member: field.name.clone(),
        },
        (FieldMode::Value, _) => MemberValue::Constant {
            owner: owner.to_owned(),
            member: field.name.clone(),
        },
    };

    MemberDescriptor {
        field,
        special,
        name,
        value,
        attrs: describe_attrs(field, special, owner, config),
    }
}

fn describe_attrs(
    field: &Field,
    special: SpecialMember,
    owner: &str,
    config: &Config,
) -> Vec<AttrEntry> {
    let mut attrs = Vec::with_capacity(field.attrs.len() + 2);

    if config.is_initializer_as_attr
        && field.mode != FieldMode::Value
        && !field.initializer.is_empty()
    {
        attrs.push(AttrEntry {
            name: render_marker_name(&config.markers.initializer, config),
            value: AttrEntryValue::Expr(typed_lazy_value(
                &field.initializer,
                &field.simple_type(),
            )),
        });
    }

    if config.generate_default_functions
        && field.mode == FieldMode::Function
        && field.default_parameter_num() > 0
    {
        attrs.push(AttrEntry {
            name: render_marker_name(&config.markers.default_functions, config),
            value: AttrEntryValue::Adapters(synthesize_adapters(field, special, owner)),
        });
    }

    attrs.extend(
        field
            .attrs
            .iter()
            .map(|attr| AttrEntry::from(render_attr(attr, config))),
    );

    attrs
}

// -----------------------------------------------------------------------------
// Tests
