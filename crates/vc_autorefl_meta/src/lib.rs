//! Structural model of reflectable C++ types.
//!
//! The model is produced by an external front end (usually an AST walker)
//! and consumed read-only by `vc_autorefl_gen`. Members are already classified,
//! overload sets are grouped by name and default arguments are recorded per
//! parameter, so nothing here resolves symbols.
//!
//! Besides the plain data, the types provide the small text fragments that
//! depend only on the structure itself, such as qualified names, parameter
//! lists and member function pointer types.
//!
//! # Example
//!
//! ```
//! use vc_autorefl_meta::{AccessSpecifier, Attr, Field, Parameter, TypeMeta};
//!
//! let point = TypeMeta::new("Point")
//!     .with_namespaces(["Ubpa"])
//!     .with_attr(Attr::new("size").with_value("8"))
//!     .with_field(Field::variable("x", "float").with_access(AccessSpecifier::Public))
//!     .with_field(
//!         Field::function("Sum", "float")
//!             .with_access(AccessSpecifier::Public)
//!             .with_param(Parameter::new("float", "z")),
//!     );
//!
//! assert_eq!(point.full_name(), "Ubpa::Point");
//! assert_eq!(point.fields[1].param_type_list(1), "float");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod access;
mod attr;
mod base;
mod field;
mod template;
mod type_meta;

// -----------------------------------------------------------------------------
// Top-level exports

pub use access::AccessSpecifier;
pub use attr::Attr;
pub use base::Base;
pub use field::{Field, FieldMode, Parameter, Qualifiers, RefQualifier};
pub use template::TemplateParameter;
pub use type_meta::TypeMeta;
