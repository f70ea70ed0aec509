//! Reflection boilerplate for the USRefl C++ library.
//!
//! A front end describes C++ types with [`meta`]; [`generator`] turns those
//! descriptions into a header of `Ubpa::USRefl::TypeInfo<T>` specializations.
//!
//! ```
//! use vc_autorefl::generator::{Config, Generator};
//! use vc_autorefl::meta::{Field, TypeMeta};
//!
//! let point = TypeMeta::new("Point")
//!     .with_field(Field::variable("x", "float"))
//!     .with_field(Field::variable("y", "float"));
//!
//! let header = Generator::new(Config::default()).generate(&[point]);
//! assert!(header.contains("Field {\"y\", &Type::y},"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_autorefl_gen as generator;
pub use vc_autorefl_meta as meta;
