//! USRefl registration code generator.
//!
//! Takes the structural models of [`vc_autorefl_meta`] and renders, for each
//! type, a `Ubpa::USRefl::TypeInfo<T>` specialization listing its public
//! fields, functions, constructors, destructors and attributes. Functions
//! with default arguments get one adapter per omittable arity, so the
//! runtime can call them with fewer arguments.
//!
//! The pipeline is strictly layered:
//!
//! - [`attr`] renders single attributes.
//! - [`member`] resolves every eligible field into a [`MemberDescriptor`].
//! - [`TypeEmitter`] prints one type block.
//! - [`Generator`] concatenates the blocks behind a fixed preamble.
//!
//! Generation cannot fail. Only loading a [`Config`] from TOML returns errors.
//!
//! [`MemberDescriptor`]: member::MemberDescriptor
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

pub mod attr;
pub mod config;
pub mod member;

mod emitter;
mod generator;
mod writer;

// -----------------------------------------------------------------------------
// Top-level exports

pub use vc_autorefl_meta as meta;

pub use config::{Config, ConfigError, ConstMode, MarkerNames};
pub use emitter::{NAME_TOGGLE_MACRO, TEMPLATE_NAME_NOTE, TypeDescriptor, TypeEmitter};
pub use generator::{Generator, PREAMBLE, generate};
pub use writer::INDENT;
