//! Per-type `TypeInfo` specialization blocks.

use vc_autorefl_meta::TypeMeta;

use crate::Config;
use crate::attr::{AttrText, render_attr};
use crate::member::{AttrEntry, AttrEntryValue, MemberDescriptor, describe_members};
use crate::writer::CodeWriter;

/// Feature macro that opts into compiled-in type names.
pub const NAME_TOGGLE_MACRO: &str = "UBPA_USREFL_NOT_USE_NAMEOF";

/// Comment emitted above the stored name of a template type.
///
/// One literal is shared by every instantiation of the template.
pub const TEMPLATE_NAME_NOTE: &str = "// [!] all instance types have the same name";

// -----------------------------------------------------------------------------
// TypeDescriptor

/// Everything needed to print one type block, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor<'a> {
    pub meta: &'a TypeMeta,
    pub full_name: String,
    /// Name registered for runtime lookup.
    pub ns_name: String,
    /// Rendered `Base<...>` entries of the public bases.
    pub bases: Vec<String>,
    pub attrs: Vec<AttrText>,
    pub members: Vec<MemberDescriptor<'a>>,
}

impl<'a> TypeDescriptor<'a> {
    pub fn new(meta: &'a TypeMeta, config: &Config) -> Self {
        Self {
            meta,
            full_name: meta.full_name(),
            ns_name: meta.ns_name(),
            bases: meta.public_bases().map(|base| base.generate_text()).collect(),
            attrs: meta.attrs.iter().map(|attr| render_attr(attr, config)).collect(),
            members: describe_members(meta, config),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeEmitter

/// Prints [`TypeDescriptor`]s under one [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct TypeEmitter<'c> {
    config: &'c Config,
}

impl<'c> TypeEmitter<'c> {
    #[inline]
    pub const fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Renders the complete block of one type, trailing blank line included.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_autorefl_gen::{Config, TypeEmitter};
    /// use vc_autorefl_meta::{Field, TypeMeta};
    ///
    /// let config = Config::default();
    /// let meta = TypeMeta::new("Point").with_field(Field::variable("x", "float"));
    /// let text = TypeEmitter::new(&config).emit(&meta);
    ///
    /// assert!(text.starts_with("template<>\nstruct Ubpa::USRefl::TypeInfo<Point> :\n"));
    /// assert!(text.contains("        Field {\"x\", &Type::x},\n"));
    /// ```
    pub fn emit(&self, meta: &TypeMeta) -> String {
        log::debug!("emit TypeInfo for `{}`", meta.full_name());
        let desc = TypeDescriptor::new(meta, self.config);
        self.emit_descriptor(&desc)
    }

    /// Renders an already resolved type.
    pub fn emit_descriptor(&self, desc: &TypeDescriptor<'_>) -> String {
        let mut w = CodeWriter::new();
        self.write_header(&mut w, desc);
        w.line(0, "{");
        self.write_name(&mut w, desc);
        self.write_attrs(&mut w, desc);
        self.write_fields(&mut w, desc);
        w.line(0, "};");
        w.newline();
        w.finish()
    }

    fn write_header(&self, w: &mut CodeWriter, desc: &TypeDescriptor<'_>) {
        // An explicit specialization still needs `template<>`.
        w.line(0, format_args!("template<{}>", desc.meta.template_list()));
        w.line(
            0,
            format_args!("struct Ubpa::USRefl::TypeInfo<{}> :", desc.full_name),
        );

        w.indent(1);
        w.push(format_args!("TypeInfoBase<{}", desc.full_name));
        match desc.bases.as_slice() {
            [] => {}
            [base] => w.push(format_args!(", {base}")),
            bases => {
                w.push(",");
                w.newline();
                for (index, base) in bases.iter().enumerate() {
                    w.indent(2);
                    w.push(base);
                    if index + 1 != bases.len() {
                        w.push(",");
                    }
                    w.newline();
                }
                w.indent(1);
            }
        }
        w.push(">");
        w.newline();
    }

    fn write_name(&self, w: &mut CodeWriter, desc: &TypeDescriptor<'_>) {
        w.line(0, format_args!("#ifdef {NAME_TOGGLE_MACRO}"));
        if desc.meta.is_template_type() {
            w.line(1, TEMPLATE_NAME_NOTE);
        }
        w.line(
            1,
            format_args!(
                "static constexpr char name[{}] = \"{}\";",
                desc.ns_name.len() + 1,
                desc.ns_name
            ),
        );
        w.line(0, "#endif");
    }

    fn write_attrs(&self, w: &mut CodeWriter, desc: &TypeDescriptor<'_>) {
        w.indent(1);
        w.push(format_args!(
            "{} AttrList attrs = {{",
            self.config.attr_list_const_mode.storage()
        ));
        if !desc.attrs.is_empty() {
            w.newline();
            for attr in &desc.attrs {
                w.line(2, format_args!("{attr},"));
            }
            w.indent(1);
        }
        w.push("};");
        w.newline();
    }

    fn write_fields(&self, w: &mut CodeWriter, desc: &TypeDescriptor<'_>) {
        w.indent(1);
        w.push(format_args!(
            "{} FieldList fields = {{",
            self.config.attr_list_const_mode.storage()
        ));
        if !desc.members.is_empty() {
            w.newline();
            for member in &desc.members {
                write_field(w, member);
            }
            w.indent(1);
        }
        w.push("};");
        w.newline();
    }
}

fn write_field(w: &mut CodeWriter, member: &MemberDescriptor<'_>) {
    w.indent(2);
    w.push(format_args!("Field {{{}, {}", member.name, member.value));
    if !member.attrs.is_empty() {
        w.push(", AttrList {");
        w.newline();
        for attr in &member.attrs {
            write_member_attr(w, attr);
        }
        w.indent(2);
        w.push("}");
    }
    w.push("},");
    w.newline();
}

fn write_member_attr(w: &mut CodeWriter, attr: &AttrEntry) {
    w.indent(3);
    match &attr.value {
        AttrEntryValue::None => w.push(format_args!("Attr {{{}}},", attr.name)),
        AttrEntryValue::Expr(expr) => w.push(format_args!("Attr {{{}, {}}},", attr.name, expr)),
        AttrEntryValue::Adapters(adapters) => {
            w.push(format_args!("Attr {{{}, std::tuple {{", attr.name));
            w.newline();
            for (index, adapter) in adapters.iter().enumerate() {
                w.indent(4);
                w.push(adapter);
                if index + 1 != adapters.len() {
                    w.push(",");
                }
                w.newline();
            }
            w.indent(3);
            w.push("}},");
        }
    }
    w.newline();
}

// -----------------------------------------------------------------------------
// Tests
