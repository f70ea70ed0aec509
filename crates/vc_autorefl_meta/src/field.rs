use specifiers::words_without_specifiers;

use crate::{AccessSpecifier, Attr};

// -----------------------------------------------------------------------------
// FieldMode

/// How a member is exposed to the reflection runtime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldMode {
    /// Non-static data member, referenced by member pointer.
    #[default]
    Variable,
    /// Member or static function, constructors and destructors included.
    Function,
    /// Static data, referenced by qualified name as an evaluated constant.
    Value,
}

// -----------------------------------------------------------------------------
// Qualifiers

/// Ref-qualifier of a non-static member function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RefQualifier {
    #[default]
    None,
    /// `&`
    LValue,
    /// `&&`
    RValue,
}

impl RefQualifier {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::LValue => "&",
            Self::RValue => "&&",
        }
    }
}

/// Qualifiers of a function member.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Qualifiers {
    pub is_static: bool,
    pub is_const: bool,
    pub is_volatile: bool,
    pub ref_qualifier: RefQualifier,
}

impl Qualifiers {
    #[inline]
    pub const fn has_ref_qualifier(&self) -> bool {
        !matches!(self.ref_qualifier, RefQualifier::None)
    }

    /// Trailing qualifiers of a member function type.
    ///
    /// cv-qualifiers are separated by a space, the ref-qualifier is appended
    /// directly.
    ///
    /// ```
    /// # use vc_autorefl_meta::{Qualifiers, RefQualifier};
    /// let q = Qualifiers {
    ///     is_const: true,
    ///     ref_qualifier: RefQualifier::LValue,
    ///     ..Default::default()
    /// };
    /// assert_eq!(q.text(), "const&");
    /// assert_eq!(Qualifiers::default().text(), "");
    /// ```
    pub fn text(&self) -> String {
        let mut text = self.cv_text();
        text.push_str(self.ref_qualifier.as_str());
        text
    }

    /// `const`, `volatile`, `const volatile` or empty.
    pub fn cv_text(&self) -> String {
        match (self.is_const, self.is_volatile) {
            (true, true) => "const volatile".into(),
            (true, false) => "const".into(),
            (false, true) => "volatile".into(),
            (false, false) => String::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Parameter

/// A function parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub ty: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_default: bool,
    /// `Args... args`
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_packed: bool,
}

impl Parameter {
    #[inline]
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            has_default: false,
            is_packed: false,
        }
    }

    #[inline]
    pub fn with_default(self, has_default: bool) -> Self {
        Self {
            has_default,
            ..self
        }
    }

    #[inline]
    pub fn with_packed(self, is_packed: bool) -> Self {
        Self { is_packed, ..self }
    }

    /// Type as it appears in a parameter-type list.
    pub fn type_text(&self) -> String {
        if self.is_packed {
            format!("{}...", self.ty)
        } else {
            self.ty.clone()
        }
    }

    /// Name used to forward the argument; unnamed parameters get `__arg{index}`.
    pub fn name_at(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("__arg{index}")
        } else {
            self.name.clone()
        }
    }
}

// -----------------------------------------------------------------------------
// Field

/// One member of a reflected type.
///
/// Constructors are recorded with the owning type's name, destructors with
/// `~` followed by it. They are not separate variants: the generator
/// recognizes them by name.
///
/// Members created through the builder constructors start out public.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Field {
    pub name: String,
    pub mode: FieldMode,
    pub access: AccessSpecifier,
    /// Declared type; the return type for functions.
    pub ty: String,
    pub is_template: bool,
    pub is_friend: bool,
    pub is_deleted: bool,
    pub parameters: Vec<Parameter>,
    pub qualifiers: Qualifiers,
    /// Default member initializer expression.
    pub initializer: String,
    pub attrs: Vec<Attr>,
}

impl Field {
    fn public(name: impl Into<String>, ty: impl Into<String>, mode: FieldMode) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            mode,
            access: AccessSpecifier::Public,
            ..Self::default()
        }
    }

    /// A non-static data member.
    #[inline]
    pub fn variable(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::public(name, ty, FieldMode::Variable)
    }

    /// A function member; `ty` is the return type.
    #[inline]
    pub fn function(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::public(name, ty, FieldMode::Function)
    }

    /// A static data member exposed as a constant.
    #[inline]
    pub fn value(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::public(name, ty, FieldMode::Value)
    }

    /// A constructor of `type_name`.
    #[inline]
    pub fn constructor(type_name: impl Into<String>) -> Self {
        Self::public(type_name, "", FieldMode::Function)
    }

    /// The destructor of `type_name`.
    #[inline]
    pub fn destructor(type_name: impl AsRef<str>) -> Self {
        Self::public(format!("~{}", type_name.as_ref()), "", FieldMode::Function)
    }

    #[inline]
    pub fn with_access(self, access: AccessSpecifier) -> Self {
        Self { access, ..self }
    }

    #[inline]
    pub fn with_template(self, is_template: bool) -> Self {
        Self {
            is_template,
            ..self
        }
    }

    #[inline]
    pub fn with_friend(self, is_friend: bool) -> Self {
        Self { is_friend, ..self }
    }

    #[inline]
    pub fn with_deleted(self, is_deleted: bool) -> Self {
        Self { is_deleted, ..self }
    }

    #[inline]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    #[inline]
    pub fn with_params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(params);
        self
    }

    #[inline]
    pub fn with_qualifiers(self, qualifiers: Qualifiers) -> Self {
        Self { qualifiers, ..self }
    }

    #[inline]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.qualifiers.is_static = is_static;
        self
    }

    #[inline]
    pub fn with_const(mut self, is_const: bool) -> Self {
        self.qualifiers.is_const = is_const;
        self
    }

    #[inline]
    pub fn with_volatile(mut self, is_volatile: bool) -> Self {
        self.qualifiers.is_volatile = is_volatile;
        self
    }

    #[inline]
    pub fn with_ref_qualifier(mut self, ref_qualifier: RefQualifier) -> Self {
        self.qualifiers.ref_qualifier = ref_qualifier;
        self
    }

    #[inline]
    pub fn with_initializer(self, initializer: impl Into<String>) -> Self {
        Self {
            initializer: initializer.into(),
            ..self
        }
    }

    #[inline]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Number of parameters declared with a default argument.
    #[inline]
    pub fn default_parameter_num(&self) -> usize {
        self.parameters.iter().filter(|p| p.has_default).count()
    }

    /// `true` when every defaulted parameter comes after all non-defaulted ones.
    pub fn has_trailing_defaults(&self) -> bool {
        self.parameters
            .iter()
            .skip_while(|p| !p.has_default)
            .all(|p| p.has_default)
    }

    #[inline]
    pub fn is_member_function(&self) -> bool {
        self.mode == FieldMode::Function && !self.qualifiers.is_static
    }

    #[inline]
    pub fn is_static_function(&self) -> bool {
        self.mode == FieldMode::Function && self.qualifiers.is_static
    }

    /// Declared type with storage and function specifiers removed.
    ///
    /// ```
    /// # use vc_autorefl_meta::Field;
    /// let field = Field::value("id", "static constexpr size_t");
    /// assert_eq!(field.simple_type(), "size_t");
    /// ```
    pub fn simple_type(&self) -> String {
        words_without_specifiers(&self.ty)
    }

    /// Types of the first `num` parameters, e.g. `int, float`.
    pub fn param_type_list(&self, num: usize) -> String {
        self.parameters
            .iter()
            .take(num)
            .map(Parameter::type_text)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Declarations of the first `num` parameters, e.g. `int a, float b`.
    pub fn named_parameter_list(&self, num: usize) -> String {
        self.parameters
            .iter()
            .take(num)
            .enumerate()
            .map(|(index, param)| {
                if param.is_packed {
                    format!("{}... {}", param.ty, param.name_at(index))
                } else {
                    format!("{} {}", param.ty, param.name_at(index))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Perfect-forwarded arguments for the first `num` parameters,
    /// e.g. `std::forward<int>(a), std::forward<float>(b)`.
    pub fn forward_argument_list(&self, num: usize) -> String {
        self.parameters
            .iter()
            .take(num)
            .enumerate()
            .map(|(index, param)| {
                let packed = if param.is_packed { "..." } else { "" };
                format!("std::forward<{}>({}){packed}", param.ty, param.name_at(index))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Function pointer type of this member, used to pick one overload.
    ///
    /// ```
    /// # use vc_autorefl_meta::{Field, Parameter};
    /// let sum = Field::function("Sum", "float")
    ///     .with_const(true)
    ///     .with_param(Parameter::new("float", "z"));
    /// assert_eq!(sum.function_type("Type"), "float(Type::*)(float) const");
    ///
    /// let make = Field::function("Make", "static Point").with_static(true);
    /// assert_eq!(make.function_type("Type"), "Point(*)()");
    /// ```
    pub fn function_type(&self, owner: &str) -> String {
        let params = self.param_type_list(self.parameters.len());
        let ret = self.simple_type();
        if self.qualifiers.is_static {
            return format!("{ret}(*)({params})");
        }
        let qualifiers = self.qualifiers.text();
        if qualifiers.is_empty() {
            format!("{ret}({owner}::*)({params})")
        } else {
            format!("{ret}({owner}::*)({params}) {qualifiers}")
        }
    }
}

// -----------------------------------------------------------------------------
// Helpers

mod specifiers {
    /// Keywords that belong to the declaration, not to the type.
    const SPECIFIERS: &[&str] = &[
        "static",
        "constexpr",
        "consteval",
        "constinit",
        "inline",
        "virtual",
        "explicit",
        "mutable",
        "thread_local",
        "extern",
        "friend",
    ];

    pub(super) fn words_without_specifiers(ty: &str) -> String {
        ty.split_whitespace()
            .filter(|word| !SPECIFIERS.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn lerp() -> Field {
        Field::function("Lerp", "float")
            .with_const(true)
            .with_params([
                Parameter::new("float", "a"),
                Parameter::new("float", "b").with_default(true),
                Parameter::new("float", "").with_default(true),
            ])
    }

    #[test]
    fn default_parameters() {
        let field = lerp();
        assert_eq!(field.default_parameter_num(), 2);
        assert!(field.has_trailing_defaults());

        let broken = Field::function("f", "void").with_params([
            Parameter::new("int", "a").with_default(true),
            Parameter::new("int", "b"),
        ]);
        assert_eq!(broken.default_parameter_num(), 1);
        assert!(!broken.has_trailing_defaults());
    }

    #[test]
    fn parameter_lists() {
        let field = lerp();
        assert_eq!(field.param_type_list(3), "float, float, float");
        assert_eq!(field.param_type_list(1), "float");
        assert_eq!(field.param_type_list(0), "");
        assert_eq!(field.named_parameter_list(3), "float a, float b, float __arg2");
        assert_eq!(
            field.forward_argument_list(2),
            "std::forward<float>(a), std::forward<float>(b)"
        );
    }

    #[test]
    fn packed_parameters() {
        let field = Field::function("Emplace", "void")
            .with_param(Parameter::new("Args&&", "args").with_packed(true));
        assert_eq!(field.param_type_list(1), "Args&&...");
        assert_eq!(field.named_parameter_list(1), "Args&&... args");
        assert_eq!(field.forward_argument_list(1), "std::forward<Args&&>(args)...");
    }

    #[test]
    fn qualified_function_types() {
        let field = Field::function("Get", "const int&")
            .with_const(true)
            .with_ref_qualifier(RefQualifier::LValue);
        assert_eq!(field.function_type("Type"), "const int&(Type::*)() const&");

        let field = Field::function("Take", "virtual int").with_ref_qualifier(RefQualifier::RValue);
        assert_eq!(field.function_type("A<T>"), "int(A<T>::*)() &&");

        let field = Field::function("Poll", "int")
            .with_const(true)
            .with_volatile(true)
            .with_ref_qualifier(RefQualifier::LValue);
        assert_eq!(field.qualifiers.cv_text(), "const volatile");
        assert_eq!(field.function_type("Type"), "int(Type::*)() const volatile&");

        let field = Field::function("Read", "int").with_volatile(true);
        assert_eq!(field.qualifiers.text(), "volatile");
        assert_eq!(field.function_type("Type"), "int(Type::*)() volatile");
    }

    #[test]
    fn special_members() {
        assert_eq!(Field::constructor("Point").name, "Point");
        assert_eq!(Field::destructor("Point").name, "~Point");
        assert!(Field::destructor("Point").is_member_function());
        assert!(Field::function("Make", "Point").with_static(true).is_static_function());
    }
}
