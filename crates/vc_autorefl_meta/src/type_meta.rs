use crate::{Attr, Base, Field, TemplateParameter};

/// Structural description of one reflectable type.
///
/// `fields` and `attrs` keep declaration order; the order becomes the
/// iteration order observed through the reflection runtime.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeMeta {
    pub name: String,
    /// Enclosing namespaces, outermost first.
    pub namespaces: Vec<String>,
    /// Empty for non-template types.
    pub template_parameters: Vec<TemplateParameter>,
    pub bases: Vec<Base>,
    pub fields: Vec<Field>,
    pub attrs: Vec<Attr>,
}

impl TypeMeta {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_namespaces<S: Into<String>>(
        mut self,
        namespaces: impl IntoIterator<Item = S>,
    ) -> Self {
        self.namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn with_template_parameter(mut self, param: TemplateParameter) -> Self {
        self.template_parameters.push(param);
        self
    }

    #[inline]
    pub fn with_base(mut self, base: Base) -> Self {
        self.bases.push(base);
        self
    }

    #[inline]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[inline]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    #[inline]
    pub fn is_template_type(&self) -> bool {
        !self.template_parameters.is_empty()
    }

    /// Qualified name without template arguments, e.g. `Ubpa::Vec`.
    ///
    /// This is the name registered for runtime lookup.
    pub fn ns_name(&self) -> String {
        let mut name = String::new();
        for ns in &self.namespaces {
            name.push_str(ns);
            name.push_str("::");
        }
        name.push_str(&self.name);
        name
    }

    /// Qualified name naming the specialization target, e.g. `Ubpa::Vec<T, N>`.
    ///
    /// ```
    /// # use vc_autorefl_meta::{TemplateParameter, TypeMeta};
    /// let vec = TypeMeta::new("Vec")
    ///     .with_namespaces(["Ubpa"])
    ///     .with_template_parameter(TemplateParameter::typename("T"))
    ///     .with_template_parameter(TemplateParameter::new("size_t", "N"));
    /// assert_eq!(vec.full_name(), "Ubpa::Vec<T, N>");
    /// assert_eq!(vec.ns_name(), "Ubpa::Vec");
    /// assert_eq!(vec.template_list(), "typename T, size_t N");
    /// ```
    pub fn full_name(&self) -> String {
        let mut name = self.ns_name();
        if self.is_template_type() {
            name.push('<');
            name.push_str(&self.template_arguments());
            name.push('>');
        }
        name
    }

    /// Template parameter declarations, e.g. `typename T, typename... Ts`.
    pub fn template_list(&self) -> String {
        self.template_parameters
            .iter()
            .map(TemplateParameter::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Template arguments naming the primary template, e.g. `T, Ts...`.
    pub fn template_arguments(&self) -> String {
        self.template_parameters
            .iter()
            .map(TemplateParameter::argument)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bases declared `public`, in declaration order.
    pub fn public_bases(&self) -> impl Iterator<Item = &Base> {
        self.bases.iter().filter(|base| base.access.is_public())
    }

    /// Member name the front end uses for constructors.
    #[inline]
    pub fn constructor_name(&self) -> &str {
        &self.name
    }

    /// Member name the front end uses for the destructor.
    #[inline]
    pub fn destructor_name(&self) -> String {
        format!("~{}", self.name)
    }
}

// -----------------------------------------------------------------------------
// Tests
