/// A user attribute attached to a type or a member.
///
/// For `[[Ubpa::range(0, 10)]]` the front end records `namespace = "Ubpa"`,
/// `name = "range"` and `value = "std::pair{0, 10}"`-like expression text.
///
/// An empty `namespace` means the attribute is not namespaced, an empty
/// `value` means the attribute carries no value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attr {
    #[cfg_attr(feature = "serde", serde(default))]
    pub namespace: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: String,
}

impl Attr {
    /// Creates a non-namespaced attribute without value.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            name: name.into(),
            value: String::new(),
        }
    }

    #[inline]
    pub fn with_namespace(self, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..self
        }
    }

    #[inline]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self
        }
    }

    #[inline]
    pub fn is_namespaced(&self) -> bool {
        !self.namespace.is_empty()
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Returns `namespace::name`, or `name` when not namespaced.
    ///
    /// ```
    /// # use vc_autorefl_meta::Attr;
    /// assert_eq!(Attr::new("info").qualified_name(), "info");
    /// assert_eq!(Attr::new("range").with_namespace("Ubpa").qualified_name(), "Ubpa::range");
    /// ```
    pub fn qualified_name(&self) -> String {
        if self.is_namespaced() {
            format!("{}::{}", self.namespace, self.name)
        } else {
            self.name.clone()
        }
    }
}
