/// One parameter of a class template.
///
/// `kind` is whatever introduces the parameter: `typename`, `class`,
/// a non-type parameter type such as `int`, or a template template header.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateParameter {
    pub kind: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_packed: bool,
}

impl TemplateParameter {
    #[inline]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            is_packed: false,
        }
    }

    /// Shorthand for `typename NAME`.
    #[inline]
    pub fn typename(name: impl Into<String>) -> Self {
        Self::new("typename", name)
    }

    #[inline]
    pub fn with_packed(self, is_packed: bool) -> Self {
        Self { is_packed, ..self }
    }

    /// Text inside `template<...>`, e.g. `typename T` or `typename... Ts`.
    pub fn declaration(&self) -> String {
        if self.is_packed {
            format!("{}... {}", self.kind, self.name)
        } else {
            format!("{} {}", self.kind, self.name)
        }
    }

    /// Text inside `Name<...>`, e.g. `T` or `Ts...`.
    pub fn argument(&self) -> String {
        if self.is_packed {
            format!("{}...", self.name)
        } else {
            self.name.clone()
        }
    }
}
