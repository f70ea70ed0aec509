use crate::AccessSpecifier;

/// A base class of a reflected type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Base {
    /// Type name as written in the base-specifier, template arguments included.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub access: AccessSpecifier,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_virtual: bool,
    /// `struct A : Bases...`
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_packed: bool,
}

impl Base {
    #[inline]
    pub fn new(name: impl Into<String>, access: AccessSpecifier) -> Self {
        Self {
            name: name.into(),
            access,
            is_virtual: false,
            is_packed: false,
        }
    }

    #[inline]
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, AccessSpecifier::Public)
    }

    #[inline]
    pub fn with_virtual(self, is_virtual: bool) -> Self {
        Self { is_virtual, ..self }
    }

    #[inline]
    pub fn with_packed(self, is_packed: bool) -> Self {
        Self { is_packed, ..self }
    }

    /// Entry of the `TypeInfoBase` inheritance list.
    ///
    /// ```
    /// # use vc_autorefl_meta::Base;
    /// assert_eq!(Base::public("A").generate_text(), "Base<A>");
    /// assert_eq!(Base::public("A").with_virtual(true).generate_text(), "Base<A, true>");
    /// assert_eq!(Base::public("Ts").with_packed(true).generate_text(), "Base<Ts>...");
    /// ```
    pub fn generate_text(&self) -> String {
        let mut text = format!("Base<{}", self.name);
        if self.is_virtual {
            text.push_str(", true");
        }
        text.push('>');
        if self.is_packed {
            text.push_str("...");
        }
        text
    }
}
