/// C++ member and base access.
///
/// Defaults to [`Private`](AccessSpecifier::Private), which is what a
/// `class` member gets without an explicit specifier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessSpecifier {
    Public,
    Protected,
    #[default]
    Private,
}

impl AccessSpecifier {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    /// The C++ keyword.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl core::fmt::Display for AccessSpecifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
