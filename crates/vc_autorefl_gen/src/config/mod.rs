//! Generation options, read-only for the duration of a run.

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "toml")]
mod from_toml;

mod error;

// -----------------------------------------------------------------------------
// Exports

pub use error::ConfigError;

// -----------------------------------------------------------------------------
// ConstMode

/// Declaration form of the generated `attrs` and `fields` lists.
///
/// The keywords are part of the textual contract with every consumer of the
/// generated files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstMode {
    /// `static constexpr`, evaluated at compile time.
    #[default]
    Constexpr,
    /// `inline static const`, immutable at runtime.
    Const,
    /// `inline static`, mutable at runtime.
    NonConst,
}

impl ConstMode {
    /// Storage keywords placed before the list type.
    #[inline]
    pub const fn storage(self) -> &'static str {
        match self {
            Self::Constexpr => "static constexpr",
            Self::Const => "inline static const",
            Self::NonConst => "inline static",
        }
    }

    /// Name accepted by [`FromStr`](core::str::FromStr).
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constexpr => "constexpr",
            Self::Const => "const",
            Self::NonConst => "non_const",
        }
    }
}

impl core::str::FromStr for ConstMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constexpr" => Ok(Self::Constexpr),
            "const" => Ok(Self::Const),
            "non_const" => Ok(Self::NonConst),
            _ => Err(ConfigError::UnknownConstMode(s.to_owned())),
        }
    }
}

// -----------------------------------------------------------------------------
// MarkerNames

/// Reserved attribute names that carry special meaning inside the generic
/// attribute mechanism.
///
/// All markers live in [`namespace`](MarkerNames::namespace), so with the
/// default options they render as `UMeta::constructor` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerNames {
    pub namespace: String,
    pub constructor: String,
    pub destructor: String,
    pub initializer: String,
    pub default_functions: String,
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self {
            namespace: "UMeta".into(),
            constructor: "constructor".into(),
            destructor: "destructor".into(),
            initializer: "initializer".into(),
            default_functions: "default_functions".into(),
        }
    }
}

// -----------------------------------------------------------------------------
// Config

/// Options of one generation run.
///
/// # Example
///
/// ```
/// use vc_autorefl_gen::{Config, ConstMode};
///
/// let config = Config::default()
///     .with_const_mode(ConstMode::Const)
///     .with_attr_value_to_function(true);
///
/// assert_eq!(config.attr_list_const_mode.storage(), "inline static const");
/// assert!(config.is_initializer_as_attr);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    pub attr_list_const_mode: ConstMode,
    /// Render non-namespaced attribute names as identifiers instead of strings.
    pub non_namespace_name_without_quotation: bool,
    /// Render namespaced attribute names as strings instead of qualified names.
    pub namespace_name_with_quotation: bool,
    /// Wrap attribute values into zero-argument lambdas.
    pub is_attr_value_to_function: bool,
    /// Surface default member initializers as attributes.
    pub is_initializer_as_attr: bool,
    /// Synthesize adapters for functions with default arguments.
    pub generate_default_functions: bool,
    pub markers: MarkerNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attr_list_const_mode: ConstMode::Constexpr,
            non_namespace_name_without_quotation: false,
            namespace_name_with_quotation: false,
            is_attr_value_to_function: false,
            is_initializer_as_attr: true,
            generate_default_functions: true,
            markers: MarkerNames::default(),
        }
    }
}

impl Config {
    #[inline]
    pub fn with_const_mode(self, attr_list_const_mode: ConstMode) -> Self {
        Self {
            attr_list_const_mode,
            ..self
        }
    }

    #[inline]
    pub fn with_non_namespace_name_without_quotation(self, enable: bool) -> Self {
        Self {
            non_namespace_name_without_quotation: enable,
            ..self
        }
    }

    #[inline]
    pub fn with_namespace_name_with_quotation(self, enable: bool) -> Self {
        Self {
            namespace_name_with_quotation: enable,
            ..self
        }
    }

    #[inline]
    pub fn with_attr_value_to_function(self, enable: bool) -> Self {
        Self {
            is_attr_value_to_function: enable,
            ..self
        }
    }

    #[inline]
    pub fn with_initializer_as_attr(self, enable: bool) -> Self {
        Self {
            is_initializer_as_attr: enable,
            ..self
        }
    }

    #[inline]
    pub fn with_default_functions(self, enable: bool) -> Self {
        Self {
            generate_default_functions: enable,
            ..self
        }
    }

    #[inline]
    pub fn with_markers(self, markers: MarkerNames) -> Self {
        Self { markers, ..self }
    }

    /// Whether an attribute name is written without quotes.
    ///
    /// Namespaced names follow the inverse of
    /// [`namespace_name_with_quotation`](Self::namespace_name_with_quotation).
    #[inline]
    pub fn name_without_quotation(&self, namespaced: bool) -> bool {
        if namespaced {
            !self.namespace_name_with_quotation
        } else {
            self.non_namespace_name_without_quotation
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
