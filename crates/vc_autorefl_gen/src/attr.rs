//! Serialization of single attributes.

use core::fmt;

use vc_autorefl_meta::Attr;

use crate::Config;

/// Rendered name and value of one attribute.
///
/// Displays as the list entry `Attr {NAME}` or `Attr {NAME, VALUE}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrText {
    pub name: String,
    pub value: Option<String>,
}

impl fmt::Display for AttrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Attr {{{}, {}}}", self.name, value),
            None => write!(f, "Attr {{{}}}", self.name),
        }
    }
}

/// Renders an attribute name under the quoting rules of `config`.
///
/// Non-namespaced names are quoted unless
/// [`non_namespace_name_without_quotation`](Config::non_namespace_name_without_quotation)
/// is set; namespaced names are qualified references unless
/// [`namespace_name_with_quotation`](Config::namespace_name_with_quotation) is set.
pub fn render_attr_name(namespace: &str, name: &str, config: &Config) -> String {
    let qualified = if namespace.is_empty() {
        name.to_owned()
    } else {
        format!("{namespace}::{name}")
    };

    quote_name(qualified, !namespace.is_empty(), config)
}

fn quote_name(qualified: String, namespaced: bool, config: &Config) -> String {
    if config.name_without_quotation(namespaced) {
        qualified
    } else {
        format!("\"{qualified}\"")
    }
}

/// Renders a marker name, which always lives in the marker namespace.
#[inline]
pub fn render_marker_name(marker: &str, config: &Config) -> String {
    render_attr_name(&config.markers.namespace, marker, config)
}

/// `[]{ return EXPR; }`
#[inline]
pub fn lazy_value(expr: &str) -> String {
    format!("[]{{ return {expr}; }}")
}

/// `[]()->RET{ return EXPR; }`
#[inline]
pub fn typed_lazy_value(expr: &str, ret: &str) -> String {
    format!("[]()->{ret}{{ return {expr}; }}")
}

/// Renders one declared attribute.
///
/// # Example
///
/// ```
/// use vc_autorefl_gen::{Config, attr::render_attr};
/// use vc_autorefl_meta::Attr;
///
/// let config = Config::default();
/// let text = render_attr(&Attr::new("info").with_value("\"hello\""), &config);
/// assert_eq!(text.to_string(), r#"Attr {"info", "hello"}"#);
///
/// let text = render_attr(&Attr::new("range").with_namespace("Ubpa"), &config);
/// assert_eq!(text.to_string(), "Attr {Ubpa::range}");
/// ```
pub fn render_attr(attr: &Attr, config: &Config) -> AttrText {
    let name = quote_name(attr.qualified_name(), attr.is_namespaced(), config);
    let value = attr.has_value().then(|| {
        if config.is_attr_value_to_function {
            lazy_value(&attr.value)
        } else {
            attr.value.clone()
        }
    });
    AttrText { name, value }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use vc_autorefl_meta::Attr;

    use super::{render_attr, render_attr_name, typed_lazy_value};
    use crate::Config;

    #[test]
    fn quoting_rules() {
        let default = Config::default();
        assert_eq!(render_attr_name("", "size", &default), "\"size\"");
        assert_eq!(render_attr_name("Ubpa", "size", &default), "Ubpa::size");

        let flipped = Config::default()
            .with_non_namespace_name_without_quotation(true)
            .with_namespace_name_with_quotation(true);
        assert_eq!(render_attr_name("", "size", &flipped), "size");
        assert_eq!(render_attr_name("Ubpa", "size", &flipped), "\"Ubpa::size\"");
    }

    #[test]
    fn namespaced_attrs() {
        let range = Attr::new("range").with_namespace("Ubpa");
        let plain = Attr::new("range");

        assert_eq!(render_attr(&range, &Config::default()).name, "Ubpa::range");
        assert_eq!(render_attr(&plain, &Config::default()).name, "\"range\"");

        let quoted = Config::default().with_namespace_name_with_quotation(true);
        assert_eq!(render_attr(&range, &quoted).name, "\"Ubpa::range\"");
        assert_eq!(render_attr(&plain, &quoted).name, "\"range\"");
    }

    #[test]
    fn values() {
        let attr = Attr::new("size").with_value("8");

        let text = render_attr(&attr, &Config::default());
        assert_eq!(text.value.as_deref(), Some("8"));
        assert_eq!(text.to_string(), "Attr {\"size\", 8}");

        let text = render_attr(&attr, &Config::default().with_attr_value_to_function(true));
        assert_eq!(text.to_string(), "Attr {\"size\", []{ return 8; }}");

        let text = render_attr(&Attr::new("not_serialize"), &Config::default());
        assert_eq!(text.value, None);
        assert_eq!(text.to_string(), "Attr {\"not_serialize\"}");
    }

    #[test]
    fn typed_value() {
        assert_eq!(typed_lazy_value("1.f", "float"), "[]()->float{ return 1.f; }");
    }
}
