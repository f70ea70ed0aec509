use toml_edit::{Document, Table, TableLike};

use super::{Config, ConfigError, ConstMode, MarkerNames};

const CONFIG_KEYS: &[&str] = &[
    "attr_list_const_mode",
    "non_namespace_name_without_quotation",
    "namespace_name_with_quotation",
    "is_attr_value_to_function",
    "is_initializer_as_attr",
    "generate_default_functions",
    "markers",
];

const MARKER_KEYS: &[&str] = &[
    "namespace",
    "constructor",
    "destructor",
    "initializer",
    "default_functions",
];

impl Config {
    /// Reads options from a TOML document.
    ///
    /// Keys are the field names of [`Config`] and [`MarkerNames`]. Missing
    /// keys keep their [`Default`] value; unknown keys and keys with a wrong
    /// value type are rejected.
    ///
    /// ```toml
    /// attr_list_const_mode = "const"
    /// non_namespace_name_without_quotation = false
    /// namespace_name_with_quotation = false
    /// is_attr_value_to_function = true
    /// is_initializer_as_attr = true
    /// generate_default_functions = true
    ///
    /// [markers]
    /// namespace = "UMeta"
    /// constructor = "constructor"
    /// destructor = "destructor"
    /// initializer = "initializer"
    /// default_functions = "default_functions"
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use vc_autorefl_gen::{Config, ConstMode};
    ///
    /// let config = Config::from_toml_str("attr_list_const_mode = \"non_const\"").unwrap();
    /// assert_eq!(config.attr_list_const_mode, ConstMode::NonConst);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let document = Document::parse(text)?;
        let document: &Table = &document;
        reject_unknown_keys(document, CONFIG_KEYS, "")?;

        let mut config = Config::default();

        if let Some(mode) = read_str(document, "attr_list_const_mode")? {
            config.attr_list_const_mode = mode.parse::<ConstMode>()?;
        }

        read_bool_into(
            document,
            "non_namespace_name_without_quotation",
            &mut config.non_namespace_name_without_quotation,
        )?;
        read_bool_into(
            document,
            "namespace_name_with_quotation",
            &mut config.namespace_name_with_quotation,
        )?;
        read_bool_into(
            document,
            "is_attr_value_to_function",
            &mut config.is_attr_value_to_function,
        )?;
        read_bool_into(
            document,
            "is_initializer_as_attr",
            &mut config.is_initializer_as_attr,
        )?;
        read_bool_into(
            document,
            "generate_default_functions",
            &mut config.generate_default_functions,
        )?;

        if let Some(item) = document.get("markers") {
            let table = item.as_table_like().ok_or(ConfigError::InvalidType {
                key: "markers",
                expected: "a table",
            })?;
            read_markers(table, &mut config.markers)?;
        }

        log::debug!("loaded autorefl config: {config:?}");
        Ok(config)
    }
}

fn read_markers(table: &dyn TableLike, markers: &mut MarkerNames) -> Result<(), ConfigError> {
    reject_unknown_keys(table, MARKER_KEYS, "markers.")?;

    let slots: [(&'static str, &mut String); 5] = [
        ("namespace", &mut markers.namespace),
        ("constructor", &mut markers.constructor),
        ("destructor", &mut markers.destructor),
        ("initializer", &mut markers.initializer),
        ("default_functions", &mut markers.default_functions),
    ];

    for (key, slot) in slots {
        if let Some(value) = read_str(table, key)? {
            *slot = value.to_owned();
        }
    }
    Ok(())
}

fn reject_unknown_keys<T: TableLike + ?Sized>(
    table: &T,
    known: &[&str],
    prefix: &str,
) -> Result<(), ConfigError> {
    match table.iter().find(|(key, _)| !known.contains(key)) {
        Some((key, _)) => Err(ConfigError::UnknownKey(format!("{prefix}{key}"))),
        None => Ok(()),
    }
}

fn read_str<'a, T: TableLike + ?Sized>(
    table: &'a T,
    key: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(item) => item.as_str().map(Some).ok_or(ConfigError::InvalidType {
            key,
            expected: "a string",
        }),
    }
}

fn read_bool_into<T: TableLike + ?Sized>(
    table: &T,
    key: &'static str,
    slot: &mut bool,
) -> Result<(), ConfigError> {
    if let Some(item) = table.get(key) {
        *slot = item.as_bool().ok_or(ConfigError::InvalidType {
            key,
            expected: "a boolean",
        })?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests
