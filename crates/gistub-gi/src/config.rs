//! Static lookup tables consulted during generation.
//!
//! Everything here is membership-test configuration: which attribute names
//! to skip, which wrapper functions strip a leading boolean result, which
//! classes are unreliable static bindings, and so on. The defaults encode
//! what is known about current PyGObject; callers can override any table.

/// The default (module, minimum version) generation list.
pub const DEFAULT_MODULES: &[(&str, &str)] = &[
    ("GObject", "2.0"),
    ("GLib", "2.0"),
    ("Gdk", "3.0"),
    ("Gtk", "3.0"),
    ("Gio", "2.0"),
    ("GtkSource", "3.0"),
    ("Pango", "1.0"),
    ("GdkPixbuf", "2.0"),
    ("cairo", "1.0"),
];

/// Generation configuration.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Attribute names skipped everywhere. Covers constructor-only
    /// annotations (`new` belongs on `__init__`), private-by-convention
    /// names, and names we cannot annotate yet.
    pub ignore_attrs: Vec<String>,
    /// Qualname prefix identifying the wrapper that discards a leading
    /// boolean success flag from the wrapped callable's returns.
    pub bool_wrapper_prefix: String,
    /// Class names whose attribute access is known to fail on some
    /// installations; fetch failures on these are skipped silently.
    pub static_bindings: Vec<String>,
    /// Name suffixes of internal-convention classes skipped at module scope.
    pub internal_suffixes: Vec<String>,
    /// Origin modules whose classes are statically bound internals.
    pub static_modules: Vec<String>,
    /// Enum member names accepted without a declared-value match. Covers
    /// the known mask value that overflows the declared member range.
    pub overflow_exempt: Vec<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            ignore_attrs: vec![
                "new".to_string(),
                "priv".to_string(),
                "widget".to_string(),
            ],
            bool_wrapper_prefix: "strip_boolean_result".to_string(),
            static_bindings: vec![
                "Pid".to_string(),
                "Variant".to_string(),
                "VariantBuilder".to_string(),
            ],
            internal_suffixes: vec!["Class".to_string(), "Private".to_string()],
            static_modules: vec!["gi._glib".to_string()],
            overflow_exempt: vec!["LEVEL_MASK".to_string()],
        }
    }
}

impl GenConfig {
    pub fn is_ignored(&self, attr: &str) -> bool {
        self.ignore_attrs.iter().any(|a| a == attr)
    }

    pub fn is_bool_wrapper(&self, qualname: &str) -> bool {
        qualname.starts_with(&self.bool_wrapper_prefix)
    }

    pub fn is_static_binding(&self, entity_name: &str) -> bool {
        self.static_bindings.iter().any(|n| n == entity_name)
    }

    pub fn is_internal_class_name(&self, name: &str) -> bool {
        self.internal_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn is_static_module(&self, module: &str) -> bool {
        self.static_modules.iter().any(|m| m == module)
    }

    pub fn is_overflow_exempt(&self, attr: &str) -> bool {
        self.overflow_exempt.iter().any(|a| a == attr)
    }
}
