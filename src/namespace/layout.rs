//! # Key Layout
//!
//! Path layout vs separator layout for keys under a namespace prefix.

use crate::config::StoreOptions;
use crate::constants::PATH_DELIMITER;

/// How keys are placed under a namespace prefix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyLayout {
    /// `{prefix}/{key}`, listed with a path query on `{prefix}`
    #[default]
    Path,
    /// `[sep]{prefix}{sep}{key}`, listed with a prefix query on `[sep]{prefix}{sep}`
    Separator {
        separator: String,
        /// Whether the namespace prefix itself begins with the separator
        lead: bool,
    },
}

impl KeyLayout {
    pub fn separator(separator: impl Into<String>) -> Self {
        KeyLayout::Separator {
            separator: separator.into(),
            lead: false,
        }
    }

    pub fn lead_separator(separator: impl Into<String>) -> Self {
        KeyLayout::Separator {
            separator: separator.into(),
            lead: true,
        }
    }

    /// Separator layout when `key_separator` is set and non-empty, path layout otherwise.
    /// `lead_separator` only applies to separator layout.
    pub fn from_options(options: &StoreOptions) -> Self {
        match options.key_separator.as_deref() {
            Some(separator) if !separator.is_empty() => KeyLayout::Separator {
                separator: separator.to_owned(),
                lead: options.lead_separator,
            },
            _ => KeyLayout::Path,
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, KeyLayout::Path)
    }

    /// The argument for listing every key of a namespace: a path for path layout,
    /// a name prefix for separator layout
    pub fn scope(&self, prefix: &str) -> String {
        match self {
            KeyLayout::Path => prefix.to_owned(),
            KeyLayout::Separator { separator, lead } => {
                let lead = if *lead { separator.as_str() } else { "" };
                format!("{lead}{prefix}{separator}")
            }
        }
    }

    /// Full key name of `key` under a namespace prefix
    pub fn key(&self, prefix: &str, key: &str) -> String {
        match self {
            KeyLayout::Path => format!("{prefix}{PATH_DELIMITER}{key}"),
            KeyLayout::Separator { .. } => format!("{}{key}", self.scope(prefix)),
        }
    }
}
