//! DOMException
//!
//! Error names and legacy codes follow WebIDL's error names table.

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomException>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomException {
    /// The attribute belongs to another element
    #[error("InUseAttributeError: The attribute is in use by another element.")]
    InUseAttribute,

    /// Nothing matched; carries what was asked for
    #[error("NotFoundError: {0}")]
    NotFound(String),

    /// Not a valid XML Name / QName
    #[error("InvalidCharacterError: {0}")]
    InvalidCharacter(String),

    /// Violates Namespaces in XML
    #[error("NamespaceError: {0}")]
    Namespace(String),
}

impl DomException {
    pub const INVALID_CHARACTER_ERR: u16 = 5;
    pub const NOT_FOUND_ERR: u16 = 8;
    pub const INUSE_ATTRIBUTE_ERR: u16 = 10;
    pub const NAMESPACE_ERR: u16 = 14;

    /// WebIDL error name
    pub fn name(&self) -> &'static str {
        match self {
            Self::InUseAttribute => "InUseAttributeError",
            Self::NotFound(_) => "NotFoundError",
            Self::InvalidCharacter(_) => "InvalidCharacterError",
            Self::Namespace(_) => "NamespaceError",
        }
    }

    /// Legacy numeric code
    pub fn code(&self) -> u16 {
        match self {
            Self::InUseAttribute => Self::INUSE_ATTRIBUTE_ERR,
            Self::NotFound(_) => Self::NOT_FOUND_ERR,
            Self::InvalidCharacter(_) => Self::INVALID_CHARACTER_ERR,
            Self::Namespace(_) => Self::NAMESPACE_ERR,
        }
    }

    /// Context carried with the error, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::InUseAttribute => None,
            Self::NotFound(s) | Self::InvalidCharacter(s) | Self::Namespace(s) => Some(s),
        }
    }

    /// `NotFoundError` for a namespaced query: `"<ns> : <local>"`, or just
    /// the local name when the namespace is null/empty
    pub(crate) fn not_found_ns(namespace: Option<&str>, local_name: &str) -> Self {
        match namespace {
            Some(ns) if !ns.is_empty() => Self::NotFound(format!("{ns} : {local_name}")),
            _ => Self::NotFound(local_name.to_string()),
        }
    }
}
