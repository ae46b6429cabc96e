//! Well-known namespace URIs
//!
//! A read-only table. Entries are `'static` data, so nothing can reassign them.

/// HTML namespace
pub const HTML: &str = "http://www.w3.org/1999/xhtml";
/// SVG namespace
pub const SVG: &str = "http://www.w3.org/2000/svg";
/// Namespace bound to the `xml` prefix
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
/// Namespace bound to the `xmlns` prefix
pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";

/// Key/URI pairs, in a stable order
pub static NAMESPACE: &[(&str, &str)] = &[
    ("HTML", HTML),
    ("SVG", SVG),
    ("XML", XML),
    ("XMLNS", XMLNS),
];

/// Look up a namespace URI by its key (`"HTML"`, `"XML"`, ...)
pub fn get(key: &str) -> Option<&'static str> {
    NAMESPACE.iter().find(|(k, _)| *k == key).map(|(_, uri)| *uri)
}

/// Typed view of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Namespace {
    Html,
    Svg,
    Xml,
    Xmlns,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [Self::Html, Self::Svg, Self::Xml, Self::Xmlns];

    /// Namespace URI
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Html => HTML,
            Self::Svg => SVG,
            Self::Xml => XML,
            Self::Xmlns => XMLNS,
        }
    }

    /// Key in [`NAMESPACE`]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Svg => "SVG",
            Self::Xml => "XML",
            Self::Xmlns => "XMLNS",
        }
    }

    /// Exact match against a URI, no normalization
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.uri() == uri)
    }

    /// Whether `uri` names this namespace
    #[inline]
    pub fn matches(self, uri: Option<&str>) -> bool {
        uri == Some(self.uri())
    }
}
