//! XML Name and QName checks
//!
//! Covers the Name production of XML 1.0 (fifth edition) and the
//! validate-and-extract step used by the namespaced factories.

use crate::namespace::{XML, XMLNS};
use crate::{DomException, DomResult};

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// Matches the XML `Name` production
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start_char(c) => chars.all(is_name_char),
        _ => false,
    }
}

/// Fails with `InvalidCharacterError` unless `name` is a valid Name
pub(crate) fn validate_name(name: &str) -> DomResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DomException::InvalidCharacter(name.to_string()))
    }
}

/// Namespace, prefix and local name resolved from a qualified name
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractedName {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub local_name: String,
}

/// Validate `qualified_name` against `namespace` and split it
pub(crate) fn validate_and_extract(
    namespace: Option<&str>,
    qualified_name: &str,
) -> DomResult<ExtractedName> {
    let namespace = namespace.filter(|ns| !ns.is_empty());

    let (prefix, local_name) = match qualified_name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qualified_name),
    };
    let well_formed = prefix.is_none_or(|p| !p.is_empty() && !p.contains(':'))
        && !local_name.is_empty()
        && !local_name.contains(':')
        && is_valid_name(qualified_name);
    if !well_formed {
        return Err(DomException::InvalidCharacter(qualified_name.to_string()));
    }

    if prefix.is_some() && namespace.is_none() {
        return Err(DomException::Namespace(format!(
            "prefix without namespace: {qualified_name}"
        )));
    }
    if prefix == Some("xml") && namespace != Some(XML) {
        return Err(DomException::Namespace(format!(
            "xml prefix requires {XML}"
        )));
    }
    let is_xmlns_name = qualified_name == "xmlns" || prefix == Some("xmlns");
    if is_xmlns_name && namespace != Some(XMLNS) {
        return Err(DomException::Namespace(format!(
            "{qualified_name} requires {XMLNS}"
        )));
    }
    if namespace == Some(XMLNS) && !is_xmlns_name {
        return Err(DomException::Namespace(format!(
            "{XMLNS} requires the xmlns prefix"
        )));
    }

    Ok(ExtractedName {
        namespace: namespace.map(str::to_string),
        prefix: prefix.map(str::to_string),
        local_name: local_name.to_string(),
    })
}
