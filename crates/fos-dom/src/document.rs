//! Document - node factory

use std::cell::Cell;
use std::rc::Rc;

use crate::names::{validate_and_extract, validate_name};
use crate::namespace::HTML;
use crate::{Attr, DomResult, Element, NodeId};

/// HTML or XML document; decides attribute name case-folding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentKind {
    Html,
    #[default]
    Xml,
}

#[derive(Debug)]
struct DocumentInner {
    kind: Cell<DocumentKind>,
}

/// Document handle; clones refer to the same document
#[derive(Debug, Clone)]
pub struct Document(Rc<DocumentInner>);

impl Document {
    pub fn new(kind: DocumentKind) -> Self {
        Self(Rc::new(DocumentInner {
            kind: Cell::new(kind),
        }))
    }

    pub fn html() -> Self {
        Self::new(DocumentKind::Html)
    }

    pub fn xml() -> Self {
        Self::new(DocumentKind::Xml)
    }

    pub fn kind(&self) -> DocumentKind {
        self.0.kind.get()
    }

    pub fn is_html(&self) -> bool {
        self.kind() == DocumentKind::Html
    }

    /// Existing elements see the new kind on their next lookup
    pub fn set_kind(&self, kind: DocumentKind) {
        tracing::debug!("Document kind changed to {:?}", kind);
        self.0.kind.set(kind);
    }

    /// Create an element; HTML documents lower-case the name and use the
    /// HTML namespace
    pub fn create_element(&self, local_name: &str) -> DomResult<Element> {
        validate_name(local_name)?;
        let (namespace, local_name) = if self.is_html() {
            (Some(HTML.to_string()), local_name.to_ascii_lowercase())
        } else {
            (None, local_name.to_string())
        };
        Ok(Element::new(self.clone(), NodeId::next(), namespace, None, local_name))
    }

    pub fn create_element_ns(
        &self,
        namespace: Option<&str>,
        qualified_name: &str,
    ) -> DomResult<Element> {
        let name = validate_and_extract(namespace, qualified_name)?;
        Ok(Element::new(
            self.clone(),
            NodeId::next(),
            name.namespace,
            name.prefix,
            name.local_name,
        ))
    }

    /// Create a detached attribute with an empty value
    pub fn create_attribute(&self, local_name: &str) -> DomResult<Attr> {
        validate_name(local_name)?;
        let name = if self.is_html() {
            local_name.to_ascii_lowercase()
        } else {
            local_name.to_string()
        };
        Ok(Attr::new(name.clone(), None, None, name))
    }

    pub fn create_attribute_ns(&self, namespace: Option<&str>, qualified_name: &str) -> DomResult<Attr> {
        let name = validate_and_extract(namespace, qualified_name)?;
        Ok(Attr::new(
            qualified_name.to_string(),
            name.namespace,
            name.prefix,
            name.local_name,
        ))
    }
}
