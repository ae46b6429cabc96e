//! Element attribute API
//!
//! getAttribute, setAttribute, removeAttribute and their NS variants, all
//! routed through the element's [`NamedNodeMap`].

use std::fmt;
use std::rc::Rc;

use crate::names::{validate_and_extract, validate_name};
use crate::{Attr, Document, DocumentKind, DomResult, NamedNodeMap, Namespace, NodeId};

/// What a [`NamedNodeMap`] needs from the element that owns it
pub trait AttributeOwner: fmt::Debug {
    /// Identity compared against [`Attr::owner_element`]
    fn node_id(&self) -> NodeId;

    /// HTML document and HTML namespace; decides attribute name case-folding
    fn is_in_html_document_and_namespace(&self) -> bool;
}

#[derive(Debug)]
struct ElementData {
    id: NodeId,
    document: Document,
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
}

impl AttributeOwner for ElementData {
    fn node_id(&self) -> NodeId {
        self.id
    }

    fn is_in_html_document_and_namespace(&self) -> bool {
        self.document.kind() == DocumentKind::Html
            && Namespace::Html.matches(self.namespace.as_deref())
    }
}

/// Element with its attribute collection
#[derive(Debug)]
pub struct Element {
    data: Rc<ElementData>,
    attributes: NamedNodeMap,
}

impl Element {
    pub(crate) fn new(
        document: Document,
        id: NodeId,
        namespace: Option<String>,
        prefix: Option<String>,
        local_name: String,
    ) -> Self {
        let data = Rc::new(ElementData {
            id,
            document,
            namespace,
            prefix,
            local_name,
        });
        let attributes = NamedNodeMap::new(data.clone());
        Self { data, attributes }
    }

    pub fn node_id(&self) -> NodeId {
        self.data.id
    }

    pub fn owner_document(&self) -> &Document {
        &self.data.document
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        self.data.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.data.prefix.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.data.local_name
    }

    /// Qualified name
    pub fn tag_name(&self) -> String {
        match &self.data.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.data.local_name),
            None => self.data.local_name.clone(),
        }
    }

    /// Re-evaluated on every call; follows [`Document::set_kind`]
    pub fn is_in_html_document_and_namespace(&self) -> bool {
        self.data.is_in_html_document_and_namespace()
    }

    /// The live attribute collection
    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attributes
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Qualified names in insertion order
    pub fn get_attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(Attr::name).collect()
    }

    pub fn get_attribute_node(&self, name: &str) -> Option<&Attr> {
        self.attributes.get_named_item(name)
    }

    pub fn get_attribute_node_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&Attr> {
        self.attributes.get_named_item_ns(namespace, local_name)
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.get_attribute_node(name).map(Attr::value)
    }

    pub fn get_attribute_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<String> {
        self.get_attribute_node_ns(namespace, local_name).map(Attr::value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute_node(name).is_some()
    }

    pub fn has_attribute_ns(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self.get_attribute_node_ns(namespace, local_name).is_some()
    }

    /// HTML elements in HTML documents store names lower-cased
    fn normalize_name(&self, name: &str) -> String {
        if self.is_in_html_document_and_namespace() {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    /// Set attribute value, creating the attribute if needed
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> DomResult<()> {
        validate_name(name)?;
        let name = self.normalize_name(name);
        if let Some(attr) = self.attributes.get_named_item(&name) {
            attr.set_value(value);
            return Ok(());
        }
        let attr = Attr::new(name.clone(), None, None, name);
        attr.set_value(value);
        self.attributes.set_named_item(attr)?;
        Ok(())
    }

    /// Set namespaced attribute value, creating the attribute if needed
    ///
    /// An existing attribute keeps its prefix.
    pub fn set_attribute_ns(
        &mut self,
        namespace: Option<&str>,
        qualified_name: &str,
        value: impl Into<String>,
    ) -> DomResult<()> {
        let name = validate_and_extract(namespace, qualified_name)?;
        if let Some(attr) = self
            .attributes
            .get_named_item_ns(name.namespace.as_deref(), &name.local_name)
        {
            attr.set_value(value);
            return Ok(());
        }
        let attr = Attr::new(
            qualified_name.to_string(),
            name.namespace,
            name.prefix,
            name.local_name,
        );
        attr.set_value(value);
        self.attributes.set_named_item_ns(attr)?;
        Ok(())
    }

    pub fn set_attribute_node(&mut self, attr: Attr) -> DomResult<Option<Attr>> {
        self.attributes.set_named_item(attr)
    }

    pub fn set_attribute_node_ns(&mut self, attr: Attr) -> DomResult<Option<Attr>> {
        self.attributes.set_named_item_ns(attr)
    }

    /// Remove attribute by name; absent is not an error
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attr> {
        self.attributes.remove_named_item(name).ok()
    }

    pub fn remove_attribute_ns(&mut self, namespace: Option<&str>, local_name: &str) -> Option<Attr> {
        self.attributes.remove_named_item_ns(namespace, local_name).ok()
    }

    /// Fails with `NotFoundError` unless `attr` is one of ours
    pub fn remove_attribute_node(&mut self, attr: &Attr) -> DomResult<Attr> {
        self.attributes.remove_named_node(attr)
    }

    /// Toggle attribute
    ///
    /// Returns whether the attribute is present afterwards.
    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> DomResult<bool> {
        validate_name(name)?;
        let name = self.normalize_name(name);
        let present = self.has_attribute(&name);
        match (present, force) {
            (false, None | Some(true)) => {
                self.set_attribute(&name, "")?;
                Ok(true)
            }
            (false, Some(false)) => Ok(false),
            (true, None | Some(false)) => {
                self.remove_attribute(&name);
                Ok(false)
            }
            (true, Some(true)) => Ok(true),
        }
    }
}
