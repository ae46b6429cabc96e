//! Named node map (attribute collection)
//!
//! Ordered, live collection of [`Attr`] nodes belonging to one element.
//! Lookup is a linear scan in insertion order; there is no name index, so
//! duplicate names resolve to the lowest index.

use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::{Attr, AttributeOwner, DomException, DomResult, NodeId};

/// Named node map (attribute collection)
#[derive(Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    owner: Option<Rc<dyn AttributeOwner>>,
}

impl NamedNodeMap {
    /// Map belonging to `owner`
    pub fn new(owner: Rc<dyn AttributeOwner>) -> Self {
        Self {
            attributes: Vec::new(),
            owner: Some(owner),
        }
    }

    /// Map with no owning element; always compares names as XML
    pub fn detached() -> Self {
        Self::default()
    }

    /// Id of the owning element
    pub fn owner_id(&self) -> Option<NodeId> {
        self.owner.as_ref().map(|owner| owner.node_id())
    }

    /// Asked on every call, never cached
    fn is_html(&self) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|owner| owner.is_in_html_document_and_namespace())
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index; `None` at or past `length()`
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Index of this exact node
    pub fn position_of(&self, attr: &Attr) -> Option<usize> {
        self.attributes.iter().position(|a| a.ptr_eq(attr))
    }

    fn find_by_name(&self, name: &str) -> Option<usize> {
        if self.is_html() {
            let lower = name.to_ascii_lowercase();
            self.attributes.iter().position(|a| a.name() == lower)
        } else {
            self.attributes.iter().position(|a| a.name() == name)
        }
    }

    fn find_by_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|a| a.local_name() == local_name && a.in_namespace(namespace))
    }

    /// Get attribute by qualified name
    ///
    /// The query is lower-cased when the owner is an HTML element in an
    /// HTML document.
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.find_by_name(name).map(|i| &self.attributes[i])
    }

    /// Get attribute by namespace and local name, case-sensitive
    pub fn get_named_item_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&Attr> {
        self.find_by_ns(namespace, local_name)
            .map(|i| &self.attributes[i])
    }

    /// Set attribute, matching a prior occupant by qualified name
    ///
    /// Returns the replaced attribute, `None` when appended, or `attr`
    /// itself when it is already in this map.
    pub fn set_named_item(&mut self, attr: Attr) -> DomResult<Option<Attr>> {
        self.check_in_use(&attr)?;
        if self.position_of(&attr).is_some() {
            return Ok(Some(attr));
        }
        let existing = self.find_by_name(attr.name());
        Ok(self.place(attr, existing))
    }

    /// Set attribute, matching a prior occupant by namespace and local name
    ///
    /// An entry with the same qualified name but another namespace is never
    /// replaced.
    pub fn set_named_item_ns(&mut self, attr: Attr) -> DomResult<Option<Attr>> {
        self.check_in_use(&attr)?;
        if self.position_of(&attr).is_some() {
            return Ok(Some(attr));
        }
        let existing = self.find_by_ns(attr.namespace_uri(), attr.local_name());
        Ok(self.place(attr, existing))
    }

    fn check_in_use(&self, attr: &Attr) -> DomResult<()> {
        match attr.owner_element() {
            Some(owner) if Some(owner) != self.owner_id() => {
                tracing::debug!(
                    "Attribute {} is in use by element {:?}",
                    attr.name(),
                    owner
                );
                Err(DomException::InUseAttribute)
            }
            _ => Ok(()),
        }
    }

    fn place(&mut self, attr: Attr, existing: Option<usize>) -> Option<Attr> {
        let owner = self.owner_id();
        attr.set_owner_element(owner);
        match existing {
            Some(index) => {
                tracing::trace!("Replacing attribute {} at {}", attr.name(), index);
                let old = std::mem::replace(&mut self.attributes[index], attr);
                old.set_owner_element(None);
                Some(old)
            }
            None => {
                tracing::trace!(
                    "Appending attribute {} at {}",
                    attr.name(),
                    self.attributes.len()
                );
                self.attributes.push(attr);
                None
            }
        }
    }

    /// Remove attribute by qualified name
    pub fn remove_named_item(&mut self, name: &str) -> DomResult<Attr> {
        match self.find_by_name(name) {
            Some(index) => Ok(self.remove_at(index)),
            None => Err(DomException::NotFound(name.to_string())),
        }
    }

    /// Remove attribute by namespace and local name
    pub fn remove_named_item_ns(
        &mut self,
        namespace: Option<&str>,
        local_name: &str,
    ) -> DomResult<Attr> {
        match self.find_by_ns(namespace, local_name) {
            Some(index) => Ok(self.remove_at(index)),
            None => Err(DomException::not_found_ns(namespace, local_name)),
        }
    }

    /// Remove this exact node
    pub fn remove_named_node(&mut self, attr: &Attr) -> DomResult<Attr> {
        match self.position_of(attr) {
            Some(index) => Ok(self.remove_at(index)),
            None => Err(DomException::NotFound(attr.name().to_string())),
        }
    }

    // Shifts later entries down; order is preserved.
    fn remove_at(&mut self, index: usize) -> Attr {
        let attr = self.attributes.remove(index);
        attr.set_owner_element(None);
        tracing::trace!("Removed attribute {} from {}", attr.name(), index);
        attr
    }

    /// Iterate over attributes, starting at index 0 every time
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            map: self,
            index: 0,
        }
    }
}

impl fmt::Debug for NamedNodeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedNodeMap")
            .field("owner", &self.owner_id())
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl<'a> IntoIterator for &'a NamedNodeMap {
    type Item = &'a Attr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Attribute iterator; reads the map by index on each step
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    map: &'a NamedNodeMap,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Attr;

    fn next(&mut self) -> Option<Self::Item> {
        let attr = self.map.item(self.index)?;
        self.index += 1;
        Some(attr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.length().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
