//! Attribute node
//!
//! An [`Attr`] is a handle: clones refer to the same node, and equality is
//! node identity. The owning element is written only by [`NamedNodeMap`].
//!
//! [`NamedNodeMap`]: crate::NamedNodeMap

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::NodeId;

#[derive(Debug)]
struct AttrData {
    /// Qualified name as authored
    name: String,
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    value: RefCell<String>,
    owner_element: Cell<Option<NodeId>>,
}

/// Single attribute
#[derive(Clone)]
pub struct Attr(Rc<AttrData>);

impl Attr {
    /// Built by the document factories, detached and with an empty value
    pub(crate) fn new(
        name: String,
        namespace: Option<String>,
        prefix: Option<String>,
        local_name: String,
    ) -> Self {
        Self(Rc::new(AttrData {
            name,
            namespace,
            prefix,
            local_name,
            value: RefCell::new(String::new()),
            owner_element: Cell::new(None),
        }))
    }

    /// Qualified name (`nodeName`)
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn local_name(&self) -> &str {
        &self.0.local_name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.0.prefix.as_deref()
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        self.0.namespace.as_deref()
    }

    pub fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.0.value.borrow_mut() = value.into();
    }

    /// Element currently holding this attribute
    pub fn owner_element(&self) -> Option<NodeId> {
        self.0.owner_element.get()
    }

    pub(crate) fn set_owner_element(&self, owner: Option<NodeId>) {
        self.0.owner_element.set(owner);
    }

    /// Always true
    pub fn specified(&self) -> bool {
        true
    }

    pub fn is_id(&self) -> bool {
        self.0.name == "id"
    }

    /// Same node, not merely equal contents
    #[inline]
    pub fn ptr_eq(&self, other: &Attr) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Null and empty namespaces are the same namespace
    pub(crate) fn in_namespace(&self, namespace: Option<&str>) -> bool {
        let ours = self.namespace_uri().filter(|ns| !ns.is_empty());
        ours == namespace.filter(|ns| !ns.is_empty())
    }
}

impl PartialEq for Attr {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Attr {}

impl fmt::Debug for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attr")
            .field("name", &self.0.name)
            .field("namespace", &self.0.namespace)
            .field("value", &*self.0.value.borrow())
            .field("owner_element", &self.0.owner_element.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str) -> Attr {
        Attr::new(name.to_string(), None, None, name.to_string())
    }

    #[test]
    fn test_identity() {
        let a = attr("href");
        let b = attr("href");
        let a2 = a.clone();

        assert_eq!(a, a2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_value_shared_between_handles() {
        let a = attr("class");
        let a2 = a.clone();
        a.set_value("btn");
        assert_eq!(a2.value(), "btn");
    }

    #[test]
    fn test_defaults() {
        let a = attr("id");
        assert_eq!(a.owner_element(), None);
        assert_eq!(a.namespace_uri(), None);
        assert_eq!(a.prefix(), None);
        assert_eq!(a.value(), "");
        assert!(a.specified());
        assert!(a.is_id());
    }

    #[test]
    fn test_null_and_empty_namespace_equivalent() {
        let none = attr("a");
        let empty = Attr::new("a".into(), Some(String::new()), None, "a".into());
        let x = Attr::new("a".into(), Some("x".into()), None, "a".into());

        for query in [None, Some("")] {
            assert!(none.in_namespace(query));
            assert!(empty.in_namespace(query));
            assert!(!x.in_namespace(query));
        }
        assert!(x.in_namespace(Some("x")));
        assert!(!x.in_namespace(Some("X")));
    }
}
