//! fOS DOM - Element attributes
//!
//! The attribute side of the DOM: [`Attr`] nodes, the live [`NamedNodeMap`]
//! every [`Element`] owns, and the namespace rules that govern lookup.
//!
//! # Example
//! ```rust
//! use fos_dom::Document;
//!
//! fn main() -> fos_dom::DomResult<()> {
//!     let doc = Document::html();
//!     let mut div = doc.create_element("div")?;
//!     div.set_attribute("ID", "main")?;
//!     assert_eq!(div.get_attribute("id").as_deref(), Some("main"));
//!     Ok(())
//! }
//! ```

mod attr;
mod document;
mod element;
mod exception;
mod named_node_map;
mod names;
pub mod namespace;

use std::sync::atomic::{AtomicU64, Ordering};

pub use attr::Attr;
pub use document::{Document, DocumentKind};
pub use element::{AttributeOwner, Element};
pub use exception::{DomException, DomResult};
pub use named_node_map::{Iter, NamedNodeMap};
pub use namespace::{Namespace, NAMESPACE};

/// Element identifier, unique across every document in the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

impl NodeId {
    /// Fresh id; never handed out twice
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw index value
    #[inline]
    pub fn index(self) -> u64 {
        self.0
    }
}
