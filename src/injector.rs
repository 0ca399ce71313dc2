//! Putting the styles and links of a custom menu into a live page head.
use crate::head::{parse_head_elements, HeadElement};
use crate::html::ToHtml;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use tracing::debug;

/// The attribute that marks injected elements with the menu they
/// belong to.
pub const MENU_MARKER: &str = "data-menu-custom";

/// A document head that elements can be appended to and removed from.
///
/// The head is shared with whatever else lives on the page, so
/// removal is by node handle, never by query.
pub trait DocumentHead {
    /// Handle to an appended element.
    type Node;

    fn append(&self, element: &HeadElement) -> Self::Node;
    fn remove(&self, node: &Self::Node);
}

/// Clone the style and link elements of `head_content` into `head`.
///
/// Each clone is tagged with [`MENU_MARKER`] set to `menu_id`.
/// The clones stay in the head until the returned guard is dropped.
pub fn inject<'h, H: DocumentHead>(
    head: &'h H,
    menu_id: &str,
    head_content: &str,
) -> Injection<'h, H> {
    let nodes = parse_head_elements(head_content)
        .into_iter()
        .map(|mut element| {
            element.attributes.retain(|(name, _)| name != MENU_MARKER);
            element.set_attribute(MENU_MARKER, menu_id);
            head.append(&element)
        })
        .collect::<Vec<_>>();
    debug!(menu_id, count = nodes.len(), "Injected head elements");
    Injection {
        head,
        menu_id: menu_id.to_owned(),
        nodes,
    }
}

/// The elements injected for one menu.
///
/// Dropping this removes exactly those elements from the head.
#[must_use = "the injected elements are removed when this is dropped"]
pub struct Injection<'h, H: DocumentHead> {
    head: &'h H,
    menu_id: String,
    nodes: Vec<H::Node>,
}

impl<'h, H: DocumentHead> Injection<'h, H> {
    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    /// The number of injected elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'h, H: DocumentHead> Drop for Injection<'h, H> {
    fn drop(&mut self) {
        for node in self.nodes.drain(..) {
            self.head.remove(&node);
        }
        debug!(menu_id = %self.menu_id, "Removed injected head elements");
    }
}

/// Keeps the head in step with the custom menu currently shown.
pub struct HeadInjector<'h, H: DocumentHead> {
    head: &'h H,
    current: Option<Current<'h, H>>,
}

struct Current<'h, H: DocumentHead> {
    slug: String,
    injection: Injection<'h, H>,
}

impl<'h, H: DocumentHead> HeadInjector<'h, H> {
    pub fn new(head: &'h H) -> Self {
        HeadInjector {
            head,
            current: None,
        }
    }

    /// Make the head hold the elements of `head_content` for `menu_id`.
    ///
    /// Nothing changes when the same menu is synced again with the same
    /// content.
    /// Otherwise the elements of the previous menu are removed before
    /// the new ones are added.
    /// Returns true if the head was changed.
    pub fn sync(&mut self, menu_id: &str, head_content: &str) -> bool {
        let slug = checksum_slug(head_content.as_bytes());
        if let Some(current) = &self.current {
            if current.injection.menu_id() == menu_id && current.slug == slug
            {
                return false;
            }
        }
        let had_elements = self.clear();
        if head_content.trim().is_empty() {
            return had_elements;
        }
        let injection = inject(self.head, menu_id, head_content);
        self.current = Some(Current { slug, injection });
        true
    }

    /// Remove all injected elements.
    ///
    /// Returns true if there was anything to remove.
    pub fn clear(&mut self) -> bool {
        self.current
            .take()
            .map_or(false, |current| !current.injection.is_empty())
    }

    /// The menu whose elements are currently injected.
    pub fn current_menu(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.injection.menu_id())
    }
}

/// A short and url-safe checksum string from string data.
pub fn checksum_slug(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(&md5::compute(data)[..6])
}

/// A document head kept in memory.
///
/// This is what a server side render or a test injects into.
#[derive(Default)]
pub struct MemoryHead {
    elements: RefCell<Vec<(NodeId, HeadElement)>>,
    next_id: Cell<usize>,
}

/// Handle to an element in a [`MemoryHead`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all elements, in order.
    pub fn elements(&self) -> Vec<HeadElement> {
        self.elements
            .borrow()
            .iter()
            .map(|(_, e)| e.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// The elements injected for `menu_id`.
    pub fn tagged(&self, menu_id: &str) -> Vec<HeadElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|(_, e)| e.attribute(MENU_MARKER) == Some(menu_id))
            .map(|(_, e)| e.clone())
            .collect()
    }
}

impl DocumentHead for MemoryHead {
    type Node = NodeId;

    fn append(&self, element: &HeadElement) -> NodeId {
        let id = NodeId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.elements.borrow_mut().push((id, element.clone()));
        id
    }

    fn remove(&self, node: &NodeId) {
        self.elements.borrow_mut().retain(|(id, _)| id != node);
    }
}

impl ToHtml for MemoryHead {
    fn to_html(&self, out: &mut dyn Write) -> io::Result<()> {
        for (_, element) in self.elements.borrow().iter() {
            element.to_html(out)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}
