//! Headless document: an arena of nodes rooted at `body`.
//!
//! The document owns layout results supplied by the host (`set_rect`,
//! `set_intrinsic_size`), scroll state, and listener registrations. Host
//! mutations enqueue [`Notification`]s which consumers drain with
//! [`Document::take_notifications`].

mod node;

use std::collections::HashMap;

use log::{debug, trace};

pub use node::NodeId;
use node::Node;

use crate::error::DomError;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::layout::{Rect, Size};
use crate::listener::{Listener, ListenerId, ListenerRegistry, Notification};
use crate::types::{FloatingStyle, Strategy};

#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: HashMap<NodeId, Node>,
    pub(crate) body: NodeId,
    next_id: u64,
    listeners: ListenerRegistry,
    queue: Vec<Notification>,
}

impl Document {
    /// Create a document whose `body` fills a `width` x `height` viewport.
    pub fn new(width: f64, height: f64) -> Self {
        let body = NodeId(0);
        let mut root = Node::new("body");
        root.rect = Some(Rect::from_size(width, height));

        let mut nodes = HashMap::new();
        nodes.insert(body, root);

        Self {
            nodes,
            body,
            next_id: 1,
            listeners: ListenerRegistry::default(),
            queue: Vec::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn viewport(&self) -> Rect {
        self.nodes
            .get(&self.body)
            .and_then(|body| body.rect)
            .unwrap_or_default()
    }

    /// Number of live nodes, connected or not, including `body`.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn exists(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    // ------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------

    /// Create a detached node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(tag));
        id
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.tag.as_str())
    }

    pub fn set_element_id(&mut self, node: NodeId, id: impl Into<String>) -> Result<(), DomError> {
        self.node_mut(node)?.element_id = Some(id.into());
        Ok(())
    }

    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node)?.element_id.as_deref()
    }

    /// Append `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.exists(parent) {
            return Err(DomError::NodeNotFound(parent));
        }
        if !self.exists(child) {
            return Err(DomError::NodeNotFound(child));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyCycle { parent, child });
        }

        self.detach(child);
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `node` (and its subtree) from its parent. The nodes stay alive
    /// but are no longer connected. Removing `body` is a no-op.
    ///
    /// Measured nodes in a connected subtree lose their box, so each of them
    /// gets a resize notification.
    pub fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        if !self.exists(node) {
            return Err(DomError::NodeNotFound(node));
        }
        if node != self.body {
            let collapsed = self.measured_subtree(node);
            self.detach(node);
            self.notify_collapsed(collapsed);
        }
        Ok(())
    }

    /// Detach `node` and drop its whole subtree from the arena.
    /// Returns the number of nodes dropped. Destroying `body` is a no-op.
    pub fn destroy(&mut self, node: NodeId) -> Result<usize, DomError> {
        if !self.exists(node) {
            return Err(DomError::NodeNotFound(node));
        }
        if node == self.body {
            return Ok(0);
        }

        let collapsed = self.measured_subtree(node);
        self.detach(node);
        let mut doomed = self.descendants(node);
        doomed.push(node);
        for id in &doomed {
            self.nodes.remove(id);
        }
        debug!("destroyed {} ({} nodes)", node, doomed.len());
        self.notify_collapsed(collapsed);
        Ok(doomed.len())
    }

    /// `node` and its descendants that currently have a box on screen.
    fn measured_subtree(&self, node: NodeId) -> Vec<NodeId> {
        if !self.is_connected(node) {
            return Vec::new();
        }
        let mut subtree = vec![node];
        subtree.extend(self.descendants(node));
        subtree.retain(|id| self.nodes.get(id).is_some_and(|n| n.rect.is_some()));
        subtree
    }

    fn notify_collapsed(&mut self, nodes: Vec<NodeId>) {
        for id in nodes {
            self.enqueue(Listener::Resize(id), Event::Resize { target: id });
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(&node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.retain(|c| *c != node);
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.parent = None;
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// All nodes below `node`, depth first, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Inclusive descendant test: true when `node` is `ancestor` or lies
    /// below it. Missing nodes are never contained.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.exists(ancestor) || !self.exists(node) {
            return false;
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Whether `node` is alive and attached under `body`.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.body, node)
    }

    /// Resolve a selector. Supports `body` and `#id`; ids are matched
    /// against connected nodes in tree order.
    pub fn query(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = selector.trim();
        if selector == "body" {
            return Ok(Some(self.body));
        }

        let Some(id) = selector.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return Err(DomError::InvalidSelector(selector.to_string()));
        };
        Ok(self.find_by_id(self.body, id))
    }

    fn find_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        if self.element_id(root) == Some(id) {
            return Some(root);
        }
        self.children(root)
            .iter()
            .find_map(|child| self.find_by_id(*child, id))
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Record the host's layout box for `node`. Observers are notified when
    /// the box size changes (including the first measurement).
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) -> Result<(), DomError> {
        let n = self.node_mut(node)?;
        let before = n.rect.map(|r| r.size());
        n.rect = Some(rect);

        if before != Some(rect.size()) {
            self.enqueue(Listener::Resize(node), Event::Resize { target: node });
        }
        Ok(())
    }

    /// Bounding box in viewport coordinates. `None` until measured, and for
    /// nodes that are not connected to the document.
    pub fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        if !self.is_connected(node) {
            return None;
        }
        self.nodes.get(&node)?.rect
    }

    /// Set the content-driven size of `node`. The change bubbles: every
    /// ancestor whose content size changes as a result is notified too.
    pub fn set_intrinsic_size(&mut self, node: NodeId, size: Size) -> Result<(), DomError> {
        if !self.exists(node) {
            return Err(DomError::NodeNotFound(node));
        }

        let mut chain = vec![node];
        let mut current = self.parent(node);
        while let Some(id) = current {
            chain.push(id);
            current = self.parent(id);
        }

        let before: Vec<Size> = chain.iter().map(|id| self.content_size(*id)).collect();
        self.node_mut(node)?.intrinsic = Some(size);

        for (id, old) in chain.into_iter().zip(before) {
            if self.content_size(id) != old {
                self.enqueue(Listener::Resize(id), Event::Resize { target: id });
            }
        }
        Ok(())
    }

    /// Content size of `node`: its intrinsic size if set, otherwise its
    /// in-flow children stacked in a column (widest child, summed heights).
    /// Children carrying a floating style are out of flow and ignored.
    pub fn content_size(&self, node: NodeId) -> Size {
        let Some(n) = self.nodes.get(&node) else {
            return Size::default();
        };
        if let Some(size) = n.intrinsic {
            return size;
        }
        n.children
            .iter()
            .filter(|child| self.floating_style(**child).is_none())
            .fold(Size::default(), |acc, child| {
                let child = self.content_size(*child);
                Size::new(acc.width.max(child.width), acc.height + child.height)
            })
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn set_scrollable(&mut self, node: NodeId, scrollable: bool) -> Result<(), DomError> {
        self.node_mut(node)?.scrollable = scrollable;
        Ok(())
    }

    pub fn is_scrollable(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.scrollable)
    }

    pub fn scroll_offset(&self, node: NodeId) -> (f64, f64) {
        self.nodes
            .get(&node)
            .map(|n| n.scroll_offset)
            .unwrap_or_default()
    }

    /// Scroll a scroll container by a delta, clamping offsets at zero.
    /// Descendant boxes move by the applied delta.
    /// Returns true if the scroll offset changed.
    pub fn scroll_by(&mut self, node: NodeId, dx: f64, dy: f64) -> bool {
        let Some(n) = self.nodes.get_mut(&node) else {
            return false;
        };
        if !n.scrollable {
            return false;
        }

        let (old_x, old_y) = n.scroll_offset;
        let new_x = (old_x + dx).max(0.0);
        let new_y = (old_y + dy).max(0.0);
        let (applied_x, applied_y) = (new_x - old_x, new_y - old_y);
        if applied_x == 0.0 && applied_y == 0.0 {
            return false;
        }
        n.scroll_offset = (new_x, new_y);

        for id in self.descendants(node) {
            if let Some(child) = self.nodes.get_mut(&id) {
                child.rect = child.rect.map(|r| r.translate(-applied_x, -applied_y));
            }
        }

        trace!("scrolled {} by ({}, {})", node, applied_x, applied_y);
        self.enqueue(Listener::Scroll(node), Event::Scroll { target: node });
        true
    }

    /// Scrollable nodes above `node`, nearest first.
    pub fn scrollable_ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(id) = current {
            if self.is_scrollable(id) {
                out.push(id);
            }
            current = self.parent(id);
        }
        out
    }

    /// Resize the viewport (the `body` box).
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        let viewport = Rect::from_size(width, height);
        let body = self.body;
        let Some(n) = self.nodes.get_mut(&body) else {
            return;
        };
        if n.rect == Some(viewport) {
            return;
        }
        n.rect = Some(viewport);
        self.enqueue(
            Listener::WindowResize,
            Event::WindowResize {
                width: viewport.width,
                height: viewport.height,
            },
        );
    }

    // ------------------------------------------------------------------
    // Floating style
    // ------------------------------------------------------------------

    /// Origin of the coordinate space `absolute` styles on `node` resolve
    /// against: the parent's box origin shifted by the parent's scroll.
    pub fn containing_origin(&self, node: NodeId) -> (f64, f64) {
        let Some(parent) = self.parent(node) else {
            return (0.0, 0.0);
        };
        let origin = self
            .nodes
            .get(&parent)
            .and_then(|p| p.rect)
            .map(|r| (r.x, r.y))
            .unwrap_or_default();
        let (scroll_x, scroll_y) = self.scroll_offset(parent);
        (origin.0 - scroll_x, origin.1 - scroll_y)
    }

    /// Apply an inline position style. The node's box follows the style so
    /// hit testing sees it; no resize notification is emitted.
    pub fn set_floating_style(&mut self, node: NodeId, style: FloatingStyle) -> Result<(), DomError> {
        let content = self.content_size(node);
        let (origin_x, origin_y) = match style.strategy {
            Strategy::Absolute => self.containing_origin(node),
            Strategy::Fixed => (0.0, 0.0),
        };
        let width = style.width.unwrap_or(content.width);

        let n = self.node_mut(node)?;
        n.floating_style = Some(style);
        n.rect = Some(Rect::new(
            style.left + origin_x,
            style.top + origin_y,
            width,
            content.height,
        ));
        Ok(())
    }

    pub fn floating_style(&self, node: NodeId) -> Option<FloatingStyle> {
        self.nodes.get(&node)?.floating_style
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Press a pointer button at viewport coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: MouseButton) {
        let target = self.hit_test(x, y);
        self.enqueue(
            Listener::PointerDown,
            Event::PointerDown {
                target,
                x,
                y,
                button,
            },
        );
    }

    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) {
        self.enqueue(Listener::KeyDown, Event::KeyDown { key, modifiers });
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    pub fn listen(&mut self, listener: Listener) -> ListenerId {
        let id = self.listeners.add(listener);
        trace!("{} registered for {:?}", id, listener);
        id
    }

    /// Returns false if the registration did not exist.
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        if removed {
            trace!("{} removed", id);
        }
        removed
    }

    pub fn listener(&self, id: ListenerId) -> Option<Listener> {
        self.listeners.get(id)
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Drain queued notifications in delivery order.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }

    pub fn pending_notifications(&self) -> usize {
        self.queue.len()
    }

    fn enqueue(&mut self, listener: Listener, event: Event) {
        let targets: Vec<ListenerId> = self.listeners.matching(listener).collect();
        for id in targets {
            self.queue.push(Notification {
                listener: id,
                event: event.clone(),
            });
        }
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(&node).ok_or(DomError::NodeNotFound(node))
    }
}
