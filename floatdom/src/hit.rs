use crate::element::{Document, NodeId};

impl Document {
    /// Find the deepest connected node at the given viewport coordinates.
    /// Unmeasured nodes (and their subtrees) are never hit.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        self.hit_test_node(self.body, x, y)
    }

    fn hit_test_node(&self, node: NodeId, x: f64, y: f64) -> Option<NodeId> {
        let rect = self.nodes.get(&node)?.rect?;

        // Check children in reverse order (last appended = on top).
        // Children may overflow their parent, so they are tested first.
        for child in self.children(node).iter().rev() {
            if let Some(id) = self.hit_test_node(*child, x, y) {
                return Some(id);
            }
        }

        if rect.contains(x, y) {
            Some(node)
        } else {
            None
        }
    }
}
