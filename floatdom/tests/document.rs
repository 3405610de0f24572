use floatdom::{Document, DomError, FloatingStyle, Rect, Size, Strategy};

fn doc() -> Document {
    Document::new(800.0, 600.0)
}

// ============================================================================
// Tree
// ============================================================================

#[test]
fn test_new_document_has_body_viewport() {
    let doc = doc();
    assert_eq!(doc.viewport(), Rect::new(0.0, 0.0, 800.0, 600.0));
    assert_eq!(doc.node_count(), 1);
    assert_eq!(doc.tag(doc.body()), Some("body"));
    assert!(doc.is_connected(doc.body()));
}

#[test]
fn test_created_element_is_detached_until_appended() {
    let mut doc = doc();
    let button = doc.create_element("button");
    assert!(doc.exists(button));
    assert!(!doc.is_connected(button));

    doc.append_child(doc.body(), button).unwrap();
    assert!(doc.is_connected(button));
    assert_eq!(doc.parent(button), Some(doc.body()));
    assert_eq!(doc.children(doc.body()), &[button]);
}

#[test]
fn test_append_moves_node_between_parents() {
    let mut doc = doc();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    let item = doc.create_element("li");
    doc.append_child(doc.body(), a).unwrap();
    doc.append_child(doc.body(), b).unwrap();
    doc.append_child(a, item).unwrap();

    doc.append_child(b, item).unwrap();
    assert!(doc.children(a).is_empty());
    assert_eq!(doc.children(b), &[item]);
}

#[test]
fn test_append_rejects_cycles() {
    let mut doc = doc();
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    doc.append_child(outer, inner).unwrap();

    assert_eq!(
        doc.append_child(inner, outer),
        Err(DomError::HierarchyCycle {
            parent: inner,
            child: outer
        })
    );
    assert!(matches!(
        doc.append_child(outer, outer),
        Err(DomError::HierarchyCycle { .. })
    ));
}

#[test]
fn test_remove_disconnects_but_keeps_nodes() {
    let mut doc = doc();
    let list = doc.create_element("ul");
    let item = doc.create_element("li");
    doc.append_child(doc.body(), list).unwrap();
    doc.append_child(list, item).unwrap();
    doc.set_rect(item, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

    doc.remove(list).unwrap();
    assert!(doc.exists(item));
    assert!(!doc.is_connected(item));
    assert_eq!(doc.bounding_rect(item), None);
    assert_eq!(doc.node_count(), 3);
}

#[test]
fn test_destroy_drops_whole_subtree() {
    let mut doc = doc();
    let root = doc.create_element("div");
    let child = doc.create_element("span");
    let grandchild = doc.create_element("b");
    doc.append_child(doc.body(), root).unwrap();
    doc.append_child(root, child).unwrap();
    doc.append_child(child, grandchild).unwrap();

    assert_eq!(doc.destroy(root), Ok(3));
    assert_eq!(doc.node_count(), 1);
    assert!(doc.children(doc.body()).is_empty());
    assert!(!doc.exists(grandchild));

    // Stale handles fail softly
    assert_eq!(doc.destroy(root), Err(DomError::NodeNotFound(root)));
    assert!(!doc.contains(doc.body(), child));
    assert_eq!(doc.bounding_rect(child), None);
}

#[test]
fn test_body_cannot_be_removed_or_destroyed() {
    let mut doc = doc();
    let body = doc.body();
    doc.remove(body).unwrap();
    assert_eq!(doc.destroy(body), Ok(0));
    assert!(doc.is_connected(body));
}

#[test]
fn test_contains_is_inclusive() {
    let mut doc = doc();
    let menu = doc.create_element("menu");
    let option = doc.create_element("option");
    doc.append_child(doc.body(), menu).unwrap();
    doc.append_child(menu, option).unwrap();

    assert!(doc.contains(menu, menu));
    assert!(doc.contains(menu, option));
    assert!(!doc.contains(option, menu));
}

#[test]
fn test_descendants_depth_first() {
    let mut doc = doc();
    let a = doc.create_element("a");
    let b = doc.create_element("b");
    let c = doc.create_element("c");
    let d = doc.create_element("d");
    doc.append_child(a, b).unwrap();
    doc.append_child(b, c).unwrap();
    doc.append_child(a, d).unwrap();

    assert_eq!(doc.descendants(a), vec![b, c, d]);
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn test_query_body_and_ids() {
    let mut doc = doc();
    let portal = doc.create_element("div");
    doc.set_element_id(portal, "portal-root").unwrap();

    assert_eq!(doc.query("body"), Ok(Some(doc.body())));
    // Not connected yet
    assert_eq!(doc.query("#portal-root"), Ok(None));

    doc.append_child(doc.body(), portal).unwrap();
    assert_eq!(doc.query("#portal-root"), Ok(Some(portal)));
    assert_eq!(doc.element_id(portal), Some("portal-root"));
}

#[test]
fn test_query_rejects_unsupported_selectors() {
    let doc = doc();
    assert_eq!(
        doc.query(".class"),
        Err(DomError::InvalidSelector(".class".to_string()))
    );
    assert!(doc.query("#").is_err());
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_bounding_rect_requires_measurement() {
    let mut doc = doc();
    let anchor = doc.create_element("button");
    doc.append_child(doc.body(), anchor).unwrap();
    assert_eq!(doc.bounding_rect(anchor), None);

    doc.set_rect(anchor, Rect::new(100.0, 500.0, 200.0, 40.0)).unwrap();
    assert_eq!(
        doc.bounding_rect(anchor),
        Some(Rect::new(100.0, 500.0, 200.0, 40.0))
    );
}

#[test]
fn test_content_size_stacks_children() {
    let mut doc = doc();
    let panel = doc.create_element("div");
    let first = doc.create_element("div");
    let second = doc.create_element("div");
    doc.append_child(panel, first).unwrap();
    doc.append_child(panel, second).unwrap();
    doc.set_intrinsic_size(first, Size::new(120.0, 30.0)).unwrap();
    doc.set_intrinsic_size(second, Size::new(200.0, 50.0)).unwrap();

    assert_eq!(doc.content_size(panel), Size::new(200.0, 80.0));

    // An explicit intrinsic size wins over children
    doc.set_intrinsic_size(panel, Size::new(10.0, 10.0)).unwrap();
    assert_eq!(doc.content_size(panel), Size::new(10.0, 10.0));
}

#[test]
fn test_content_size_ignores_floating_children() {
    let mut doc = doc();
    let menu = doc.create_element("div");
    let item = doc.create_element("div");
    let submenu = doc.create_element("div");
    doc.append_child(menu, item).unwrap();
    doc.append_child(menu, submenu).unwrap();
    doc.set_intrinsic_size(item, Size::new(100.0, 20.0)).unwrap();
    doc.set_intrinsic_size(submenu, Size::new(300.0, 200.0)).unwrap();
    assert_eq!(doc.content_size(menu), Size::new(300.0, 220.0));

    doc.set_floating_style(submenu, FloatingStyle::default()).unwrap();
    assert_eq!(doc.content_size(menu), Size::new(100.0, 20.0));
}

#[test]
fn test_floating_style_absolute_places_box_in_parent_space() {
    let mut doc = doc();
    let container = doc.create_element("div");
    let floating = doc.create_element("div");
    doc.append_child(doc.body(), container).unwrap();
    doc.append_child(container, floating).unwrap();
    doc.set_rect(container, Rect::new(50.0, 60.0, 300.0, 300.0)).unwrap();
    doc.set_intrinsic_size(floating, Size::new(100.0, 40.0)).unwrap();

    doc.set_floating_style(floating, FloatingStyle::new(Strategy::Absolute, 10.0, 20.0))
        .unwrap();

    assert_eq!(
        doc.bounding_rect(floating),
        Some(Rect::new(60.0, 80.0, 100.0, 40.0))
    );
    assert_eq!(
        doc.floating_style(floating),
        Some(FloatingStyle::new(Strategy::Absolute, 10.0, 20.0))
    );
}

#[test]
fn test_floating_style_fixed_and_explicit_width() {
    let mut doc = doc();
    let floating = doc.create_element("div");
    doc.append_child(doc.body(), floating).unwrap();
    doc.set_intrinsic_size(floating, Size::new(400.0, 100.0)).unwrap();

    let style = FloatingStyle::new(Strategy::Fixed, 30.0, 40.0).width(240.0);
    doc.set_floating_style(floating, style).unwrap();

    assert_eq!(
        doc.bounding_rect(floating),
        Some(Rect::new(30.0, 40.0, 240.0, 100.0))
    );
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_scroll_moves_descendants_and_clamps() {
    let mut doc = doc();
    let list = doc.create_element("div");
    let row = doc.create_element("div");
    doc.append_child(doc.body(), list).unwrap();
    doc.append_child(list, row).unwrap();
    doc.set_rect(list, Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
    doc.set_rect(row, Rect::new(0.0, 150.0, 200.0, 20.0)).unwrap();

    // Not a scroll container yet
    assert!(!doc.scroll_by(list, 0.0, 50.0));

    doc.set_scrollable(list, true).unwrap();
    assert!(doc.scroll_by(list, 0.0, 50.0));
    assert_eq!(doc.scroll_offset(list), (0.0, 50.0));
    assert_eq!(doc.bounding_rect(row), Some(Rect::new(0.0, 100.0, 200.0, 20.0)));
    // The container itself does not move
    assert_eq!(doc.bounding_rect(list), Some(Rect::new(0.0, 0.0, 200.0, 200.0)));

    // Scrolling past the top clamps to zero and moves by the applied delta
    assert!(doc.scroll_by(list, 0.0, -80.0));
    assert_eq!(doc.scroll_offset(list), (0.0, 0.0));
    assert_eq!(doc.bounding_rect(row), Some(Rect::new(0.0, 150.0, 200.0, 20.0)));
    assert!(!doc.scroll_by(list, 0.0, -10.0));
}

#[test]
fn test_scrollable_ancestors_nearest_first() {
    let mut doc = doc();
    let outer = doc.create_element("div");
    let plain = doc.create_element("div");
    let inner = doc.create_element("div");
    let anchor = doc.create_element("button");
    doc.append_child(doc.body(), outer).unwrap();
    doc.append_child(outer, plain).unwrap();
    doc.append_child(plain, inner).unwrap();
    doc.append_child(inner, anchor).unwrap();
    doc.set_scrollable(outer, true).unwrap();
    doc.set_scrollable(inner, true).unwrap();

    assert_eq!(doc.scrollable_ancestors(anchor), vec![inner, outer]);
    assert!(doc.scrollable_ancestors(outer).is_empty());
}

#[test]
fn test_containing_origin_follows_parent_scroll() {
    let mut doc = doc();
    let floating = doc.create_element("div");
    doc.append_child(doc.body(), floating).unwrap();
    doc.set_scrollable(doc.body(), true).unwrap();
    doc.scroll_by(doc.body(), 0.0, 120.0);

    assert_eq!(doc.containing_origin(floating), (0.0, -120.0));
    assert_eq!(doc.containing_origin(doc.body()), (0.0, 0.0));
}
