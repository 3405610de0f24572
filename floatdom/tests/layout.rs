use floatdom::{Rect, Size};

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_rect_edges() {
    let rect = Rect::new(100.0, 500.0, 200.0, 40.0);
    assert_eq!(rect.left(), 100.0);
    assert_eq!(rect.right(), 300.0);
    assert_eq!(rect.top(), 500.0);
    assert_eq!(rect.bottom(), 540.0);
    assert_eq!(rect.center(), (200.0, 520.0));
}

#[test]
fn test_rect_negative_dimensions_clamped() {
    let rect = Rect::new(10.0, 10.0, -5.0, -1.0);
    assert_eq!(rect.width, 0.0);
    assert_eq!(rect.height, 0.0);
    assert!(rect.is_empty());

    let size = Size::new(-3.0, 4.0);
    assert_eq!(size, Size::new(0.0, 4.0));
}

#[test]
fn test_rect_contains_excludes_far_edges() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains(0.0, 0.0));
    assert!(rect.contains(9.5, 9.5));
    assert!(!rect.contains(10.0, 5.0));
    assert!(!rect.contains(5.0, 10.0));
    assert!(!rect.contains(-0.1, 5.0));
}

#[test]
fn test_rect_translate_keeps_size() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0).translate(-5.0, 15.0);
    assert_eq!(rect, Rect::new(5.0, 35.0, 30.0, 40.0));
}

#[test]
fn test_rect_with_size() {
    let rect = Rect::new(1.0, 2.0, 3.0, 4.0).with_size(Size::new(10.0, 20.0));
    assert_eq!(rect, Rect::new(1.0, 2.0, 10.0, 20.0));
    assert_eq!(rect.size(), Size::new(10.0, 20.0));
}

#[test]
fn test_size_with_width() {
    assert_eq!(Size::new(400.0, 300.0).with_width(240.0), Size::new(240.0, 300.0));
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use floatdom::{Rect, Size};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_dimensions_never_negative(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            w in -500.0f64..500.0,
            h in -500.0f64..500.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            prop_assert!(rect.width >= 0.0 && rect.height >= 0.0);
            let size = Size::new(w, h);
            prop_assert!(size.width >= 0.0 && size.height >= 0.0);
        }

        #[test]
        fn prop_translate_keeps_size(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            w in 0.0f64..500.0,
            h in 0.0f64..500.0,
            dx in -100.0f64..100.0,
            dy in -100.0f64..100.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            prop_assert_eq!(rect.translate(dx, dy).size(), rect.size());
        }

        #[test]
        fn prop_contains_origin_not_far_corner(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            w in 1.0f64..500.0,
            h in 1.0f64..500.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            prop_assert!(rect.contains(x, y));
            prop_assert!(!rect.contains(rect.right(), rect.bottom()));
        }
    }
}
