use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;

use floater::prelude::*;
use floatdom::{Key, Modifiers, MouseButton};
use simplelog::{Config, LevelFilter, WriteLogger};

const OPTIONS: [&str; 4] = ["Apple", "Banana", "Cherry", "Durian"];

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("dropdown.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();

    let button = doc.create_element("button");
    doc.append_child(body, button).expect("body exists");
    doc.set_rect(button, Rect::new(100.0, 500.0, 200.0, 40.0))
        .expect("button exists");

    let sibling = doc.create_element("p");
    doc.append_child(body, sibling).expect("body exists");
    doc.set_rect(sibling, Rect::new(400.0, 20.0, 300.0, 40.0))
        .expect("sibling exists");

    let open = Rc::new(Cell::new(true));
    let mut overlay = Overlay::new();

    let props = |open: &Rc<Cell<bool>>| {
        let state = Rc::clone(open);
        OverlayProps::new(Some(button), open.get())
            .match_width(true)
            .on_open_change(move |value| state.set(value))
            .content(|doc, root| {
                for label in OPTIONS {
                    let item = doc.create_element("li");
                    doc.set_element_id(item, label.to_lowercase())?;
                    doc.append_child(root, item)?;
                    doc.set_intrinsic_size(item, Size::new(160.0, 24.0))?;
                }
                Ok(())
            })
    };

    overlay.render(&mut doc, props(&open));
    report("opened", &overlay, &doc);

    // The list grows: the floating root resizes and the overlay follows.
    if let Ok(Some(durian)) = doc.query("#durian") {
        doc.set_intrinsic_size(durian, Size::new(160.0, 200.0))
            .expect("item exists");
    }
    pump(&mut doc, &mut overlay);
    report("content grew", &overlay, &doc);

    doc.resize_viewport(800.0, 900.0);
    pump(&mut doc, &mut overlay);
    report("window resized", &overlay, &doc);

    doc.key_down(Key::Char('j'), Modifiers::new());
    doc.pointer_down(450.0, 30.0, MouseButton::Left);
    pump(&mut doc, &mut overlay);
    println!("outside click -> open = {}", open.get());

    overlay.render(&mut doc, props(&open));
    report("re-rendered", &overlay, &doc);

    open.set(true);
    overlay.render(&mut doc, props(&open));
    doc.key_down(Key::Escape, Modifiers::new());
    pump(&mut doc, &mut overlay);
    println!("escape -> open = {}", open.get());
    overlay.render(&mut doc, props(&open));

    overlay.unmount(&mut doc);
    println!(
        "done: {} nodes, {} listeners",
        doc.node_count(),
        doc.listener_count()
    );
    Ok(())
}

fn pump(doc: &mut Document, overlay: &mut Overlay) {
    for notification in doc.take_notifications() {
        overlay.handle(doc, &notification);
    }
}

fn report(label: &str, overlay: &Overlay, doc: &Document) {
    match (overlay.positioned(), overlay.floating_root()) {
        (Some(positioned), Some(root)) => {
            let rect = doc.bounding_rect(root).unwrap_or_default();
            println!(
                "{label}: {} at ({:.0}, {:.0}) size {:.0}x{:.0}, {} subscriptions",
                positioned.placement,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                overlay.subscription_count()
            );
        }
        _ => println!("{label}: not mounted"),
    }
}
