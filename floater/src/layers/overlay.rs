//! The overlay component.
//!
//! Overlays are floating panels positioned against an anchor element. They
//! are used for dropdowns, context menus, tooltips, and pickers.
//!
//! An overlay is controlled: its owner passes [`OverlayProps`] on every
//! render, including `open`, and receives close requests through the
//! `on_open_change` callback. The overlay:
//! - Mounts its floating root only while open (mount/unmount, not hide/show)
//! - Recomputes its position on anchor/floating resizes, scrolls and
//!   viewport resizes
//! - Requests close on outside pointer-downs, escape, or a detached anchor
//! - Tears down every listener synchronously when closed
//!
//! # Usage
//!
//! ```ignore
//! let mut overlay = Overlay::new();
//! overlay.render(&mut doc, OverlayProps::new(Some(button), open)
//!     .placement(Placement::BottomStart)
//!     .on_open_change(move |open| state.set(open)));
//!
//! for notification in doc.take_notifications() {
//!     overlay.handle(&mut doc, &notification);
//! }
//! ```

use std::fmt;

use floatdom::{Document, DomError, Event, FloatingStyle, NodeId, Notification, Strategy};
use log::{debug, trace};

use super::portal::{Content, Portal, SelectorTarget};
use crate::auto_update::AutoUpdate;
use crate::config::OverlayConfig;
use crate::dismiss::{DismissalWatcher, WatcherState};
use crate::open_state::{DismissReason, OpenChange, OpenStateController};
use crate::position::{ComputedPosition, Placement, PositionOptions, Positioned, compute_position};

/// What the owner passes in on every render.
pub struct OverlayProps {
    /// Anchor element. `None` renders nothing.
    pub reference: Option<NodeId>,
    pub open: bool,
    pub on_open_change: Option<OpenChange>,
    pub placement: Placement,
    pub offset: f64,
    pub match_width: bool,
    pub padding: f64,
    pub strategy: Strategy,
    /// Selector of the node the floating root is mounted under.
    pub portal_target: String,
    pub close_on_escape: bool,
    /// Builds the floating content each time the overlay mounts.
    pub content: Option<Content>,
}

/// Snapshot of the owner-controlled part of [`OverlayProps`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    pub anchor: Option<NodeId>,
    pub open: bool,
    pub placement: Placement,
    pub offset: f64,
    pub match_width: bool,
}

impl OverlayProps {
    pub fn new(reference: Option<NodeId>, open: bool) -> Self {
        Self::from_config(&OverlayConfig::default(), reference, open)
    }

    pub fn from_config(config: &OverlayConfig, reference: Option<NodeId>, open: bool) -> Self {
        Self {
            reference,
            open,
            on_open_change: None,
            placement: config.placement,
            offset: config.offset,
            match_width: config.match_width,
            padding: config.padding,
            strategy: config.strategy,
            portal_target: config.portal_target.clone(),
            close_on_escape: config.close_on_escape,
            content: None,
        }
    }

    pub fn on_open_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(callback));
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn match_width(mut self, enabled: bool) -> Self {
        self.match_width = enabled;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn portal_target(mut self, selector: impl Into<String>) -> Self {
        self.portal_target = selector.into();
        self
    }

    pub fn close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }

    pub fn content(
        mut self,
        build: impl Fn(&mut Document, NodeId) -> Result<(), DomError> + 'static,
    ) -> Self {
        self.content = Some(Box::new(build));
        self
    }

    pub fn state(&self) -> OverlayState {
        OverlayState {
            anchor: self.reference,
            open: self.open,
            placement: self.placement,
            offset: self.offset,
            match_width: self.match_width,
        }
    }

    fn position_options(&self) -> PositionOptions {
        PositionOptions {
            placement: self.placement,
            offset: self.offset,
            padding: self.padding,
            match_width: self.match_width,
            ..PositionOptions::default()
        }
    }
}

impl fmt::Debug for OverlayProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayProps")
            .field("state", &self.state())
            .field("strategy", &self.strategy)
            .field("portal_target", &self.portal_target)
            .field("close_on_escape", &self.close_on_escape)
            .field("content", &self.content.is_some())
            .finish()
    }
}

/// A floating overlay instance. One per consumer.
pub struct Overlay {
    portal: Portal<SelectorTarget>,
    auto_update: AutoUpdate,
    watcher: DismissalWatcher,
    controller: OpenStateController,
    anchor: Option<NodeId>,
    options: PositionOptions,
    strategy: Strategy,
    close_on_escape: bool,
    content: Option<Content>,
    computed: Option<ComputedPosition>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            portal: Portal::new(SelectorTarget::default()),
            auto_update: AutoUpdate::new(),
            watcher: DismissalWatcher::new(),
            controller: OpenStateController::new(false, None),
            anchor: None,
            options: PositionOptions::default(),
            strategy: Strategy::default(),
            close_on_escape: true,
            content: None,
            computed: None,
        }
    }

    /// Reconcile with the owner's props.
    ///
    /// closed → open mounts and subscribes, open → closed tears everything
    /// down before returning, open → open recomputes the position.
    pub fn render(&mut self, doc: &mut Document, props: OverlayProps) {
        let options = props.position_options();
        let OverlayProps {
            reference,
            open,
            on_open_change,
            strategy,
            portal_target,
            close_on_escape,
            content,
            ..
        } = props;

        self.controller.sync(open, on_open_change);

        // A new anchor, target or listener set means starting over.
        let retarget = self.anchor != reference
            || self.portal.target().selector() != portal_target
            || self.close_on_escape != close_on_escape;
        if retarget {
            self.close(doc);
            self.portal = Portal::new(SelectorTarget::new(portal_target));
        }

        self.anchor = reference;
        self.options = options;
        self.strategy = strategy;
        self.close_on_escape = close_on_escape;
        if content.is_some() {
            self.content = content;
        }

        if open {
            self.sync(doc);
        } else {
            self.close(doc);
        }
    }

    /// Feed one notification from the document. Returns whether this
    /// overlay owned it.
    pub fn handle(&mut self, doc: &mut Document, notification: &Notification) -> bool {
        let listener = notification.listener;

        if self.auto_update.owns(listener) {
            trace!("relayout: {:?}", notification.event);
            if self.portal.is_mounted() {
                self.update_position(doc);
            } else if self.controller.is_open() {
                self.sync(doc);
            }
            return true;
        }

        if !self.watcher.owns(listener) {
            return false;
        }
        let (Some(anchor), Some(root)) = (self.anchor, self.portal.root()) else {
            return true;
        };

        let reason = match &notification.event {
            Event::PointerDown { target, .. } => {
                self.watcher.on_pointer_down(doc, *target, anchor, root)
            }
            Event::KeyDown { key, .. } => self.watcher.on_key_down(*key),
            _ => None,
        };
        if let Some(reason) = reason {
            self.controller.request_close(reason);
        }
        true
    }

    /// Tear down for an owner that goes away.
    pub fn unmount(&mut self, doc: &mut Document) {
        self.close(doc);
        self.anchor = None;
        self.content = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.portal.is_mounted()
    }

    pub fn floating_root(&self) -> Option<NodeId> {
        self.portal.root()
    }

    /// Selector nested overlays can use as their portal target.
    pub fn floating_selector(&self, doc: &Document) -> Option<String> {
        let root = self.portal.root()?;
        doc.element_id(root).map(|id| format!("#{id}"))
    }

    /// Last computed position, in viewport space.
    pub fn positioned(&self) -> Option<Positioned> {
        self.computed.map(|c| c.positioned)
    }

    pub fn computed(&self) -> Option<ComputedPosition> {
        self.computed
    }

    /// Live listener registrations held by this overlay.
    pub fn subscription_count(&self) -> usize {
        self.auto_update.len() + self.watcher.listener_count()
    }

    pub fn watcher_state(&self) -> WatcherState {
        self.watcher.state()
    }

    fn sync(&mut self, doc: &mut Document) {
        let Some(anchor) = self.anchor else {
            self.close(doc);
            return;
        };

        if self.portal.is_mounted() {
            self.watcher.arm(doc, self.close_on_escape);
            self.update_position(doc);
            return;
        }

        if doc.bounding_rect(anchor).is_none() {
            if doc.exists(anchor) && self.auto_update.is_empty() {
                self.auto_update.watch_anchor(doc, anchor);
            }
            debug!("overlay waiting: anchor {anchor} not ready");
            return;
        }

        let Some(root) = self.portal.mount(doc, self.content.as_ref()) else {
            self.auto_update.teardown(doc);
            return;
        };

        self.auto_update.start(doc, anchor, root);
        self.watcher.arm(doc, self.close_on_escape);
        self.update_position(doc);
    }

    fn update_position(&mut self, doc: &mut Document) {
        let (Some(anchor), Some(root)) = (self.anchor, self.portal.root()) else {
            return;
        };
        if !doc.is_connected(anchor) {
            self.request_close(DismissReason::DetachedAnchor);
            return;
        }

        let floating = doc.content_size(root);
        let computed =
            match compute_position(doc.bounding_rect(anchor), floating, doc.viewport(), &self.options) {
                Ok(computed) => computed,
                Err(err) => {
                    debug!("position skipped: {err}");
                    return;
                }
            };

        let coordinates = computed
            .positioned
            .coordinates
            .to_strategy(self.strategy, doc.containing_origin(root));
        let mut style = FloatingStyle::new(self.strategy, coordinates.x, coordinates.y);
        if self.options.match_width {
            style = style.width(computed.size.width);
        }
        if let Err(err) = doc.set_floating_style(root, style) {
            debug!("floating style not applied: {err}");
            return;
        }

        trace!(
            "{} placed {} at ({:.1}, {:.1})",
            root, computed.positioned.placement, coordinates.x, coordinates.y
        );
        self.computed = Some(computed);
    }

    fn request_close(&mut self, reason: DismissReason) {
        if self.watcher.request(reason) {
            self.controller.request_close(reason);
        }
    }

    fn close(&mut self, doc: &mut Document) {
        self.auto_update.teardown(doc);
        self.watcher.disarm(doc);
        if self.portal.is_mounted() {
            self.portal.unmount(doc);
        }
        self.computed = None;
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("anchor", &self.anchor)
            .field("root", &self.portal.root())
            .field("controller", &self.controller)
            .field("watcher", &self.watcher.state())
            .field("subscriptions", &self.auto_update.len())
            .field("computed", &self.computed)
            .finish()
    }
}
