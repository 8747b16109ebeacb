#![forbid(unsafe_code)]

//! Host collaborators for floating widgets.
//!
//! Widgets in this crate never touch a rendering host directly. The host
//! (a DOM binding, a test double, a native toolkit) implements these traits
//! and hands itself to the widget on every call.

use floatkit_core::geometry::{Rect, Size};
use floatkit_layout::{Container, OffsetProperty, TextDirection};

/// Synchronous access to current rendered geometry.
pub trait LayoutObserver {
    /// Bounding box of the trigger element, if it is known yet.
    fn trigger_rect(&self) -> Option<Rect>;

    /// The container the menu lives in, resolved with `selector`.
    ///
    /// Hosts fall back to the document root when nothing matches.
    fn container(&self, selector: &str) -> Container;

    /// Rendered size of the menu body.
    fn menu_size(&self) -> Size;

    /// Text direction of the container.
    fn text_direction(&self) -> TextDirection;
}

/// Elements whose box changes move the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeTarget {
    /// The menu container.
    Container,
    /// The element holding the trigger.
    TriggerParent,
}

/// An active resize observation.
pub trait ResizeHandle {
    /// Stop observing.
    fn release(self);
}

/// Source of resize notifications.
///
/// Hosts route notifications for observed targets to the widget's resize
/// entry point (for menus, [`FloatingMenu::on_resize`]).
///
/// [`FloatingMenu::on_resize`]: crate::floating_menu::FloatingMenu::on_resize
pub trait ResizeSignal {
    type Handle: ResizeHandle;

    /// Begin observing `target`. Returns `None` when the target does not
    /// exist (for example a trigger without a parent element).
    fn observe(&mut self, target: ResizeTarget) -> Option<Self::Handle>;
}

/// Writes offset styles onto the rendered menu element.
pub trait StyleApplier {
    /// Set `property` to `px` pixels.
    fn set_offset(&mut self, property: OffsetProperty, px: f64);

    /// Remove any value previously set for `property`.
    fn clear_offset(&mut self, property: OffsetProperty);
}

/// Everything a floating menu needs from its host.
pub trait MenuHost: LayoutObserver + ResizeSignal + StyleApplier {
    /// Move the menu element into the container matched by `selector`.
    fn attach_to_container(&mut self, selector: &str);

    /// Give keyboard focus back to the trigger.
    fn focus_trigger(&mut self);
}

/// Owns one resize observation and releases it exactly once.
///
/// Release happens on the first call to [`release`](Self::release) or on
/// drop, whichever comes first.
#[derive(Debug)]
pub struct ResizeSubscription<H: ResizeHandle> {
    target: ResizeTarget,
    handle: Option<H>,
}

impl<H: ResizeHandle> ResizeSubscription<H> {
    #[must_use]
    pub fn new(target: ResizeTarget, handle: H) -> Self {
        Self {
            target,
            handle: Some(handle),
        }
    }

    #[must_use]
    pub fn target(&self) -> ResizeTarget {
        self.target
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the observation. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.release();
                true
            }
            None => false,
        }
    }
}

impl<H: ResizeHandle> Drop for ResizeSubscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}
