#![forbid(unsafe_code)]

//! Floating widgets for floatkit.
//!
//! - [`floating_menu`] - open/close lifecycle and positioning of menus
//! - [`host`] - traits a rendering host implements to drive them

pub mod floating_menu;
pub mod host;

pub use floating_menu::{
    DEFAULT_CONTAINER_SELECTOR, FloatingMenu, FloatingMenuConfig, MenuState, MenuTransition,
    TransitionCause,
};
pub use host::{
    LayoutObserver, MenuHost, ResizeHandle, ResizeSignal, ResizeSubscription, ResizeTarget,
    StyleApplier,
};
